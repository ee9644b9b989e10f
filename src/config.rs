use drive_core::parse_speed;

/// Resolve a speed from an optional attribute value, falling back to
/// `default` when it is absent or invalid.
pub fn speed_or_default(field: &'static str, raw: Option<&str>, default: f32) -> f32 {
    match raw {
        None => default,
        Some(s) => match parse_speed(field, s) {
            Ok(v) => v,
            Err(e) => {
                log::warn!("[config] {}; using default {}", e, default);
                default
            }
        },
    }
}
