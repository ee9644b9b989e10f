use crate::constants::{DEFAULT_MOVE_SPEED, DEFAULT_ROTATION_SPEED, PLAYER_TAG};
use crate::error::ControlError;

#[derive(Clone, Debug)]
pub struct MovementConfig {
    pub move_speed: f32, // units per second
    pub player_tag: &'static str,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            move_speed: DEFAULT_MOVE_SPEED,
            player_tag: PLAYER_TAG,
        }
    }
}

#[derive(Clone, Debug)]
pub struct RotationConfig {
    pub rotation_speed: f32, // degrees per second
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            rotation_speed: DEFAULT_ROTATION_SPEED,
        }
    }
}

/// Parse a configured rate. Negative and zero values are accepted as-is.
pub fn parse_speed(field: &'static str, raw: &str) -> Result<f32, ControlError> {
    let value: f32 = raw.trim().parse().map_err(|_| ControlError::InvalidSpeed {
        field,
        raw: raw.to_string(),
    })?;
    if !value.is_finite() {
        return Err(ControlError::NonFiniteSpeed { field, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_speed_accepts_signed_values() {
        assert_eq!(parse_speed("move_speed", " 7.5 "), Ok(7.5));
        assert_eq!(parse_speed("move_speed", "-3"), Ok(-3.0));
        assert_eq!(parse_speed("move_speed", "0"), Ok(0.0));
    }

    #[test]
    fn parse_speed_rejects_garbage_and_infinities() {
        assert!(matches!(
            parse_speed("rotation_speed", "fast"),
            Err(ControlError::InvalidSpeed { field: "rotation_speed", .. })
        ));
        assert!(matches!(
            parse_speed("rotation_speed", "inf"),
            Err(ControlError::NonFiniteSpeed { .. })
        ));
        assert!(matches!(
            parse_speed("rotation_speed", "NaN"),
            Err(ControlError::NonFiniteSpeed { .. })
        ));
    }
}
