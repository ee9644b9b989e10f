use glam::Vec3;
use web_sys as web;

/// Text shown under the view: pose plus live rates.
pub fn readout_text(position: Vec3, yaw_deg: f32, speed: f32, turn_rate: f32) -> String {
    format!(
        "x {:+.2}  z {:+.2}  heading {:+.0}°  speed {:+.2} u/s  turn {:+.0}°/s",
        position.x, position.z, yaw_deg, speed, turn_rate
    )
}

/// Update the readout element; silently skipped when it is absent.
pub fn update_readout(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}
