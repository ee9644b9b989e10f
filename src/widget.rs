use drive_core::{AxisWidget, NEUTRAL_VALUE, SLIDER_MAX, SLIDER_MIN};
use web_sys as web;

/// `<input type="range">` adapter. The element's own min/max/step enforce the
/// \[0, 1\] range; they are forced here so the markup cannot widen it.
#[derive(Clone)]
pub struct DomSlider {
    input: web::HtmlInputElement,
}

impl DomSlider {
    pub fn new(input: web::HtmlInputElement) -> Self {
        input.set_min(&SLIDER_MIN.to_string());
        input.set_max(&SLIDER_MAX.to_string());
        input.set_step("any");
        Self { input }
    }

    pub fn element(&self) -> &web::HtmlInputElement {
        &self.input
    }
}

impl AxisWidget for DomSlider {
    fn value(&self) -> f32 {
        let v = self.input.value_as_number() as f32;
        if v.is_finite() {
            v
        } else {
            NEUTRAL_VALUE
        }
    }

    fn set_value(&mut self, value: f32) {
        self.input.set_value_as_number(value as f64);
    }
}
