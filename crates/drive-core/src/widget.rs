//! Collaborator traits the host engine provides to a control.
//!
//! A control reads and writes its slider through [`AxisWidget`] and receives
//! pointer presses through [`PressHandler`]. Hosts decide how presses are
//! detected; the control only cares about the begin/end edges.

use crate::constants::{NEUTRAL_VALUE, SLIDER_MAX, SLIDER_MIN};

/// A one-dimensional widget exposing a value in \[0, 1\].
///
/// Implementations own the range invariant. Controls never clamp what they
/// read back.
pub trait AxisWidget {
    fn value(&self) -> f32;
    fn set_value(&mut self, value: f32);
}

/// Press edges delivered by the host's event dispatch.
pub trait PressHandler {
    fn on_press_begin(&mut self);
    fn on_press_end(&mut self);
}

/// In-memory slider used by the native host and tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderState {
    value: f32,
}

impl SliderState {
    pub fn new(value: f32) -> Self {
        let mut s = Self {
            value: NEUTRAL_VALUE,
        };
        s.set_value(value);
        s
    }
}

impl Default for SliderState {
    fn default() -> Self {
        Self {
            value: NEUTRAL_VALUE,
        }
    }
}

impl AxisWidget for SliderState {
    fn value(&self) -> f32 {
        self.value
    }

    fn set_value(&mut self, value: f32) {
        // NaN would poison every later frame; keep the previous value instead
        if value.is_nan() {
            return;
        }
        self.value = value.clamp(SLIDER_MIN, SLIDER_MAX);
    }
}
