//! Shared slider-to-rate mapping behind both controls.
//!
//! The mapper owns the widget, the configured rate and the press latch. While
//! released it pins the widget to neutral every frame; while pressed it turns
//! the widget's offset from neutral into a signed rate.

use crate::constants::NEUTRAL_VALUE;
use crate::scene::ObjectId;
use crate::widget::{AxisWidget, PressHandler};

/// Which end of the slider produces the positive rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Polarity {
    /// 0.0 maps to `+rate`, 1.0 to `-rate`.
    LowPositive,
    /// 0.0 maps to `-rate`, 1.0 to `+rate`.
    HighPositive,
}

/// Linear remap of a slider value to a signed rate. Zero exactly at neutral.
#[inline]
pub fn signed_rate(value: f32, rate: f32, polarity: Polarity) -> f32 {
    let offset = match polarity {
        Polarity::LowPositive => NEUTRAL_VALUE - value,
        Polarity::HighPositive => value - NEUTRAL_VALUE,
    };
    offset * 2.0 * rate
}

#[derive(Debug)]
pub struct AxisMapper<W> {
    widget: W,
    rate: f32,
    polarity: Polarity,
    active: bool,
    target: Option<ObjectId>,
}

impl<W: AxisWidget> AxisMapper<W> {
    /// Bind to `widget` and put it at neutral. Starts released.
    pub fn new(mut widget: W, rate: f32, polarity: Polarity, target: Option<ObjectId>) -> Self {
        widget.set_value(NEUTRAL_VALUE);
        Self {
            widget,
            rate,
            polarity,
            active: false,
            target,
        }
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn target(&self) -> Option<ObjectId> {
        self.target
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    /// Host-side access for drag systems writing the slider.
    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    /// Signed rate for the current widget value, ignoring the press latch.
    pub fn current_rate(&self) -> f32 {
        signed_rate(self.widget.value(), self.rate, self.polarity)
    }

    /// Per-frame step. Returns the amount to apply this frame, or `None` when
    /// released (the widget is recentred in that case).
    pub fn step(&mut self, dt: f32) -> Option<f32> {
        if !self.active {
            self.widget.set_value(NEUTRAL_VALUE);
            return None;
        }
        Some(self.current_rate() * dt)
    }
}

impl<W> PressHandler for AxisMapper<W> {
    fn on_press_begin(&mut self) {
        self.active = true;
    }

    fn on_press_end(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::SliderState;

    #[test]
    fn signed_rate_is_zero_at_neutral() {
        assert_eq!(signed_rate(0.5, 10.0, Polarity::LowPositive), 0.0);
        assert_eq!(signed_rate(0.5, 10.0, Polarity::HighPositive), 0.0);
    }

    #[test]
    fn polarity_flips_the_sign() {
        for v in [0.0_f32, 0.1, 0.3, 0.7, 1.0] {
            let a = signed_rate(v, 4.0, Polarity::LowPositive);
            let b = signed_rate(v, 4.0, Polarity::HighPositive);
            assert!((a + b).abs() < 1e-6, "value {v}");
        }
    }

    #[test]
    fn new_mapper_recentres_widget_and_starts_released() {
        let m = AxisMapper::new(SliderState::new(0.9), 1.0, Polarity::HighPositive, None);
        assert_eq!(m.widget().value(), NEUTRAL_VALUE);
        assert!(!m.is_active());
    }

    #[test]
    fn step_while_released_pins_neutral() {
        let mut m = AxisMapper::new(SliderState::default(), 1.0, Polarity::LowPositive, None);
        m.widget_mut().set_value(0.0);
        assert_eq!(m.step(0.016), None);
        assert_eq!(m.widget().value(), NEUTRAL_VALUE);
        assert_eq!(m.step(0.016), None);
        assert_eq!(m.widget().value(), NEUTRAL_VALUE);
    }

    #[test]
    fn step_while_pressed_scales_by_dt() {
        let mut m = AxisMapper::new(SliderState::default(), 2.0, Polarity::LowPositive, None);
        m.on_press_begin();
        m.widget_mut().set_value(0.0);
        let amount = m.step(0.25).unwrap();
        assert!((amount - 0.5).abs() < 1e-6);
    }
}
