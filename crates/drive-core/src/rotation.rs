//! Steering slider driving rotation about world up.
//!
//! Slider at 0.0 turns anti-clockwise at full `rotation_speed`, 1.0 turns
//! clockwise. Unlike the movement control, the target is never looked up and
//! must be handed in by the host.

use crate::constants::WORLD_UP;
use crate::mapper::{AxisMapper, Polarity};
use crate::params::RotationConfig;
use crate::scene::{ObjectId, TransformStore};
use crate::widget::{AxisWidget, PressHandler};

#[derive(Debug)]
pub struct RotationControl<W> {
    mapper: AxisMapper<W>,
}

impl<W: AxisWidget> RotationControl<W> {
    pub fn initialize(widget: W, config: &RotationConfig, target: Option<ObjectId>) -> Self {
        if target.is_none() {
            log::debug!("[rotation] no target configured; rotation disabled");
        }
        Self {
            mapper: AxisMapper::new(
                widget,
                config.rotation_speed,
                Polarity::HighPositive,
                target,
            ),
        }
    }

    pub fn on_frame<S>(&mut self, dt: f32, store: &mut S)
    where
        S: TransformStore + ?Sized,
    {
        let Some(degrees) = self.mapper.step(dt) else {
            return;
        };
        if let Some(t) = self.mapper.target().and_then(|id| store.transform_mut(id)) {
            t.rotate_world(WORLD_UP, degrees);
        }
    }

    /// Current signed turn rate in degrees per second (zero while released).
    pub fn turn_rate(&self) -> f32 {
        if self.mapper.is_active() {
            self.mapper.current_rate()
        } else {
            0.0
        }
    }

    pub fn is_active(&self) -> bool {
        self.mapper.is_active()
    }

    pub fn target(&self) -> Option<ObjectId> {
        self.mapper.target()
    }

    pub fn rotation_speed(&self) -> f32 {
        self.mapper.rate()
    }

    pub fn widget(&self) -> &W {
        self.mapper.widget()
    }

    pub fn widget_mut(&mut self) -> &mut W {
        self.mapper.widget_mut()
    }
}

impl<W> PressHandler for RotationControl<W> {
    fn on_press_begin(&mut self) {
        log::debug!("[rotation] press begin");
        self.mapper.on_press_begin();
    }

    fn on_press_end(&mut self) {
        log::debug!("[rotation] press end");
        self.mapper.on_press_end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Scene;
    use crate::transform::Transform;
    use crate::widget::SliderState;

    #[test]
    fn low_end_turns_anti_clockwise() {
        let mut scene = Scene::new();
        let id = scene.spawn("hero", Some("Player"), Transform::default());
        let mut c =
            RotationControl::initialize(SliderState::default(), &RotationConfig::default(), Some(id));
        c.on_press_begin();
        c.widget_mut().set_value(0.0);
        c.on_frame(0.25, &mut scene);
        let yaw = scene.transform(id).unwrap().yaw_degrees();
        assert!((yaw + 45.0).abs() < 1e-3, "yaw {yaw}");
    }

    #[test]
    fn unbound_target_is_a_no_op() {
        let mut scene = Scene::new();
        let id = scene.spawn("hero", Some("Player"), Transform::default());
        let mut c = RotationControl::initialize(SliderState::default(), &RotationConfig::default(), None);
        c.on_press_begin();
        c.widget_mut().set_value(1.0);
        c.on_frame(1.0, &mut scene);
        assert_eq!(*scene.transform(id).unwrap(), Transform::default());
        assert_eq!(c.turn_rate(), 180.0);
    }
}
