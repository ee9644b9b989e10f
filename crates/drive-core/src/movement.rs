//! Throttle slider driving forward/backward translation.
//!
//! Slider at 0.0 drives the target forward at full `move_speed`, 1.0 drives it
//! backward, 0.5 holds it still. Translation is along the target's own
//! forward axis, so it follows whatever heading the rotation control set.

use crate::constants::LOCAL_FORWARD;
use crate::mapper::{AxisMapper, Polarity};
use crate::params::MovementConfig;
use crate::scene::{ObjectId, TransformStore};
use crate::widget::{AxisWidget, PressHandler};

#[derive(Debug)]
pub struct MovementControl<W> {
    mapper: AxisMapper<W>,
}

impl<W: AxisWidget> MovementControl<W> {
    /// Bind the widget and resolve the target.
    ///
    /// An explicit `target` wins; otherwise `find_tagged` is asked once for an
    /// object carrying `config.player_tag`. Finding nothing is not an error,
    /// the control just never moves anything.
    pub fn initialize<F>(
        widget: W,
        config: &MovementConfig,
        target: Option<ObjectId>,
        find_tagged: F,
    ) -> Self
    where
        F: FnOnce(&str) -> Option<ObjectId>,
    {
        let target = target.or_else(|| find_tagged(config.player_tag));
        match target {
            Some(id) => log::debug!("[movement] bound to {:?}", id),
            None => log::debug!(
                "[movement] no object tagged {:?}; movement disabled",
                config.player_tag
            ),
        }
        Self {
            mapper: AxisMapper::new(widget, config.move_speed, Polarity::LowPositive, target),
        }
    }

    pub fn on_frame<S>(&mut self, dt: f32, store: &mut S)
    where
        S: TransformStore + ?Sized,
    {
        let Some(distance) = self.mapper.step(dt) else {
            return;
        };
        if let Some(t) = self.mapper.target().and_then(|id| store.transform_mut(id)) {
            t.translate_local(LOCAL_FORWARD * distance);
        }
    }

    /// Current signed speed in units per second (zero while released).
    pub fn speed(&self) -> f32 {
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

    pub fn move_speed(&self) -> f32 {
        self.mapper.rate()
    }

    pub fn widget(&self) -> &W {
        self.mapper.widget()
    }

    pub fn widget_mut(&mut self) -> &mut W {
        self.mapper.widget_mut()
    }
}

impl<W> PressHandler for MovementControl<W> {
    fn on_press_begin(&mut self) {
        log::debug!("[movement] press begin");
        self.mapper.on_press_begin();
    }

    fn on_press_end(&mut self) {
        log::debug!("[movement] press end");
        self.mapper.on_press_end();
    }
}
