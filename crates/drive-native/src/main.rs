use std::env::VarError;

use anyhow::Context;
use drive_core::{
    parse_speed, AxisWidget, MovementConfig, MovementControl, PressHandler, RotationConfig,
    RotationControl, Scene, SliderState, Transform, DEFAULT_MOVE_SPEED, DEFAULT_ROTATION_SPEED,
    PLAYER_TAG,
};
use glam::Vec3;

mod timeline;

use timeline::{Axis, HostEvent, Timeline};

const FRAME_RATE: u32 = 60;
const TAIL_SEC: f32 = 0.5; // keep simulating after the last scripted event

fn read_speed(var: &str, field: &'static str, default: f32) -> anyhow::Result<f32> {
    match std::env::var(var) {
        Ok(raw) => parse_speed(field, &raw).with_context(|| format!("reading {var}")),
        Err(VarError::NotPresent) => Ok(default),
        Err(e) => Err(e).with_context(|| format!("reading {var}")),
    }
}

struct Controls {
    movement: MovementControl<SliderState>,
    rotation: RotationControl<SliderState>,
}

impl Controls {
    fn dispatch(&mut self, event: HostEvent) {
        match event {
            HostEvent::Press(axis) => self.handler(axis).on_press_begin(),
            HostEvent::Release(axis) => self.handler(axis).on_press_end(),
            HostEvent::Drag(Axis::Throttle, v) => self.movement.widget_mut().set_value(v),
            HostEvent::Drag(Axis::Steering, v) => self.rotation.widget_mut().set_value(v),
        }
    }

    fn handler(&mut self, axis: Axis) -> &mut dyn PressHandler {
        match axis {
            Axis::Throttle => &mut self.movement,
            Axis::Steering => &mut self.rotation,
        }
    }
}

fn log_pose(label: &str, t: &Transform) {
    log::info!(
        "[{}] pos=({:.2},{:.2},{:.2}) heading={:.1}°",
        label,
        t.position.x,
        t.position.y,
        t.position.z,
        t.yaw_degrees()
    );
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let movement_cfg = MovementConfig {
        move_speed: read_speed("DRIVE_MOVE_SPEED", "move_speed", DEFAULT_MOVE_SPEED)?,
        ..Default::default()
    };
    let rotation_cfg = RotationConfig {
        rotation_speed: read_speed(
            "DRIVE_ROTATION_SPEED",
            "rotation_speed",
            DEFAULT_ROTATION_SPEED,
        )?,
    };
    log::info!(
        "[controls] move_speed={:.2} rotation_speed={:.1}",
        movement_cfg.move_speed,
        rotation_cfg.rotation_speed
    );

    let mut scene = Scene::new();
    scene.spawn("ground", None, Transform::default());
    let player = scene.spawn("player", Some(PLAYER_TAG), Transform::from_position(Vec3::ZERO));

    let mut controls = Controls {
        movement: MovementControl::initialize(SliderState::default(), &movement_cfg, None, |tag| {
            scene.find_with_tag(tag)
        }),
        rotation: RotationControl::initialize(SliderState::default(), &rotation_cfg, Some(player)),
    };

    let mut timeline = Timeline::new(timeline::demo_script());
    let dt = 1.0 / FRAME_RATE as f32;
    let total_frames = ((timeline.last_at() + TAIL_SEC) * FRAME_RATE as f32).ceil() as u32;

    for frame in 0..=total_frames {
        let now = frame as f32 * dt;
        for ev in timeline.due(now) {
            log::info!("[input] t={:.2}s {:?}", now, ev.event);
            controls.dispatch(ev.event);
        }

        controls.rotation.on_frame(dt, &mut scene);
        controls.movement.on_frame(dt, &mut scene);

        if frame > 0 && frame % FRAME_RATE == 0 {
            if let Some(t) = scene.transform(player) {
                log_pose(&format!("t={:.0}s", now), t);
            }
            log::debug!(
                "throttle={:.2} steering={:.2}",
                controls.movement.widget().value(),
                controls.rotation.widget().value()
            );
        }
    }

    let t = scene
        .transform(player)
        .context("player vanished from the scene")?;
    log_pose("final", t);
    Ok(())
}
