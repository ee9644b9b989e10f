#![cfg(target_arch = "wasm32")]
use drive_core::{
    MovementConfig, MovementControl, RotationConfig, RotationControl, Scene, Transform,
    DEFAULT_MOVE_SPEED, DEFAULT_ROTATION_SPEED, PLAYER_TAG,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod layout;
mod overlay;
mod render;
mod widget;

use constants::*;
use widget::DomSlider;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    if let Some(window) = web::window() {
        dom::add_listener(&window, "resize", move |_ev: web::Event| {
            dom::sync_canvas_backing_size(&canvas_resize);
        });
    }
}

fn slider_speed(slider: &web::HtmlInputElement, field: &'static str, default: f32) -> f32 {
    let raw = slider.get_attribute(SPEED_ATTR);
    config::speed_or_default(field, raw.as_deref(), default)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("drive-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let throttle: web::HtmlInputElement = dom::element_by_id(&document, THROTTLE_ID)?;
    let steering: web::HtmlInputElement = dom::element_by_id(&document, STEERING_ID)?;
    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, CANVAS_ID)?;
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let mut scene = Scene::new();
    let player = scene.spawn("player", Some(PLAYER_TAG), Transform::default());

    let movement_cfg = MovementConfig {
        move_speed: slider_speed(&throttle, "move_speed", DEFAULT_MOVE_SPEED),
        ..Default::default()
    };
    let rotation_cfg = RotationConfig {
        rotation_speed: slider_speed(&steering, "rotation_speed", DEFAULT_ROTATION_SPEED),
    };
    log::info!(
        "[controls] move_speed={:.2} rotation_speed={:.1}",
        movement_cfg.move_speed,
        rotation_cfg.rotation_speed
    );

    let movement = Rc::new(RefCell::new(MovementControl::initialize(
        DomSlider::new(throttle.clone()),
        &movement_cfg,
        None,
        |tag| scene.find_with_tag(tag),
    )));
    let rotation = Rc::new(RefCell::new(RotationControl::initialize(
        DomSlider::new(steering.clone()),
        &rotation_cfg,
        Some(player),
    )));

    events::wire_press_handlers(&throttle, movement.clone(), "throttle");
    events::wire_press_handlers(&steering, rotation.clone(), "steering");

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        player: Some(player),
        movement,
        rotation,
        document,
        canvas,
        ctx,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
