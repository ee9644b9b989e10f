use crate::constants::*;
use crate::dom;
use crate::layout::ViewLayout;
use crate::overlay;
use crate::render;
use crate::widget::DomSlider;
use drive_core::{MovementControl, ObjectId, RotationControl, Scene};
use glam::{Vec2, Vec3};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Scene,
    pub player: Option<ObjectId>,
    pub movement: Rc<RefCell<MovementControl<DomSlider>>>,
    pub rotation: Rc<RefCell<RotationControl<DomSlider>>>,

    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,

    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = dt.as_secs_f32().min(MAX_FRAME_DT_SEC);

        // Rotation first so this frame's translation uses the new heading
        self.rotation.borrow_mut().on_frame(dt_sec, &mut self.scene);
        self.movement.borrow_mut().on_frame(dt_sec, &mut self.scene);

        let player = self.player.and_then(|id| self.scene.transform(id)).copied();
        let (speed, turn, active) = {
            let m = self.movement.borrow();
            let r = self.rotation.borrow();
            (m.speed(), r.turn_rate(), m.is_active() || r.is_active())
        };

        let layout = ViewLayout {
            center: player.map(|t| t.position).unwrap_or(Vec3::ZERO),
            canvas_size: Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32),
            px_per_unit: PX_PER_UNIT * dom::device_pixel_ratio(),
        };
        render::draw_scene(&self.ctx, &layout, player.as_ref(), active);

        if let Some(t) = player {
            let text = overlay::readout_text(t.position, t.yaw_degrees(), speed, turn);
            overlay::update_readout(&self.document, READOUT_ID, &text);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
