use crate::dom;
use drive_core::PressHandler;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Route pointer presses on `slider` to `handler`.
///
/// The pointer is captured on press so the release is delivered to the slider
/// even when it happens outside the element.
pub fn wire_press_handlers<H>(slider: &web::HtmlInputElement, handler: Rc<RefCell<H>>, label: &'static str)
where
    H: PressHandler + 'static,
{
    wire_pointerdown(slider, handler.clone(), label);
    wire_pointerup(slider, handler, label);
}

fn wire_pointerdown<H>(slider: &web::HtmlInputElement, handler: Rc<RefCell<H>>, label: &'static str)
where
    H: PressHandler + 'static,
{
    let slider_for_capture = slider.clone();
    dom::add_listener(slider, "pointerdown", move |ev: web::PointerEvent| {
        _ = slider_for_capture.set_pointer_capture(ev.pointer_id());
        handler.borrow_mut().on_press_begin();
        log::info!("[pointer] {} pressed", label);
    });
}

fn wire_pointerup<H>(slider: &web::HtmlInputElement, handler: Rc<RefCell<H>>, label: &'static str)
where
    H: PressHandler + 'static,
{
    for event in ["pointerup", "pointercancel"] {
        let handler = handler.clone();
        dom::add_listener(slider, event, move |_ev: web::PointerEvent| {
            handler.borrow_mut().on_press_end();
            log::info!("[pointer] {} released", label);
        });
    }
}
