use std::cell::RefCell;
use std::rc::Rc;

use particle_core::Session;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Drag-to-rotate: press on the canvas, move and release anywhere in the window.
pub fn wire_pointer_handlers(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    session: Rc<RefCell<Session>>,
) {
    // pointerdown
    {
        let session = session.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            session
                .borrow_mut()
                .pointer_down(ev.client_x() as f32, ev.client_y() as f32);
        }) as Box<dyn FnMut(_)>);
        canvas
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref())
            .ok();
        closure.forget();
    }
    // pointermove
    {
        let session = session.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            session
                .borrow_mut()
                .pointer_move(ev.client_x() as f32, ev.client_y() as f32);
        }) as Box<dyn FnMut(_)>);
        window
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref())
            .ok();
        closure.forget();
    }
    // pointerup / pointercancel
    for kind in ["pointerup", "pointercancel"] {
        let session = session.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            session.borrow_mut().pointer_up();
        }) as Box<dyn FnMut(_)>);
        window
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .ok();
        closure.forget();
    }
}
