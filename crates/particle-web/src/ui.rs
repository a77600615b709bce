use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;
use particle_core::Session;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::color::{format_hex_color, format_scale, parse_hex_color};
use crate::constants::{COLOR_INPUT_ID, SCALE_VALUE_ID, SHAPE_SELECT_ID, TOGGLE_HANDS_ID};
use crate::dom::optional_element;
use crate::hands;

/// Shape select, colour picker and hand-tracking toggle.
///
/// Returns whether gesture tracking should start right away (the toggle's
/// initial state; on when the toggle is missing).
pub fn wire_controls(document: &web::Document, session: Rc<RefCell<Session>>) -> bool {
    if let Some(select) = optional_element::<web::HtmlSelectElement>(document, SHAPE_SELECT_ID) {
        select.set_value(session.borrow().morph().target_kind().name());
        let session = session.clone();
        let select_c = select.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
            let name = select_c.value();
            if !session.borrow_mut().set_target(&name) {
                log::debug!("[ui] ignoring shape {:?}", name);
            }
        }) as Box<dyn FnMut(_)>);
        select
            .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
            .ok();
        closure.forget();
    }

    if let Some(input) = optional_element::<web::HtmlInputElement>(document, COLOR_INPUT_ID) {
        input.set_value(&format_hex_color(session.borrow().tint().to_array()));
        let session = session.clone();
        let input_c = input.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
            let value = input_c.value();
            match parse_hex_color(&value) {
                Some(rgb) => session.borrow_mut().set_tint(Vec3::from(rgb)),
                None => log::warn!("[ui] unparseable colour {:?}", value),
            }
        }) as Box<dyn FnMut(_)>);
        input
            .add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())
            .ok();
        closure.forget();
    }

    match optional_element::<web::HtmlInputElement>(document, TOGGLE_HANDS_ID) {
        Some(toggle) => {
            let toggle_c = toggle.clone();
            let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
                if toggle_c.checked() {
                    hands::start();
                } else {
                    hands::stop();
                }
            }) as Box<dyn FnMut(_)>);
            toggle
                .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
                .ok();
            closure.forget();
            toggle.checked()
        }
        None => true,
    }
}

/// `#scale-value` text node.
pub struct ScaleReadout {
    el: web::Element,
}

impl ScaleReadout {
    pub fn new(document: &web::Document) -> Option<Self> {
        optional_element(document, SCALE_VALUE_ID).map(|el| Self { el })
    }

    pub fn set(&self, scale: f32) {
        self.el.set_text_content(Some(&format_scale(scale)));
    }
}
