use std::f64::consts::TAU;

use particle_core::HandLandmarks;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{
    DEBUG_CANVAS_HEIGHT, DEBUG_CANVAS_ID, DEBUG_CANVAS_WIDTH, LANDMARK_DOT_COLOR,
    LANDMARK_DOT_RADIUS,
};
use crate::dom::optional_element;
use crate::layout::landmark_to_overlay;

/// Small 2-D canvas showing where the detector sees the hand.
pub struct DebugOverlay {
    ctx: web::CanvasRenderingContext2d,
    width: u32,
    height: u32,
}

impl DebugOverlay {
    pub fn new(document: &web::Document) -> Option<Self> {
        let canvas: web::HtmlCanvasElement = optional_element(document, DEBUG_CANVAS_ID)?;
        canvas.set_width(DEBUG_CANVAS_WIDTH);
        canvas.set_height(DEBUG_CANVAS_HEIGHT);
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            ctx,
            width: DEBUG_CANVAS_WIDTH,
            height: DEBUG_CANVAS_HEIGHT,
        })
    }

    pub fn clear(&self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
    }

    pub fn draw(&self, hand: &HandLandmarks) {
        self.clear();
        self.ctx.set_fill_style_str(LANDMARK_DOT_COLOR);
        for p in hand.points() {
            let (x, y) = landmark_to_overlay(p.x, p.y, self.width, self.height);
            self.ctx.begin_path();
            let _ = self.ctx.arc(x, y, LANDMARK_DOT_RADIUS, 0.0, TAU);
            self.ctx.fill();
        }
    }
}
