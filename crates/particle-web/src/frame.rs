use std::cell::RefCell;
use std::rc::Rc;

use particle_core::{FrameClock, Session};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::render;
use crate::ui::ScaleReadout;

pub struct FrameContext<'a> {
    pub session: Rc<RefCell<Session>>,
    pub gpu: render::GpuState<'a>,
    pub canvas: web::HtmlCanvasElement,
    pub readout: Option<ScaleReadout>,
    pub clock: FrameClock,
}

impl FrameContext<'_> {
    pub fn frame(&mut self) {
        let dt = self.clock.tick();
        // Keep WebGPU surface sized to canvas backing size
        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());

        let Ok(mut session) = self.session.try_borrow_mut() else {
            return;
        };
        let stats = session.tick(dt, &mut self.gpu);
        if stats.hand_updated {
            if let Some(readout) = &self.readout {
                readout.set(session.hand().scale());
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    particle_count: usize,
) -> anyhow::Result<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    render::GpuState::new(leaked_canvas, particle_count).await
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
