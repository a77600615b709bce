#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;

use particle_core::{FrameClock, Session, SessionConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod color;
mod constants;
mod dom;
mod events;
mod frame;
mod hands;
mod layout;
mod overlay;
mod render;
mod ui;

pub use hands::push_hand_landmarks;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("particle-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, constants::CANVAS_ID)?;
    // Avoid grabbing a 2D context here to allow WebGPU to acquire the canvas
    dom::sync_canvas_backing_size(&canvas);
    dom::wire_resize(&window, canvas.clone());

    // Shapes are generated once, before the first frame
    let config = SessionConfig::default();
    let particle_count = config.particle_count;
    let session = Rc::new(RefCell::new(Session::build(config)));

    let gpu = frame::init_gpu(&canvas, particle_count).await?;

    hands::install(
        session.clone(),
        dom::optional_element(&document, constants::WEBCAM_ID),
        overlay::DebugOverlay::new(&document),
    );
    let track_hands = ui::wire_controls(&document, session.clone());
    events::wire_pointer_handlers(&window, &canvas, session.clone());
    if track_hands {
        hands::start();
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session,
        gpu,
        canvas,
        readout: ui::ScaleReadout::new(&document),
        clock: FrameClock::new(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
