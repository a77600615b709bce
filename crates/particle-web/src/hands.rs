//! Bridge to the JavaScript hand-landmark detector (`js/hands.js`).
//!
//! Every tracking run gets its own `DetectionSender`, captured by the result
//! callback handed to JS. Once the run is stopped that sender goes stale, so
//! callbacks still in flight from the released camera are dropped.

use std::cell::RefCell;
use std::rc::Rc;

use particle_core::input::HAND_LANDMARK_COUNT;
use particle_core::{DetectionSender, HandLandmarks, Session};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::overlay::DebugOverlay;

#[wasm_bindgen(module = "/js/hands.js")]
extern "C" {
    #[wasm_bindgen(js_name = startHandTracking)]
    fn js_start_hand_tracking(
        video: &web::HtmlVideoElement,
        on_results: &js_sys::Function,
        on_ready: &js_sys::Function,
        on_error: &js_sys::Function,
    );

    #[wasm_bindgen(js_name = stopHandTracking)]
    fn js_stop_hand_tracking();
}

pub struct HandTracker {
    session: Rc<RefCell<Session>>,
    video: Option<web::HtmlVideoElement>,
    overlay: Option<Rc<DebugOverlay>>,
    sender: Option<DetectionSender>,
}

thread_local! {
    static TRACKER: RefCell<Option<HandTracker>> = const { RefCell::new(None) };
}

pub fn install(
    session: Rc<RefCell<Session>>,
    video: Option<web::HtmlVideoElement>,
    overlay: Option<DebugOverlay>,
) {
    TRACKER.with(|t| {
        *t.borrow_mut() = Some(HandTracker {
            session,
            video,
            overlay: overlay.map(Rc::new),
            sender: None,
        });
    });
}

/// Begin a tracking run (checkbox on).
pub fn start() {
    TRACKER.with(|t| {
        let mut guard = t.borrow_mut();
        let Some(tracker) = guard.as_mut() else {
            log::warn!("[hands] start requested before install");
            return;
        };
        let sender = tracker.session.borrow_mut().start_gesture_tracking();
        tracker.sender = Some(sender.clone());

        let Some(video) = tracker.video.clone() else {
            tracker
                .session
                .borrow_mut()
                .gesture_tracking_failed(&sender, "no #webcam video element");
            return;
        };

        let overlay = tracker.overlay.clone();
        let results_run = sender.clone();
        let on_results = Closure::wrap(Box::new(move |data: js_sys::Float32Array, num_hands: u32| {
            deliver(&results_run, overlay.as_deref(), &data.to_vec(), num_hands);
        }) as Box<dyn FnMut(js_sys::Float32Array, u32)>);

        let session_ready = tracker.session.clone();
        let ready_run = sender.clone();
        let on_ready = Closure::wrap(Box::new(move || {
            if let Ok(mut s) = session_ready.try_borrow_mut() {
                s.gesture_tracking_started(&ready_run);
            }
        }) as Box<dyn FnMut()>);

        let session_err = tracker.session.clone();
        let error_run = sender;
        let on_error = Closure::wrap(Box::new(move |reason: String| {
            if let Ok(mut s) = session_err.try_borrow_mut() {
                s.gesture_tracking_failed(&error_run, reason);
            }
        }) as Box<dyn FnMut(String)>);

        js_start_hand_tracking(
            &video,
            on_results.as_ref().unchecked_ref(),
            on_ready.as_ref().unchecked_ref(),
            on_error.as_ref().unchecked_ref(),
        );
        // JS may still hold these after a stop; the stale sender makes them inert
        on_results.forget();
        on_ready.forget();
        on_error.forget();
    });
}

/// End the current run (checkbox off). Pending and late detections are discarded.
pub fn stop() {
    TRACKER.with(|t| {
        let mut guard = t.borrow_mut();
        let Some(tracker) = guard.as_mut() else {
            return;
        };
        js_stop_hand_tracking();
        tracker.session.borrow_mut().stop_gesture_tracking();
        tracker.sender = None;
        if let Some(overlay) = &tracker.overlay {
            overlay.clear();
        }
    });
}

/// Feed one detector result from page script, using the current run.
#[wasm_bindgen]
pub fn push_hand_landmarks(data: &[f32], num_hands: u32) {
    TRACKER.with(|t| {
        let Ok(guard) = t.try_borrow() else {
            return;
        };
        if let Some(tracker) = guard.as_ref() {
            match &tracker.sender {
                Some(sender) => deliver(sender, tracker.overlay.as_deref(), data, num_hands),
                None => log::debug!("[hands] detection pushed while tracking is off"),
            }
        }
    });
}

/// Parse the first hand of a flat payload and post it.
fn deliver(
    sender: &DetectionSender,
    overlay: Option<&DebugOverlay>,
    data: &[f32],
    num_hands: u32,
) {
    if !sender.is_current() {
        log::debug!("[hands] late result from run {} dropped", sender.generation());
        return;
    }
    let hand = if num_hands == 0 {
        None
    } else {
        let first = data.get(..HAND_LANDMARK_COUNT * 3).unwrap_or(data);
        match HandLandmarks::from_flat(first) {
            Ok(hand) => Some(hand),
            Err(e) => {
                log::warn!("[hands] malformed landmarks: {}", e);
                None
            }
        }
    };
    if let Some(overlay) = overlay {
        match &hand {
            Some(h) => overlay.draw(h),
            None => overlay.clear(),
        }
    }
    sender.post(hand);
}
