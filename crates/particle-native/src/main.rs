//! Headless driver: runs a full session against a logging backend with a
//! synthetic hand detector on its own thread.

use std::f32::consts::TAU;
use std::thread;
use std::time::{Duration, Instant};

use glam::Vec3;
use particle_core::input::hand::{INDEX_TIP, THUMB_TIP};
use particle_core::input::HAND_LANDMARK_COUNT;
use particle_core::{
    FrameClock, FrameSnapshot, HandLandmarks, RenderBackend, Session, SessionConfig, ShapeKind,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const FRAMES: u64 = 600;
const FRAME_TIME: Duration = Duration::from_micros(16_667);
const SHAPE_PERIOD: u64 = 120; // frames per shape
const TRACKING_READY_AT: u64 = 10;
const TRACKING_STOP_AT: u64 = 480;
const DRAG_FRAMES: std::ops::Range<u64> = 60..90;
const DETECTOR_PERIOD: Duration = Duration::from_millis(33);
const DETECTOR_DROP_RATE: f64 = 0.1;
const STATS_EVERY: u64 = 60;

/// Counts uploads and logs a line of frame statistics now and then.
#[derive(Default)]
struct LoggingBackend {
    frames: u64,
    uploads: u64,
}

impl RenderBackend for LoggingBackend {
    type Error = anyhow::Error;

    fn submit(&mut self, frame: &FrameSnapshot<'_>) -> Result<(), Self::Error> {
        self.frames += 1;
        if frame.dirty {
            self.uploads += 1;
        }
        if self.frames % STATS_EVERY == 0 {
            if !frame.positions.all_finite() {
                anyhow::bail!("non-finite particle position at frame {}", self.frames);
            }
            let c = frame.positions.centroid();
            log::info!(
                "[frame {:>4}] size={:.4} rot=({:+.3},{:+.3}) scale={:.3} extent={:.2} centroid=({:+.2},{:+.2},{:+.2})",
                self.frames,
                frame.point_size,
                frame.rotation.x,
                frame.rotation.y,
                frame.scale,
                frame.positions.max_abs_coordinate(),
                c.x,
                c.y,
                c.z
            );
        }
        Ok(())
    }
}

/// A plausible hand: landmarks fanned around a drifting centre, thumb and
/// index tips opening and closing.
fn synthetic_hand(t: f32, rng: &mut StdRng) -> HandLandmarks {
    let centre = Vec3::new(
        0.5 + 0.2 * (0.5 * t).sin(),
        0.5 + 0.1 * (0.3 * t).cos(),
        0.0,
    );
    let pinch = 0.18 + 0.12 * (1.3 * t).sin();
    let mut points = [centre; HAND_LANDMARK_COUNT];
    for (i, p) in points.iter_mut().enumerate() {
        let a = i as f32 / HAND_LANDMARK_COUNT as f32 * TAU;
        let r = 0.04 + rng.gen::<f32>() * 0.01;
        *p += Vec3::new(a.cos() * r, a.sin() * r, rng.gen::<f32>() * 0.02 - 0.01);
    }
    points[THUMB_TIP] = centre - Vec3::X * (pinch * 0.5);
    points[INDEX_TIP] = centre + Vec3::X * (pinch * 0.5);
    HandLandmarks::new(points)
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let started = Instant::now();
    let mut session = Session::build(SessionConfig::default());
    log::info!(
        "session ready with {} particles in {:.1} ms",
        session.morph().registry().particle_count(),
        started.elapsed().as_secs_f64() * 1000.0
    );

    // Detector thread posts until its run is stopped
    let sender = session.start_gesture_tracking();
    let run = sender.clone();
    let detector = thread::Builder::new()
        .name("hand-detector".into())
        .spawn(move || {
            let mut rng = StdRng::seed_from_u64(7);
            let t0 = Instant::now();
            let mut posted = 0u64;
            loop {
                let hand = if rng.gen_bool(DETECTOR_DROP_RATE) {
                    None
                } else {
                    Some(synthetic_hand(t0.elapsed().as_secs_f32(), &mut rng))
                };
                if !sender.post(hand) {
                    break;
                }
                posted += 1;
                thread::sleep(DETECTOR_PERIOD);
            }
            posted
        })?;

    let mut backend = LoggingBackend::default();
    let mut clock = FrameClock::new();
    let mut drag_x = 0.0f32;

    for frame in 0..FRAMES {
        let frame_start = Instant::now();

        if frame % SHAPE_PERIOD == 0 {
            let kind = ShapeKind::ALL[(frame / SHAPE_PERIOD) as usize % ShapeKind::ALL.len()];
            session.set_target(kind.name());
            log::info!("[frame {:>4}] target -> {}", frame, kind);
        }
        if frame == TRACKING_READY_AT {
            session.gesture_tracking_started(&run);
        }
        if frame == TRACKING_STOP_AT {
            session.stop_gesture_tracking();
        }
        if frame == DRAG_FRAMES.start {
            session.pointer_down(drag_x, 0.0);
        } else if DRAG_FRAMES.contains(&frame) {
            drag_x += 4.0;
            session.pointer_move(drag_x, 1.0);
        } else if frame == DRAG_FRAMES.end {
            session.pointer_up();
        }

        session.tick(clock.tick(), &mut backend);

        if let Some(rest) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }

    let posted = detector
        .join()
        .map_err(|_| anyhow::anyhow!("detector thread panicked"))?;

    log::info!(
        "done: {} frames ({} uploads) in {:.2} s, {} detections posted, {} applied, final scale {:.3}",
        session.frames(),
        backend.uploads,
        clock.elapsed().as_secs_f32(),
        posted,
        session.hand().detections(),
        session.scale()
    );
    Ok(())
}
