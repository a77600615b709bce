//! Per-frame scheduler tying the morph buffer, both input sources and the
//! render backend together.

use std::sync::Arc;
use std::time::Duration;

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::SessionConfig;
use crate::error::Error;
use crate::input::{DetectionMailbox, DetectionSender, HandAggregator, PointerAggregator};
use crate::morph::MorphBuffer;
use crate::registry::ShapeRegistry;
use crate::render::{FrameSnapshot, RenderBackend};
use crate::shapes::ShapeKind;

/// Where the gesture-control subsystem currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureTracking {
    /// Not requested, or stopped.
    Idle,
    /// Camera/detector are being brought up.
    Acquiring,
    /// Detections flow and drive rotation and scale.
    Running,
    /// Acquisition failed; pointer control only.
    Failed,
}

/// What one tick produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStats {
    pub flicker: f32,
    pub point_size: f32,
    pub rotation: Vec3,
    pub scale: f32,
    /// A fresh detection was folded into the hand aggregator this tick.
    pub hand_updated: bool,
}

pub struct Session {
    config: SessionConfig,
    morph: MorphBuffer,
    pointer: PointerAggregator,
    hand: HandAggregator,
    mailbox: DetectionMailbox,
    gesture: GestureTracking,
    tracking_error: Option<Error>,
    rotation: Vec3, // z stays 0
    scale: f32,
    tint: Vec3,
    elapsed: f32,
    frames: u64,
    rng: StdRng,
}

impl Session {
    /// Session over a prebuilt registry, flicker seeded from entropy.
    pub fn new(config: SessionConfig, registry: Arc<ShapeRegistry>) -> Self {
        Self::with_rng(config, registry, StdRng::from_entropy())
    }

    /// Generate every shape for `config.particle_count` and start on
    /// `config.initial_shape`.
    pub fn build(config: SessionConfig) -> Self {
        let mut rng = StdRng::from_entropy();
        let registry = Arc::new(ShapeRegistry::initialize(config.particle_count, &mut rng));
        Self::with_rng(config, registry, rng)
    }

    pub fn with_rng(config: SessionConfig, registry: Arc<ShapeRegistry>, rng: StdRng) -> Self {
        let morph = MorphBuffer::new(registry, config.initial_shape);
        Self {
            pointer: PointerAggregator::new(config.pointer.clone()),
            hand: HandAggregator::new(config.hand.clone()),
            mailbox: DetectionMailbox::new(),
            gesture: GestureTracking::Idle,
            tracking_error: None,
            rotation: Vec3::ZERO,
            scale: 1.0,
            tint: config.tint,
            elapsed: 0.0,
            frames: 0,
            morph,
            config,
            rng,
        }
    }

    /// Advance one display frame and hand the result to `backend`.
    ///
    /// Backend failures are logged; the session state still advances.
    pub fn tick<B: RenderBackend>(&mut self, dt: Duration, backend: &mut B) -> FrameStats {
        let dt = dt.as_secs_f32();
        self.elapsed += dt;

        let flicker = self.flicker();
        let point_size = self.config.flicker.size_base + flicker * self.config.flicker.size_gain;

        self.morph.tick(self.config.morph_factor);

        let drag = self.pointer.accumulated();
        self.rotation.y += self.config.base_rotation_speed * dt;
        self.rotation.y += drag.y;
        self.rotation.x += drag.x;

        let latest = self.mailbox.take_latest();
        let hand_updated = latest.is_some();
        self.hand.apply(latest.as_ref());

        if self.gesture == GestureTracking::Running {
            // blends an absolute offset into an accumulating angle; kept as-is for feel
            let blend = self.config.hand.rotation_blend;
            let offset = self.hand.rotation_offset();
            self.rotation.x = self.rotation.x * (1.0 - blend) + offset.x * blend;
            self.rotation.y = self.rotation.y * (1.0 - blend) + offset.y * blend;
            self.scale = self.hand.scale();
        }

        let dirty = self.morph.take_dirty();
        let snapshot = FrameSnapshot {
            positions: self.morph.current(),
            dirty,
            point_size,
            tint: self.tint,
            rotation: self.rotation,
            scale: self.scale,
        };
        if let Err(e) = backend.submit(&snapshot) {
            log::error!("[frame] render backend error on frame {}: {:?}", self.frames, e);
        }

        self.pointer.decay();
        self.frames += 1;

        FrameStats {
            flicker,
            point_size,
            rotation: self.rotation,
            scale: self.scale,
            hand_updated,
        }
    }

    fn flicker(&mut self) -> f32 {
        let p = &self.config.flicker;
        let jitter = self.rng.gen::<f32>() * p.jitter;
        p.base + (self.elapsed * p.wave_frequency).sin() * p.wave_amplitude + jitter
    }

    // ------------------------------------------------------------------
    // UI surface
    // ------------------------------------------------------------------

    /// Select a target shape by name. Unknown names leave the target as is.
    pub fn set_target(&mut self, name: &str) -> bool {
        self.morph.set_target_by_name(name)
    }

    pub fn set_target_kind(&mut self, kind: ShapeKind) -> bool {
        self.morph.set_target(kind)
    }

    pub fn set_tint(&mut self, tint: Vec3) {
        self.tint = tint;
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.pointer.pointer_down(x, y);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.pointer.pointer_move(x, y);
    }

    pub fn pointer_up(&mut self) {
        self.pointer.pointer_up();
    }

    // ------------------------------------------------------------------
    // Gesture tracking lifecycle
    // ------------------------------------------------------------------

    /// Open a new tracking run and return the handle the detector posts to.
    pub fn start_gesture_tracking(&mut self) -> DetectionSender {
        let sender = self.mailbox.open();
        self.gesture = GestureTracking::Acquiring;
        self.tracking_error = None;
        log::info!("[gesture] acquiring camera (run {})", sender.generation());
        sender
    }

    /// The detector for `run` is up. Ignored unless that run is the one being
    /// acquired.
    pub fn gesture_tracking_started(&mut self, run: &DetectionSender) -> bool {
        if !run.is_current() {
            log::debug!(
                "[gesture] start notification from stopped run {} ignored",
                run.generation()
            );
            return false;
        }
        if self.gesture != GestureTracking::Acquiring {
            log::debug!("[gesture] late start notification in state {:?}", self.gesture);
            return false;
        }
        self.gesture = GestureTracking::Running;
        log::info!("[gesture] tracking running (run {})", run.generation());
        true
    }

    /// Camera or detector for `run` could not be brought up; pointer control
    /// continues. Failures from a run that was already stopped are ignored.
    pub fn gesture_tracking_failed(
        &mut self,
        run: &DetectionSender,
        reason: impl Into<String>,
    ) -> bool {
        let reason = reason.into();
        if !run.is_current() {
            log::debug!(
                "[gesture] failure from stopped run {} ignored: {}",
                run.generation(),
                reason
            );
            return false;
        }
        let err = Error::TrackingUnavailable(reason);
        log::error!("[gesture] {}", err);
        self.mailbox.close();
        self.gesture = GestureTracking::Failed;
        self.tracking_error = Some(err);
        true
    }

    /// Stop tracking. Detections still in flight are discarded.
    pub fn stop_gesture_tracking(&mut self) {
        self.mailbox.close();
        if self.gesture != GestureTracking::Idle {
            log::info!("[gesture] tracking stopped");
        }
        self.gesture = GestureTracking::Idle;
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[inline]
    pub fn gesture_state(&self) -> GestureTracking {
        self.gesture
    }

    #[inline]
    pub fn gesture_active(&self) -> bool {
        self.gesture == GestureTracking::Running
    }

    pub fn tracking_error(&self) -> Option<&Error> {
        self.tracking_error.as_ref()
    }

    pub fn morph(&self) -> &MorphBuffer {
        &self.morph
    }

    pub fn pointer(&self) -> &PointerAggregator {
        &self.pointer
    }

    pub fn hand(&self) -> &HandAggregator {
        &self.hand
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[inline]
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[inline]
    pub fn tint(&self) -> Vec3 {
        self.tint
    }

    /// Seconds of simulated time accumulated from tick deltas.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
