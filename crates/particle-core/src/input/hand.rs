//! Hand landmarks and the gesture signals derived from them.
//!
//! The detector reports 21 normalized points per hand (x, y roughly in
//! `[0, 1]` image space, z relative depth). Two signals are extracted:
//! - pinch distance (thumb tip to index tip) drives a smoothed uniform scale
//! - the landmark centroid, offset from the frame centre, drives rotation

use glam::{Vec2, Vec3};
use smallvec::SmallVec;

use crate::config::HandParams;
use crate::error::{Error, Result};

// ============================================================================
// HAND LANDMARK INDICES
// ============================================================================

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

pub const HAND_LANDMARK_COUNT: usize = 21;

// ============================================================================
// LANDMARK SET
// ============================================================================

/// One detected hand: exactly [`HAND_LANDMARK_COUNT`] points.
#[derive(Clone, Debug, PartialEq)]
pub struct HandLandmarks {
    points: SmallVec<[Vec3; HAND_LANDMARK_COUNT]>,
}

impl HandLandmarks {
    pub fn new(points: [Vec3; HAND_LANDMARK_COUNT]) -> Self {
        Self {
            points: SmallVec::from_buf(points),
        }
    }

    /// Parse a flat `x, y, z` payload of 63 floats (as sent from JavaScript).
    pub fn from_flat(data: &[f32]) -> Result<Self> {
        let expected = HAND_LANDMARK_COUNT * 3;
        if data.len() != expected {
            return Err(Error::LandmarkCount {
                expected,
                got: data.len(),
            });
        }
        let mut points = SmallVec::new();
        for (index, c) in data.chunks_exact(3).enumerate() {
            let p = Vec3::new(c[0], c[1], c[2]);
            if !p.is_finite() {
                return Err(Error::NonFiniteLandmark { index });
            }
            points.push(p);
        }
        Ok(Self { points })
    }

    /// All coordinates are finite. Always true for hands parsed with
    /// [`from_flat`](Self::from_flat).
    pub fn is_finite(&self) -> bool {
        self.points.iter().all(|p| p.is_finite())
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Vec3> {
        self.points.get(index).copied()
    }

    #[inline]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// 3-D distance between thumb tip and index fingertip.
    pub fn pinch_distance(&self) -> f32 {
        self.points[THUMB_TIP].distance(self.points[INDEX_TIP])
    }

    /// Mean image-space position of all landmarks.
    pub fn centroid_xy(&self) -> Vec2 {
        let sum = self
            .points
            .iter()
            .fold(Vec2::ZERO, |acc, p| acc + p.truncate());
        sum / self.points.len() as f32
    }
}

/// Scale requested by a pinch: closer fingers mean a larger model.
///
/// A non-finite distance requests the neutral scale (clamped into range).
#[inline]
pub fn desired_scale(pinch_distance: f32, params: &HandParams) -> f32 {
    let raw = (params.pinch_reference - pinch_distance) * params.pinch_gain + 1.0;
    let raw = if raw.is_finite() { raw } else { 1.0 };
    raw.clamp(params.scale_min, params.scale_max)
}

// ============================================================================
// AGGREGATOR
// ============================================================================

/// Persistent gesture signals, updated once per detection.
#[derive(Clone, Debug)]
pub struct HandAggregator {
    params: HandParams,
    scale: f32,
    rotation_offset: Vec2, // x = pitch, y = yaw
    detections: u64,
}

impl HandAggregator {
    pub fn new(params: HandParams) -> Self {
        Self {
            params,
            scale: 1.0,
            rotation_offset: Vec2::ZERO,
            detections: 0,
        }
    }

    /// Fold one detector result in. `None` (no hand this frame) keeps every
    /// signal as it was so the model does not snap back when tracking drops.
    pub fn apply(&mut self, hand: Option<&HandLandmarks>) {
        let Some(hand) = hand else {
            return;
        };
        if !hand.is_finite() {
            log::warn!("[hand] ignoring detection with non-finite landmarks");
            return;
        }

        let wanted = desired_scale(hand.pinch_distance(), &self.params);
        let keep = self.params.scale_smoothing;
        self.scale = self.scale * keep + wanted * (1.0 - keep);

        let centered = hand.centroid_xy() - Vec2::splat(0.5);
        let k = self.params.rotation_sensitivity;
        // x is inverted so a sideways hand yaws the same way as a sideways drag
        self.rotation_offset = Vec2::new(centered.y * k, -centered.x * k);
        self.detections += 1;
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[inline]
    pub fn rotation_offset(&self) -> Vec2 {
        self.rotation_offset
    }

    /// Number of detections folded in so far.
    #[inline]
    pub fn detections(&self) -> u64 {
        self.detections
    }

    #[inline]
    pub fn params(&self) -> &HandParams {
        &self.params
    }
}

impl Default for HandAggregator {
    fn default() -> Self {
        Self::new(HandParams::default())
    }
}
