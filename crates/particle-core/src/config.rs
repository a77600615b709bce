use glam::Vec3;

use crate::constants::*;
use crate::shapes::ShapeKind;

/// Pointer drag tuning.
#[derive(Clone, Debug)]
pub struct PointerParams {
    pub sensitivity: f32,
    pub decay: f32,
}

impl Default for PointerParams {
    fn default() -> Self {
        Self {
            sensitivity: POINTER_SENSITIVITY,
            decay: POINTER_DECAY,
        }
    }
}

/// Hand gesture tuning.
///
/// - `pinch_reference`: pinch distance (normalized units) that maps to scale 1.0
/// - `pinch_gain`: scale change per unit of pinch distance below the reference
/// - `scale_min` / `scale_max`: hard bounds on the desired scale
/// - `scale_smoothing`: weight kept from the previous scale on each detection
/// - `rotation_sensitivity`: radians per unit of centroid offset from frame centre
/// - `rotation_blend`: share of the hand offset mixed into the root rotation per frame
#[derive(Clone, Debug)]
pub struct HandParams {
    pub pinch_reference: f32,
    pub pinch_gain: f32,
    pub scale_min: f32,
    pub scale_max: f32,
    pub scale_smoothing: f32,
    pub rotation_sensitivity: f32,
    pub rotation_blend: f32,
}

impl Default for HandParams {
    fn default() -> Self {
        Self {
            pinch_reference: PINCH_REFERENCE,
            pinch_gain: PINCH_GAIN,
            scale_min: HAND_SCALE_MIN,
            scale_max: HAND_SCALE_MAX,
            scale_smoothing: HAND_SCALE_SMOOTHING,
            rotation_sensitivity: HAND_ROTATION_SENSITIVITY,
            rotation_blend: HAND_ROTATION_BLEND,
        }
    }
}

/// Point-size shimmer: `base + sin(t * frequency) * amplitude + U(0, jitter)`,
/// mapped to `size_base + flicker * size_gain`.
#[derive(Clone, Debug)]
pub struct FlickerParams {
    pub base: f32,
    pub wave_amplitude: f32,
    pub wave_frequency: f32,
    pub jitter: f32,
    pub size_base: f32,
    pub size_gain: f32,
}

impl Default for FlickerParams {
    fn default() -> Self {
        Self {
            base: FLICKER_BASE,
            wave_amplitude: FLICKER_WAVE_AMPLITUDE,
            wave_frequency: FLICKER_WAVE_FREQUENCY,
            jitter: FLICKER_JITTER,
            size_base: POINT_SIZE_BASE,
            size_gain: POINT_SIZE_FLICKER_GAIN,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub particle_count: usize,
    pub morph_factor: f32,
    pub initial_shape: ShapeKind,
    pub base_rotation_speed: f32,
    pub tint: Vec3,
    pub pointer: PointerParams,
    pub hand: HandParams,
    pub flicker: FlickerParams,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            morph_factor: MORPH_FACTOR,
            initial_shape: ShapeKind::Heart,
            base_rotation_speed: BASE_ROTATION_SPEED,
            tint: default_tint_vec3(),
            pointer: PointerParams::default(),
            hand: HandParams::default(),
            flicker: FlickerParams::default(),
        }
    }
}

impl SessionConfig {
    /// Default tuning with a different particle budget.
    pub fn with_particle_count(particle_count: usize) -> Self {
        Self {
            particle_count,
            ..Self::default()
        }
    }
}
