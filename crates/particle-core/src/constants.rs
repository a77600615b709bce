use glam::Vec3;

// Shared tuning constants used by both web and native frontends.

// Particle budget
pub const PARTICLE_COUNT: usize = 30_000; // fixed for the session lifetime

// Morphing
pub const MORPH_FACTOR: f32 = 0.1; // fraction of the remaining distance covered per tick

// Auto-rotation
pub const BASE_ROTATION_SPEED: f32 = 0.05; // radians per second around Y

// Pointer drag
pub const POINTER_SENSITIVITY: f32 = 0.005; // radians per CSS pixel
pub const POINTER_DECAY: f32 = 0.85; // per-frame multiplier on accumulated drag rotation

// Hand gesture
pub const PINCH_REFERENCE: f32 = 0.18; // pinch distance that maps to scale 1.0
pub const PINCH_GAIN: f32 = 6.0;
pub const HAND_SCALE_MIN: f32 = 0.5;
pub const HAND_SCALE_MAX: f32 = 2.5;
pub const HAND_SCALE_SMOOTHING: f32 = 0.9; // weight kept from the previous scale
pub const HAND_ROTATION_SENSITIVITY: f32 = 2.8;
pub const HAND_ROTATION_BLEND: f32 = 0.3; // share of the hand offset mixed into the root rotation

// Point size flicker
pub const FLICKER_BASE: f32 = 0.2;
pub const FLICKER_WAVE_AMPLITUDE: f32 = 0.05;
pub const FLICKER_WAVE_FREQUENCY: f32 = 5.0; // radians per second
pub const FLICKER_JITTER: f32 = 0.03;
pub const POINT_SIZE_BASE: f32 = 0.045;
pub const POINT_SIZE_FLICKER_GAIN: f32 = 0.02;

// Camera
pub const CAMERA_Z: f32 = 8.0;
pub const CAMERA_FOV_DEGREES: f32 = 55.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;

// Look
pub const DEFAULT_TINT: [f32; 3] = [1.0, 0.8, 0.533]; // #ffcc88
pub const FOG_COLOR: [f32; 3] = [0.0196, 0.0235, 0.0314]; // #050608
pub const FOG_DENSITY: f32 = 0.08;
pub const SPRITE_SIZE: u32 = 128;

#[inline]
pub fn default_tint_vec3() -> Vec3 {
    Vec3::from(DEFAULT_TINT)
}
