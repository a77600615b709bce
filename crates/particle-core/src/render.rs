//! Boundary to whatever draws the particles.

use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::point_set::PointSet;

/// Everything a backend needs to draw one frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameSnapshot<'a> {
    pub positions: &'a PointSet,
    /// Positions changed since the previously submitted frame.
    pub dirty: bool,
    pub point_size: f32,
    pub tint: Vec3,
    /// Euler angles (x = pitch, y = yaw, z unused).
    pub rotation: Vec3,
    pub scale: f32,
}

impl FrameSnapshot<'_> {
    /// Parent transform: uniform scale, then rotation in XYZ order.
    pub fn model_matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), rotation, Vec3::ZERO)
    }
}

pub trait RenderBackend {
    type Error: std::fmt::Debug;

    fn submit(&mut self, frame: &FrameSnapshot<'_>) -> Result<(), Self::Error>;
}

/// Backend that draws nothing. Useful for benchmarks and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullBackend;

impl RenderBackend for NullBackend {
    type Error = std::convert::Infallible;

    fn submit(&mut self, _frame: &FrameSnapshot<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}
