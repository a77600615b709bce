use glam::Vec2;

use crate::config::PointerParams;

/// Drag-to-rotate accumulator.
///
/// Moves while dragging add `delta * sensitivity` to the accumulated rotation
/// (horizontal motion feeds yaw, vertical feeds pitch). The frame loop adds the
/// accumulated value into the root rotation and then calls [`decay`], so a
/// released drag coasts to rest instead of stopping dead.
///
/// [`decay`]: PointerAggregator::decay
#[derive(Clone, Debug)]
pub struct PointerAggregator {
    params: PointerParams,
    dragging: bool,
    last: Vec2,
    rotation: Vec2, // x = pitch, y = yaw
}

impl PointerAggregator {
    pub fn new(params: PointerParams) -> Self {
        Self {
            params,
            dragging: false,
            last: Vec2::ZERO,
            rotation: Vec2::ZERO,
        }
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.dragging = true;
        self.last = Vec2::new(x, y);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if !self.dragging {
            return;
        }
        let pos = Vec2::new(x, y);
        let delta = pos - self.last;
        self.last = pos;
        self.rotation.y += delta.x * self.params.sensitivity;
        self.rotation.x += delta.y * self.params.sensitivity;
    }

    /// End of drag; also used for pointer cancel.
    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    #[inline]
    pub fn accumulated(&self) -> Vec2 {
        self.rotation
    }

    pub fn decay(&mut self) {
        self.rotation *= self.params.decay;
    }
}

impl Default for PointerAggregator {
    fn default() -> Self {
        Self::new(PointerParams::default())
    }
}
