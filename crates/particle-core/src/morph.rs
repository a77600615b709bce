//! Live position buffer easing toward the selected shape.

use std::sync::Arc;

use crate::point_set::PointSet;
use crate::registry::ShapeRegistry;
use crate::shapes::ShapeKind;

/// Current and target positions plus the registry targets are copied from.
///
/// `tick` moves every coordinate a fixed fraction of the way to its target,
/// so the error shrinks geometrically and never reaches exactly zero.
pub struct MorphBuffer {
    registry: Arc<ShapeRegistry>,
    current: PointSet,
    target: PointSet,
    target_kind: ShapeKind,
    dirty: bool,
}

impl MorphBuffer {
    /// Start fully settled on `initial`. Falls back to an all-zero buffer if
    /// the registry has no entry for it.
    pub fn new(registry: Arc<ShapeRegistry>, initial: ShapeKind) -> Self {
        let start = registry
            .get(initial)
            .cloned()
            .unwrap_or_else(|| PointSet::zeroed(registry.particle_count()));
        Self {
            registry,
            current: start.clone(),
            target: start,
            target_kind: initial,
            dirty: true,
        }
    }

    /// Retarget to `kind`. Returns `false` and keeps the previous target when
    /// the registry does not hold that shape.
    pub fn set_target(&mut self, kind: ShapeKind) -> bool {
        match self.registry.get(kind) {
            Some(points) => {
                self.target.copy_from(points);
                self.target_kind = kind;
                self.dirty = true;
                log::debug!("[morph] target -> {}", kind);
                true
            }
            None => false,
        }
    }

    /// Retarget by UI name; unknown names are ignored.
    pub fn set_target_by_name(&mut self, name: &str) -> bool {
        match name.parse::<ShapeKind>() {
            Ok(kind) => self.set_target(kind),
            Err(e) => {
                log::debug!("[morph] ignoring target change: {}", e);
                false
            }
        }
    }

    /// `current += (target - current) * morph_factor` for every coordinate.
    pub fn tick(&mut self, morph_factor: f32) {
        let k = morph_factor.clamp(0.0, 1.0);
        let target = self.target.as_slice();
        for (c, t) in self.current.as_mut_slice().iter_mut().zip(target) {
            *c += (*t - *c) * k;
        }
        self.dirty = true;
    }

    #[inline]
    pub fn current(&self) -> &PointSet {
        &self.current
    }

    #[inline]
    pub fn target(&self) -> &PointSet {
        &self.target
    }

    #[inline]
    pub fn target_kind(&self) -> ShapeKind {
        self.target_kind
    }

    #[inline]
    pub fn registry(&self) -> &Arc<ShapeRegistry> {
        &self.registry
    }

    /// Whether positions changed since the last call; clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}
