//! One pre-generated point set per shape kind.
//!
//! Built once before the frame loop starts; read-only afterwards, so it is
//! normally shared behind an `Arc`.

use fnv::FnvHashMap;
use instant::Instant;
use rand::Rng;

use crate::point_set::PointSet;
use crate::shapes::{generate, ShapeKind};

#[derive(Debug)]
pub struct ShapeRegistry {
    shapes: FnvHashMap<ShapeKind, PointSet>,
    particle_count: usize,
}

impl ShapeRegistry {
    pub fn initialize<R: Rng + ?Sized>(particle_count: usize, rng: &mut R) -> Self {
        let started = Instant::now();
        let mut shapes = FnvHashMap::default();
        for kind in ShapeKind::ALL {
            shapes.insert(kind, generate(kind, particle_count, rng));
        }
        log::info!(
            "[registry] generated {} shapes x {} particles in {:.1} ms",
            shapes.len(),
            particle_count,
            started.elapsed().as_secs_f64() * 1000.0
        );
        Self {
            shapes,
            particle_count,
        }
    }

    #[inline]
    pub fn get(&self, kind: ShapeKind) -> Option<&PointSet> {
        self.shapes.get(&kind)
    }

    /// Resolve a UI-facing name. Unknown names yield `None`.
    pub fn get_by_name(&self, name: &str) -> Option<&PointSet> {
        name.parse::<ShapeKind>().ok().and_then(|k| self.get(k))
    }

    #[inline]
    pub fn particle_count(&self) -> usize {
        self.particle_count
    }

    pub fn kinds(&self) -> impl Iterator<Item = ShapeKind> + '_ {
        ShapeKind::ALL.into_iter().filter(|k| self.shapes.contains_key(k))
    }
}
