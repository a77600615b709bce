//! Target shape catalogue and point-set generation.
//!
//! Contains the closed set of shape kinds, a dispatcher that maps each kind to
//! its sampler, and `generate`, which fills a whole `PointSet`.

pub mod samplers;

use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use rand::Rng;

use crate::error::Error;
use crate::point_set::PointSet;
use samplers::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Heart,
    Flower,
    Saturn,
    Buddha,
    Firework,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Heart,
        ShapeKind::Flower,
        ShapeKind::Saturn,
        ShapeKind::Buddha,
        ShapeKind::Firework,
    ];

    /// Shape used when a name is not recognised.
    pub const FALLBACK: ShapeKind = ShapeKind::Firework;

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Heart => "heart",
            ShapeKind::Flower => "flower",
            ShapeKind::Saturn => "saturn",
            ShapeKind::Buddha => "buddha",
            ShapeKind::Firework => "firework",
        }
    }

    pub fn from_name_or_default(name: &str) -> ShapeKind {
        name.parse().unwrap_or(Self::FALLBACK)
    }

    /// Draw one point of this shape.
    #[inline]
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> Vec3 {
        match self {
            ShapeKind::Heart => sample_heart(rng),
            ShapeKind::Flower => sample_flower(rng),
            ShapeKind::Saturn => sample_saturn(rng),
            ShapeKind::Buddha => sample_buddha(rng),
            ShapeKind::Firework => sample_firework(rng),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ShapeKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownShape(s.to_string()))
    }
}

/// Generate `count` independent samples of `kind`.
///
/// Repeated calls give different but statistically similar sets.
pub fn generate<R: Rng + ?Sized>(kind: ShapeKind, count: usize, rng: &mut R) -> PointSet {
    let mut set = PointSet::zeroed(count);
    for i in 0..count {
        set.set_point(i, kind.sample(rng));
    }
    set
}

/// Like [`generate`], resolving `name` first; unknown names produce the fallback shape.
pub fn generate_named<R: Rng + ?Sized>(name: &str, count: usize, rng: &mut R) -> PointSet {
    generate(ShapeKind::from_name_or_default(name), count, rng)
}
