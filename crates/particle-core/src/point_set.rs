//! Flat `x, y, z` position buffers.
//!
//! A `PointSet` stores `N` particles as `3N` contiguous `f32` values so it can
//! be handed to a GPU vertex buffer without repacking. The length is fixed at
//! construction and never changes.

use glam::Vec3;

#[derive(Clone, Debug, PartialEq)]
pub struct PointSet {
    coords: Vec<f32>,
}

impl PointSet {
    /// All particles at the origin.
    pub fn zeroed(particle_count: usize) -> Self {
        Self {
            coords: vec![0.0; particle_count * 3],
        }
    }

    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Vec3>,
    {
        let points = points.into_iter();
        let mut coords = Vec::with_capacity(points.size_hint().0 * 3);
        for p in points {
            coords.extend_from_slice(&[p.x, p.y, p.z]);
        }
        Self { coords }
    }

    #[inline]
    pub fn particle_count(&self) -> usize {
        self.coords.len() / 3
    }

    /// Number of scalar coordinates (`3 * particle_count`).
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    #[inline]
    pub fn point(&self, index: usize) -> Vec3 {
        let i = index * 3;
        Vec3::new(self.coords[i], self.coords[i + 1], self.coords[i + 2])
    }

    #[inline]
    pub fn set_point(&mut self, index: usize, p: Vec3) {
        let i = index * 3;
        self.coords[i] = p.x;
        self.coords[i + 1] = p.y;
        self.coords[i + 2] = p.z;
    }

    pub fn points(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.coords
            .chunks_exact(3)
            .map(|c| Vec3::new(c[0], c[1], c[2]))
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.coords
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.coords
    }

    /// Raw bytes for a `Float32x3` vertex buffer upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.coords)
    }

    /// Overwrite every coordinate with `other`'s.
    ///
    /// Both sets must describe the same number of particles.
    pub fn copy_from(&mut self, other: &PointSet) {
        assert_eq!(
            self.coords.len(),
            other.coords.len(),
            "point sets must have the same particle count"
        );
        self.coords.copy_from_slice(&other.coords);
    }

    /// Mean over particles of the squared distance to the matching particle in `other`.
    pub fn mean_squared_distance(&self, other: &PointSet) -> f32 {
        let n = self.particle_count().min(other.particle_count());
        if n == 0 {
            return 0.0;
        }
        let sum: f64 = self
            .points()
            .zip(other.points())
            .map(|(a, b)| a.distance_squared(b) as f64)
            .sum();
        (sum / n as f64) as f32
    }

    /// Largest absolute value over all coordinates.
    pub fn max_abs_coordinate(&self) -> f32 {
        self.coords.iter().fold(0.0_f32, |m, v| m.max(v.abs()))
    }

    pub fn all_finite(&self) -> bool {
        self.coords.iter().all(|v| v.is_finite())
    }

    pub fn centroid(&self) -> Vec3 {
        let n = self.particle_count();
        if n == 0 {
            return Vec3::ZERO;
        }
        self.points().fold(Vec3::ZERO, |acc, p| acc + p) / n as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_interleaved_xyz() {
        let set = PointSet::from_points([Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)]);
        assert_eq!(set.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(set.particle_count(), 2);
        assert_eq!(set.point(1), Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(set.as_bytes().len(), 6 * 4);
    }

    #[test]
    fn mean_squared_distance_of_shifted_set() {
        let a = PointSet::from_points([Vec3::ZERO, Vec3::X]);
        let b = PointSet::from_points([Vec3::Y * 2.0, Vec3::X + Vec3::Y * 2.0]);
        assert!((a.mean_squared_distance(&b) - 4.0).abs() < 1e-6);
        assert_eq!(a.mean_squared_distance(&a), 0.0);
    }

    #[test]
    #[should_panic(expected = "same particle count")]
    fn copy_from_rejects_mismatched_lengths() {
        let mut a = PointSet::zeroed(2);
        a.copy_from(&PointSet::zeroed(3));
    }
}
