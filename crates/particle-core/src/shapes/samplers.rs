//! Per-particle samplers for each target shape.
//!
//! Every sampler draws one point independently from `rng` using direct or
//! inverse-transform sampling; there are no rejection loops, so generating
//! `N` points costs exactly `N` sampler calls.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

/// Uniform value in `[-span / 2, span / 2)`.
#[inline]
fn centered<R: Rng + ?Sized>(rng: &mut R, span: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * span
}

#[inline]
fn angle<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen::<f32>() * TAU
}

// ---------- heart ----------

const HEART_SCALE: f32 = 0.9 * 0.06;

/// Classic heart curve `x = 16 sin³θ`, `y = 13 cosθ − 5 cos2θ − 2 cos3θ − cos4θ`,
/// normalised to roughly unit size with a thin radial band and shallow depth.
pub fn sample_heart<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let theta = angle(rng);
    let band = 0.8 + rng.gen::<f32>() * 0.1;

    let (sin_t, cos_t) = theta.sin_cos();
    let x = 16.0 * sin_t.powi(3);
    let y = 13.0 * cos_t - 5.0 * (2.0 * theta).cos() - 2.0 * (3.0 * theta).cos() - (4.0 * theta).cos();
    let z = centered(rng, 0.6);

    Vec3::new(x * HEART_SCALE * band, y * HEART_SCALE * band, z)
}

// ---------- flower ----------

const FLOWER_PETALS: f32 = 6.0;

/// Six-petal polar rose `r = 1.2 cos(6θ) + 1.4`, filled slightly outward.
pub fn sample_flower<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let theta = angle(rng);
    let r = 1.2 * (FLOWER_PETALS * theta).cos() + 1.4;
    let distance = r * 0.4 + rng.gen::<f32>() * 0.15;
    let z = centered(rng, 0.7);
    Vec3::new(theta.cos() * distance, theta.sin() * distance, z)
}

// ---------- saturn ----------

const SATURN_SPHERE_SHARE: f32 = 0.45;
const SATURN_SPHERE_RADIUS: f32 = 0.7;
const SATURN_RING_RADIUS: f32 = 1.3;
const SATURN_RING_THICKNESS: f32 = 0.15;

/// Planet body plus ring: a spherical shell (uniform over solid angle) or a
/// wobbling ring in the XZ plane.
pub fn sample_saturn<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    if rng.gen::<f32>() < SATURN_SPHERE_SHARE {
        let theta = angle(rng);
        let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
        let radial = SATURN_SPHERE_RADIUS + centered(rng, 0.1);
        Vec3::new(
            radial * phi.sin() * theta.cos(),
            radial * phi.cos(),
            radial * phi.sin() * theta.sin(),
        )
    } else {
        let a = angle(rng);
        let offset = centered(rng, SATURN_RING_THICKNESS);
        let ring = SATURN_RING_RADIUS + offset * (2.0 * a).cos();
        Vec3::new(ring * a.cos(), offset * 2.0, ring * a.sin())
    }
}

// ---------- buddha ----------

/// One horizontal elliptical band of the seated silhouette.
struct Band {
    radius: f32,
    radius_jitter: f32,
    x_scale: f32,
    z_scale: f32,
    y: f32,
    y_jitter: f32,
}

const BUDDHA_BASE: Band = Band {
    radius: 1.2,
    radius_jitter: 0.1,
    x_scale: 0.6,
    z_scale: 0.7,
    y: -0.6,
    y_jitter: 0.2,
};

const BUDDHA_TORSO: Band = Band {
    radius: 0.8,
    radius_jitter: 0.1,
    x_scale: 0.45,
    z_scale: 0.5,
    y: -0.1,
    y_jitter: 0.35,
};

const BUDDHA_HEAD: Band = Band {
    radius: 0.35,
    radius_jitter: 0.05,
    x_scale: 0.8,
    z_scale: 0.8,
    y: 0.7,
    y_jitter: 0.15,
};

// cumulative probabilities: base 0.4, torso 0.4, head 0.2
const BUDDHA_BASE_CUTOFF: f32 = 0.4;
const BUDDHA_TORSO_CUTOFF: f32 = 0.8;

/// Crossed legs, torso and head stacked as three elliptical bands.
pub fn sample_buddha<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let pick = rng.gen::<f32>();
    let band = if pick < BUDDHA_BASE_CUTOFF {
        &BUDDHA_BASE
    } else if pick < BUDDHA_TORSO_CUTOFF {
        &BUDDHA_TORSO
    } else {
        &BUDDHA_HEAD
    };

    let a = angle(rng);
    let r = band.radius + rng.gen::<f32>() * band.radius_jitter;
    Vec3::new(
        a.cos() * r * band.x_scale,
        band.y + centered(rng, band.y_jitter),
        a.sin() * r * band.z_scale,
    )
}

// ---------- firework ----------

pub const FIREWORK_RAYS: u32 = 18;
const FIREWORK_ELEVATION_SPREAD: f32 = 0.8;
const FIREWORK_MIN_LENGTH: f32 = 0.2;
const FIREWORK_LENGTH_SPAN: f32 = 2.4;
const FIREWORK_LENGTH_EXPONENT: f32 = 0.4;
const FIREWORK_JITTER: f32 = 0.08;

/// Radial burst along one of 18 evenly spaced horizontal rays.
///
/// Ray lengths are skewed long (`u^0.4`), and lateral jitter grows with the
/// distance from the centre so the tips fan out.
pub fn sample_firework<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let ray = ((rng.gen::<f32>() * FIREWORK_RAYS as f32) as u32).min(FIREWORK_RAYS - 1);
    let ray_angle = ray as f32 / FIREWORK_RAYS as f32 * TAU;
    let elevation = centered(rng, FIREWORK_ELEVATION_SPREAD);
    let length = FIREWORK_MIN_LENGTH
        + rng.gen::<f32>().powf(FIREWORK_LENGTH_EXPONENT) * FIREWORK_LENGTH_SPAN;

    let direction = Vec3::new(ray_angle.cos(), elevation, ray_angle.sin()).normalize();
    let distance = rng.gen::<f32>() * length;

    let jitter = Vec3::new(
        centered(rng, FIREWORK_JITTER),
        centered(rng, FIREWORK_JITTER),
        centered(rng, FIREWORK_JITTER),
    );
    direction * distance + jitter * distance
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn firework_points_lie_near_a_ray() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2_000 {
            let p = sample_firework(&mut rng);
            let horizontal = Vec3::new(p.x, 0.0, p.z);
            if horizontal.length() < 0.2 {
                continue;
            }
            let heading = p.z.atan2(p.x).rem_euclid(TAU);
            let step = TAU / FIREWORK_RAYS as f32;
            let nearest = (heading / step).round() * step;
            let off = (heading - nearest).abs();
            // lateral jitter is at most 4% of the distance
            assert!(off < 0.1, "point {p:?} is {off} rad away from the nearest ray");
        }
    }

    #[test]
    fn buddha_bands_stack_vertically() {
        let mut rng = StdRng::seed_from_u64(11);
        let (mut low, mut high) = (f32::MAX, f32::MIN);
        for _ in 0..5_000 {
            let p = sample_buddha(&mut rng);
            low = low.min(p.y);
            high = high.max(p.y);
        }
        assert!(low >= -0.7 - 1e-6 && low < -0.6);
        assert!(high <= 0.775 + 1e-6 && high > 0.7);
    }
}
