use std::sync::Arc;

use particle_core::{MorphBuffer, ShapeKind, ShapeRegistry};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn registry(n: usize) -> Arc<ShapeRegistry> {
    Arc::new(ShapeRegistry::initialize(n, &mut StdRng::seed_from_u64(42)))
}

fn max_error(buf: &MorphBuffer) -> f32 {
    buf.current()
        .as_slice()
        .iter()
        .zip(buf.target().as_slice())
        .map(|(c, t)| (t - c).abs())
        .fold(0.0, f32::max)
}

#[test]
fn starts_settled_on_the_initial_shape() {
    let reg = registry(64);
    let buf = MorphBuffer::new(reg.clone(), ShapeKind::Buddha);
    assert_eq!(buf.target_kind(), ShapeKind::Buddha);
    assert_eq!(buf.current(), reg.get(ShapeKind::Buddha).expect("buddha"));
    assert_eq!(max_error(&buf), 0.0);
}

#[test]
fn error_decays_geometrically() {
    let reg = registry(64);
    let mut buf = MorphBuffer::new(reg, ShapeKind::Heart);
    assert!(buf.set_target(ShapeKind::Flower));

    let initial: Vec<f32> = buf
        .current()
        .as_slice()
        .iter()
        .zip(buf.target().as_slice())
        .map(|(c, t)| t - c)
        .collect();

    for k in 1..=30 {
        buf.tick(0.1);
        let expected_ratio = 0.9f32.powi(k);
        for (i, (c, t)) in buf
            .current()
            .as_slice()
            .iter()
            .zip(buf.target().as_slice())
            .enumerate()
        {
            let expected = initial[i] * expected_ratio;
            let got = t - c;
            assert!(
                (got - expected).abs() <= 1e-4 + expected.abs() * 1e-3,
                "tick {k} coord {i}: {got} vs {expected}"
            );
        }
    }
}

#[test]
fn error_strictly_decreases_and_gets_arbitrarily_small() {
    let reg = registry(64);
    let mut buf = MorphBuffer::new(reg, ShapeKind::Saturn);
    buf.set_target(ShapeKind::Firework);

    let mut previous = max_error(&buf);
    assert!(previous > 0.0);
    for _ in 0..60 {
        buf.tick(0.1);
        let now = max_error(&buf);
        assert!(now < previous, "{now} !< {previous}");
        previous = now;
    }
    assert!(previous < 0.01, "still {previous} away");
}

#[test]
fn unknown_name_keeps_the_previous_target() {
    let reg = registry(32);
    let mut buf = MorphBuffer::new(reg, ShapeKind::Heart);
    assert!(buf.set_target_by_name("flower"));
    let before = buf.target().clone();
    assert!(!buf.set_target_by_name("teapot"));
    assert_eq!(buf.target_kind(), ShapeKind::Flower);
    assert_eq!(buf.target(), &before);
}

#[test]
fn retargeting_does_not_touch_current_positions() {
    let reg = registry(32);
    let mut buf = MorphBuffer::new(reg, ShapeKind::Heart);
    let before = buf.current().clone();
    buf.set_target(ShapeKind::Buddha);
    assert_eq!(buf.current(), &before);
}

#[test]
fn dirty_flag_is_raised_by_tick_and_cleared_by_take() {
    let reg = registry(16);
    let mut buf = MorphBuffer::new(reg, ShapeKind::Heart);
    assert!(buf.take_dirty());
    assert!(!buf.take_dirty());
    buf.tick(0.1);
    assert!(buf.take_dirty());
    buf.set_target(ShapeKind::Saturn);
    assert!(buf.take_dirty());
}

#[test]
fn morph_factor_is_clamped() {
    let reg = registry(16);
    let mut buf = MorphBuffer::new(reg, ShapeKind::Heart);
    buf.set_target(ShapeKind::Flower);
    buf.tick(5.0);
    assert!(max_error(&buf) < 1e-6);

    buf.set_target(ShapeKind::Saturn);
    let before = buf.current().clone();
    buf.tick(-1.0);
    assert_eq!(buf.current(), &before);
}
