use glam::Vec3;
use particle_core::input::hand::{INDEX_TIP, THUMB_TIP};
use particle_core::input::{desired_scale, HAND_LANDMARK_COUNT};
use particle_core::{Error, HandAggregator, HandLandmarks, HandParams, PointerAggregator};

/// Hand whose centroid sits at `(cx, cy)` with thumb and index tips `pinch` apart.
fn hand_at(cx: f32, cy: f32, pinch: f32) -> HandLandmarks {
    let mut points = [Vec3::new(cx, cy, 0.0); HAND_LANDMARK_COUNT];
    points[THUMB_TIP] = Vec3::new(cx - pinch * 0.5, cy, 0.0);
    points[INDEX_TIP] = Vec3::new(cx + pinch * 0.5, cy, 0.0);
    HandLandmarks::new(points)
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

// ---------------------------------------------------------------- pointer

#[test]
fn drag_accumulates_yaw_and_pitch() {
    let mut p = PointerAggregator::default();
    p.pointer_down(10.0, 10.0);
    p.pointer_move(110.0, 10.0);
    p.pointer_move(110.0, 50.0);
    let acc = p.accumulated();
    assert!(approx(acc.y, 0.5), "yaw {}", acc.y);
    assert!(approx(acc.x, 0.2), "pitch {}", acc.x);
}

#[test]
fn moves_without_a_drag_are_ignored() {
    let mut p = PointerAggregator::default();
    p.pointer_move(500.0, 500.0);
    assert_eq!(p.accumulated(), glam::Vec2::ZERO);

    p.pointer_down(0.0, 0.0);
    p.pointer_up();
    p.pointer_move(200.0, 0.0);
    assert_eq!(p.accumulated(), glam::Vec2::ZERO);
    assert!(!p.is_dragging());
}

#[test]
fn released_drag_decays_geometrically() {
    let mut p = PointerAggregator::default();
    p.pointer_down(0.0, 0.0);
    p.pointer_move(200.0, 0.0); // yaw = 1.0
    p.pointer_up();
    assert!(approx(p.accumulated().y, 1.0));

    for n in 1..=20 {
        p.decay();
        let expected = 0.85f32.powi(n);
        assert!((p.accumulated().y - expected).abs() < 1e-5);
    }
}

#[test]
fn decayed_rotation_becomes_negligible_in_about_eighty_five_ticks() {
    let mut p = PointerAggregator::default();
    p.pointer_down(0.0, 0.0);
    p.pointer_move(200.0, 0.0);
    p.pointer_up();

    let mut ticks = 0;
    while p.accumulated().y.abs() >= 1e-6 {
        p.decay();
        ticks += 1;
        assert!(ticks < 200, "never settled");
    }
    assert!((80..=90).contains(&ticks), "settled after {ticks}");
}

// ---------------------------------------------------------------- hand

#[test]
fn pinch_distance_and_centroid() {
    let hand = hand_at(0.3, 0.6, 0.1);
    assert!(approx(hand.pinch_distance(), 0.1));
    let c = hand.centroid_xy();
    assert!(approx(c.x, 0.3) && approx(c.y, 0.6), "{c:?}");
}

#[test]
fn desired_scale_maps_pinch_and_clamps() {
    let params = HandParams::default();
    assert!(approx(desired_scale(0.18, &params), 1.0));
    assert!(approx(desired_scale(0.0, &params), 2.08));
    assert!(approx(desired_scale(1.0, &params), 0.5));

    let steep = HandParams {
        pinch_gain: 20.0,
        ..HandParams::default()
    };
    assert!(approx(desired_scale(0.0, &steep), 2.5));
}

#[test]
fn scale_is_smoothed_toward_the_pinch() {
    let mut agg = HandAggregator::default();
    assert_eq!(agg.scale(), 1.0);
    agg.apply(Some(&hand_at(0.5, 0.5, 0.0)));
    assert!(approx(agg.scale(), 0.9 + 2.08 * 0.1), "{}", agg.scale());

    for _ in 0..200 {
        agg.apply(Some(&hand_at(0.5, 0.5, 0.0)));
    }
    assert!(approx(agg.scale(), 2.08));
}

#[test]
fn centroid_offset_drives_rotation_with_inverted_yaw() {
    let mut agg = HandAggregator::default();
    agg.apply(Some(&hand_at(0.7, 0.4, 0.1)));
    let off = agg.rotation_offset();
    assert!(approx(off.y, -0.2 * 2.8), "yaw {}", off.y);
    assert!(approx(off.x, -0.1 * 2.8), "pitch {}", off.x);

    agg.apply(Some(&hand_at(0.5, 0.5, 0.1)));
    assert!(approx(agg.rotation_offset().length(), 0.0));
}

#[test]
fn missing_hand_keeps_previous_state() {
    let mut agg = HandAggregator::default();
    agg.apply(Some(&hand_at(0.2, 0.8, 0.05)));
    let (scale, offset) = (agg.scale(), agg.rotation_offset());
    agg.apply(None);
    agg.apply(None);
    assert_eq!(agg.scale(), scale);
    assert_eq!(agg.rotation_offset(), offset);
    assert_eq!(agg.detections(), 1);
}

#[test]
fn non_finite_hand_is_ignored_and_scale_stays_in_range() {
    let mut agg = HandAggregator::default();
    agg.apply(Some(&hand_at(0.5, 0.5, 0.0)));
    let (scale, offset) = (agg.scale(), agg.rotation_offset());

    let mut points = [Vec3::splat(0.5); HAND_LANDMARK_COUNT];
    points[THUMB_TIP] = Vec3::new(f32::NAN, 0.5, 0.0);
    let broken = HandLandmarks::new(points);
    assert!(!broken.is_finite());

    agg.apply(Some(&broken));
    assert_eq!(agg.scale(), scale);
    assert_eq!(agg.rotation_offset(), offset);
    assert_eq!(agg.detections(), 1);

    let params = HandParams::default();
    for d in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
        let s = desired_scale(d, &params);
        assert!((params.scale_min..=params.scale_max).contains(&s), "{d} -> {s}");
    }
}

#[test]
fn flat_payload_parsing() {
    let mut flat = vec![0.5f32; HAND_LANDMARK_COUNT * 3];
    let hand = HandLandmarks::from_flat(&flat).expect("valid payload");
    assert_eq!(hand.points().len(), HAND_LANDMARK_COUNT);
    assert_eq!(hand.get(20), Some(Vec3::splat(0.5)));
    assert_eq!(hand.get(21), None);

    assert_eq!(
        HandLandmarks::from_flat(&flat[..62]),
        Err(Error::LandmarkCount {
            expected: 63,
            got: 62
        })
    );

    flat[5 * 3 + 1] = f32::NAN;
    assert_eq!(
        HandLandmarks::from_flat(&flat),
        Err(Error::NonFiniteLandmark { index: 5 })
    );
}
