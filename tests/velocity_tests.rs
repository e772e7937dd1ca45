// Host-side tests for velocity estimation and normalization.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spray_core::*;

#[test]
fn normalized_velocity_stays_in_unit_range() {
    for peak in [PEAK_VELOCITY_SEED, 10.0, 250.0, 4000.0] {
        for step in 0..=4000 {
            let v = step as f32 * 0.5;
            let n = normalized_velocity(v, peak);
            assert!((0.0..=1.0).contains(&n), "v={v} peak={peak} -> {n}");
        }
    }
}

#[test]
fn normalized_velocity_is_monotonic_for_fixed_peak() {
    let peak = 90.0;
    let mut prev = normalized_velocity(0.0, peak);
    for step in 1..=2000 {
        let n = normalized_velocity(step as f32 * 0.25, peak);
        assert!(n >= prev, "vNorm decreased at step {step}");
        prev = n;
    }
}

#[test]
fn normalized_velocity_hits_one_at_reference_speed() {
    assert_eq!(normalized_velocity(0.0, PEAK_VELOCITY_SEED), 0.0);
    let ref_v = reference_velocity(PEAK_VELOCITY_SEED);
    assert!((ref_v - 54.0).abs() < 1e-4);
    assert!((normalized_velocity(ref_v, PEAK_VELOCITY_SEED) - 1.0).abs() < 1e-5);
    assert_eq!(normalized_velocity(ref_v * 3.0, PEAK_VELOCITY_SEED), 1.0);
}

#[test]
fn reference_velocity_has_a_floor() {
    assert_eq!(reference_velocity(10.0), REF_VELOCITY_FLOOR);
    assert!((reference_velocity(100.0) - 90.0).abs() < 1e-4);
}

#[test]
fn peak_velocity_grows_only_past_trigger() {
    let mut est = VelocityEstimator::new();
    assert_eq!(est.peak_velocity(), PEAK_VELOCITY_SEED);

    est.update(50.0); // below 92% of 60
    assert_eq!(est.peak_velocity(), PEAK_VELOCITY_SEED);

    est.update(100.0);
    assert!((est.peak_velocity() - 61.6).abs() < 1e-4);
}

#[test]
fn peak_velocity_does_not_shrink_between_trigger_and_peak() {
    let mut est = VelocityEstimator::new();
    // 57 > 0.92 * 60 but the blend would land below 60
    est.update(57.0);
    assert_eq!(est.peak_velocity(), PEAK_VELOCITY_SEED);
}

#[test]
fn peak_velocity_never_decreases_over_random_samples() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut est = VelocityEstimator::new();
    let mut prev = est.peak_velocity();
    for _ in 0..5000 {
        let v = rng.gen::<f32>() * 400.0;
        est.update(v);
        assert!(est.peak_velocity() >= prev);
        prev = est.peak_velocity();
    }
    assert!(prev > PEAK_VELOCITY_SEED);
}

#[test]
fn ema_starts_at_first_sample_then_blends() {
    let mut est = VelocityEstimator::new();
    let r = est.update(10.0);
    assert_eq!(r.smoothed, 10.0);
    let r = est.update(20.0);
    assert!((r.smoothed - 11.8).abs() < 1e-4);
    assert_eq!(r.instant, 20.0);
}

#[test]
fn observe_without_previous_is_stationary() {
    let mut est = VelocityEstimator::new();
    let r = est.observe(Vec2::new(5.0, 5.0), None);
    assert_eq!(r.instant, 0.0);
    assert_eq!(r.v_norm, 0.0);

    let r = est.observe(Vec2::new(3.0, 4.0), Some(Vec2::ZERO));
    assert!((r.instant - 5.0).abs() < 1e-5);
}
