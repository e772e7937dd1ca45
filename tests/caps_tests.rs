// Host-side tests for the cap preset table and shared constants.

use spray_core::*;

#[test]
fn caps_are_indexed_by_id() {
    for id in CapId::ALL {
        let cap = cap(id);
        assert_eq!(cap.id, id);
        assert_eq!(CapId::parse(id.as_str()), Some(id));
        assert_eq!(id.cap(), cap);
    }
    assert_eq!(CapId::parse(" FAT "), Some(CapId::Fat));
    assert_eq!(CapId::parse("jumbo"), None);
    assert_eq!(CapId::default(), CapId::Medium);
}

#[test]
fn labels_match_menu_text() {
    let labels: Vec<_> = all_caps().iter().map(|c| c.label).collect();
    assert_eq!(labels, ["Skinny Cap", "Medium Cap", "Fat Cap"]);
}

#[test]
fn cap_parameters_are_sane() {
    for c in all_caps() {
        assert!(c.min_radius > 0.0 && c.min_radius < c.max_radius, "{}", c.label);
        assert!(c.extreme_radius() > 0.0 && c.extreme_radius() < c.min_radius);
        assert!(c.density > 0.0);
        assert!(c.falloff_pow >= 1.0);
        assert!((0.0..=1.0).contains(&c.drip_chance));
        assert!((0.0..=1.0).contains(&c.halo_attenuation));
        assert!(c.tuning.halo_alpha_share < 1.0);
        assert!(c.tuning.core_speed_shrink < 1.0);
    }
    assert!(BASE_MIN_ALPHA < BASE_MAX_ALPHA);
    assert!(EMA_DECAY > 0.0 && EMA_DECAY < 1.0);
    assert!(PEAK_RETAIN + PEAK_ABSORB <= 1.0 + f32::EPSILON);
}

#[test]
fn caps_grow_from_skinny_to_fat() {
    let [skinny, medium, fat] = all_caps();
    assert!(skinny.max_radius < medium.max_radius && medium.max_radius < fat.max_radius);
    assert!(skinny.density < medium.density && medium.density < fat.density);
    assert!(skinny.max_drips < medium.max_drips && medium.max_drips < fat.max_drips);
}

#[test]
fn default_extreme_factor_applies_when_unset() {
    let c = SprayCap {
        extreme_radius_factor: None,
        ..MEDIUM_CAP.clone()
    };
    assert!((c.extreme_radius() - c.min_radius * DEFAULT_EXTREME_RADIUS_FACTOR).abs() < 1e-6);
}

#[test]
fn cell_provider_follows_selection() {
    let active = std::cell::Cell::new(CapId::Skinny);
    assert_eq!(active.active_cap().id, CapId::Skinny);
    active.set(CapId::Fat);
    assert_eq!(active.active_cap().id, CapId::Fat);
}
