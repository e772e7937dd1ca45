//! Spray cap presets.
//!
//! A cap is an immutable bundle of spray-shape parameters. The table is fixed
//! at compile time and selected by [`CapId`]; the synthesizer re-reads the
//! active cap every frame, so swapping caps mid-stroke takes effect on the
//! next frame.

use std::cell::Cell;

/// Halo and core filament constants carried per cap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SprayTuning {
    /// Halo probability per particle at full speed.
    pub halo_base_chance: f32,
    /// Extra halo probability added at vNorm = 0.
    pub halo_slow_chance: f32,
    /// Halo distance range, as multiples of the spray radius.
    pub halo_reach_min: f32,
    pub halo_reach_span: f32,
    /// Extra halo reach at vNorm = 0.
    pub halo_slow_reach: f32,
    /// Halo mark opacity relative to the particle that spawned it.
    pub halo_alpha_share: f32,
    /// Core filament only runs for caps with `core_density_boost` above this.
    pub core_threshold: f32,
    /// Core particle budget, as shares of `total_dots`.
    pub core_base_share: f32,
    pub core_speed_share: f32,
    /// Core cluster radius relative to the spray radius.
    pub core_radius_ratio: f32,
    /// How much of the core radius is lost at vNorm = 1.
    pub core_speed_shrink: f32,
    /// Core particle alpha multiplier.
    pub core_alpha_gain: f32,
}

impl SprayTuning {
    pub const DEFAULT: SprayTuning = SprayTuning {
        halo_base_chance: 0.04,
        halo_slow_chance: 0.04,
        halo_reach_min: 0.9,
        halo_reach_span: 0.5,
        halo_slow_reach: 0.35,
        halo_alpha_share: 0.15,
        core_threshold: 0.15,
        core_base_share: 0.10,
        core_speed_share: 0.10,
        core_radius_ratio: 0.22,
        core_speed_shrink: 0.5,
        core_alpha_gain: 1.12,
    };
}

impl Default for SprayTuning {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SprayCap {
    pub id: CapId,
    pub label: &'static str,
    /// Radius range in pixels; fast strokes approach `min_radius`.
    pub min_radius: f32,
    pub max_radius: f32,
    /// Base particles per unit path length.
    pub density: f32,
    /// Multiplies the velocity-driven opacity.
    pub alpha_factor: f32,
    /// Radial sampling exponent; higher concentrates particles at the center.
    pub falloff_pow: f32,
    /// Overspray halo reach multiplier (0 disables the halo).
    pub halo: f32,
    /// Scales halo probability (1 = unchanged).
    pub halo_attenuation: f32,
    /// Drip probability per frame while nearly stationary.
    pub drip_chance: f32,
    pub max_drips: u32,
    pub core_density_boost: f32,
    pub core_alpha_boost: f32,
    /// Share of `min_radius` reached at extreme speed. `None` uses the default.
    pub extreme_radius_factor: Option<f32>,
    pub tuning: SprayTuning,
}

impl SprayCap {
    #[inline]
    pub fn extreme_radius(&self) -> f32 {
        self.min_radius
            * self
                .extreme_radius_factor
                .unwrap_or(crate::constants::DEFAULT_EXTREME_RADIUS_FACTOR)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CapId {
    Skinny,
    #[default]
    Medium,
    Fat,
}

impl CapId {
    pub const ALL: [CapId; 3] = [CapId::Skinny, CapId::Medium, CapId::Fat];

    pub fn as_str(self) -> &'static str {
        match self {
            CapId::Skinny => "skinny",
            CapId::Medium => "medium",
            CapId::Fat => "fat",
        }
    }

    pub fn parse(id: &str) -> Option<CapId> {
        match id.trim().to_ascii_lowercase().as_str() {
            "skinny" => Some(CapId::Skinny),
            "medium" => Some(CapId::Medium),
            "fat" => Some(CapId::Fat),
            _ => None,
        }
    }

    #[inline]
    pub fn cap(self) -> &'static SprayCap {
        cap(self)
    }
}

// skinny: tight radius, lower density, sharp edge, no drips
pub static SKINNY_CAP: SprayCap = SprayCap {
    id: CapId::Skinny,
    label: "Skinny Cap",
    min_radius: 4.0,
    max_radius: 14.0,
    density: 26.0,
    alpha_factor: 0.9,
    falloff_pow: 1.2,
    halo: 0.15,
    halo_attenuation: 1.0,
    drip_chance: 0.0,
    max_drips: 0,
    core_density_boost: 0.2,
    core_alpha_boost: 0.05,
    extreme_radius_factor: Some(0.1),
    tuning: SprayTuning::DEFAULT,
};

// medium: balanced
pub static MEDIUM_CAP: SprayCap = SprayCap {
    id: CapId::Medium,
    label: "Medium Cap",
    min_radius: 8.0,
    max_radius: 22.0,
    density: 40.0,
    alpha_factor: 1.05,
    falloff_pow: 1.4,
    halo: 0.2,
    halo_attenuation: 0.85,
    drip_chance: 0.02,
    max_drips: 1,
    core_density_boost: 0.55,
    core_alpha_boost: 0.12,
    extreme_radius_factor: Some(0.62),
    tuning: SprayTuning::DEFAULT,
};

// fat: big radius, lots of paint, drips
pub static FAT_CAP: SprayCap = SprayCap {
    id: CapId::Fat,
    label: "Fat Cap",
    min_radius: 14.0,
    max_radius: 40.0,
    density: 54.0,
    alpha_factor: 1.15,
    falloff_pow: 1.7,
    halo: 0.32,
    halo_attenuation: 0.7,
    drip_chance: 0.08,
    max_drips: 3,
    core_density_boost: 0.9,
    core_alpha_boost: 0.18,
    extreme_radius_factor: Some(0.45),
    tuning: SprayTuning::DEFAULT,
};

pub fn cap(id: CapId) -> &'static SprayCap {
    match id {
        CapId::Skinny => &SKINNY_CAP,
        CapId::Medium => &MEDIUM_CAP,
        CapId::Fat => &FAT_CAP,
    }
}

pub fn all_caps() -> [&'static SprayCap; 3] {
    CapId::ALL.map(cap)
}

/// Supplies the active cap; read once per synthesis frame.
pub trait CapProvider {
    fn active_cap(&self) -> &'static SprayCap;
}

impl CapProvider for CapId {
    fn active_cap(&self) -> &'static SprayCap {
        cap(*self)
    }
}

impl CapProvider for Cell<CapId> {
    fn active_cap(&self) -> &'static SprayCap {
        cap(self.get())
    }
}
