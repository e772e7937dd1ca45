//! Pointer velocity estimation.
//!
//! Instantaneous speed is the pixel distance between the current and previous
//! samples, measured once per frame. It is normalized against an adaptive peak
//! with logarithmic compression so typical strokes use the whole [0, 1] range
//! while spikes are compressed rather than clipped.

use crate::constants::*;
use glam::Vec2;

/// Output of one estimator update.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VelocityReading {
    /// Pixels moved since the previous frame.
    pub instant: f32,
    /// Exponential moving average of `instant`.
    pub smoothed: f32,
    /// Closeness factor in [0, 1]; 0 = slow/far, 1 = fast/close.
    pub v_norm: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VelocityEstimator {
    ema_velocity: f32,
    peak_velocity: f32,
}

impl Default for VelocityEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityEstimator {
    pub fn new() -> Self {
        Self {
            ema_velocity: 0.0,
            peak_velocity: PEAK_VELOCITY_SEED,
        }
    }

    pub fn ema_velocity(&self) -> f32 {
        self.ema_velocity
    }

    pub fn peak_velocity(&self) -> f32 {
        self.peak_velocity
    }

    /// Feed one frame's sample pair. A missing previous sample counts as
    /// stationary.
    pub fn observe(&mut self, current: Vec2, previous: Option<Vec2>) -> VelocityReading {
        let instant = previous.map_or(0.0, |p| current.distance(p));
        self.update(instant)
    }

    /// Fold an instantaneous speed into the trackers and normalize it.
    pub fn update(&mut self, instant: f32) -> VelocityReading {
        self.ema_velocity = if self.ema_velocity == 0.0 {
            instant
        } else {
            self.ema_velocity * (1.0 - EMA_DECAY) + instant * EMA_DECAY
        };

        if instant > self.peak_velocity * PEAK_GROWTH_TRIGGER {
            let grown = self.peak_velocity * PEAK_RETAIN + instant * PEAK_ABSORB;
            // the blend can land below the current peak when instant sits
            // between the trigger and the peak; the peak never shrinks
            if grown > self.peak_velocity {
                log::trace!(
                    "[spray] peak velocity {:.1} -> {:.1}",
                    self.peak_velocity,
                    grown
                );
                self.peak_velocity = grown;
            }
        }

        VelocityReading {
            instant,
            smoothed: self.ema_velocity,
            v_norm: normalized_velocity(instant, self.peak_velocity),
        }
    }
}

/// Reference speed that maps to vNorm = 1 for a given peak.
#[inline]
pub fn reference_velocity(peak_velocity: f32) -> f32 {
    REF_VELOCITY_FLOOR.max(peak_velocity * REF_VELOCITY_SHARE)
}

/// Log-compressed closeness factor, clamped to [0, 1].
#[inline]
pub fn normalized_velocity(instant: f32, peak_velocity: f32) -> f32 {
    let instant = instant.max(0.0);
    let ref_v = reference_velocity(peak_velocity);
    let raw = (LOG_COMPRESSION_GAIN * instant).ln_1p() / (LOG_COMPRESSION_GAIN * ref_v).ln_1p();
    raw.min(1.0)
}
