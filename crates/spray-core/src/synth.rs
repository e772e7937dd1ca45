//! Per-frame particle emission.
//!
//! One call paints the segment travelled since the previous frame: a main
//! particle burst interpolated along the segment, faint halo dust, an optional
//! dense core at the current point, and drips when the nozzle is held still.

use crate::caps::SprayCap;
use crate::constants::*;
use crate::surface::{RasterSurface, Rgba};
use crate::velocity::VelocityReading;
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;
use std::f32::consts::TAU;

/// Sizing derived from the cap, vNorm and the distance moved this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SprayParams {
    pub radius: f32,
    pub alpha: f32,
    pub total_dots: usize,
    pub spread_pow: f32,
    pub edge_factor: f32,
}

/// What a synthesis pass drew.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameStats {
    pub radius: f32,
    pub alpha: f32,
    pub v_norm: f32,
    pub total_dots: usize,
    pub halo_marks: usize,
    pub core_dots: usize,
    pub drips: usize,
}

/// Inputs of one synthesis pass.
#[derive(Clone, Copy, Debug)]
pub struct StrokeFrame {
    pub current: Vec2,
    pub previous: Option<Vec2>,
    pub reading: VelocityReading,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DripStroke {
    pub start: Vec2,
    pub end: Vec2,
    pub thickness: f32,
}

/// Radius interpolated between the slow/fast range, collapsing toward the
/// cap's extreme radius only near vNorm = 1.
pub fn spray_radius(cap: &SprayCap, v_norm: f32) -> f32 {
    let slow = 1.0 - v_norm;
    let base = cap.min_radius + slow * (cap.max_radius - cap.min_radius);
    let extreme = cap.extreme_radius();
    extreme + (base - extreme) * slow.powf(RADIUS_BLEND_POW)
}

/// Square-root eased opacity plus the cap's core boost, clamped to 1.
pub fn spray_alpha(cap: &SprayCap, v_norm: f32) -> f32 {
    let max_alpha = BASE_MAX_ALPHA * cap.alpha_factor;
    let fade = BASE_MIN_ALPHA + v_norm.sqrt() * (max_alpha - BASE_MIN_ALPHA);
    (fade + cap.core_alpha_boost).min(1.0)
}

/// Stationary floor on the particle budget; holding still still paints.
pub fn stationary_dots(cap: &SprayCap, v_norm: f32) -> f32 {
    cap.density
        * (STATIONARY_FLOOR_BASE
            + v_norm.powf(STATIONARY_FLOOR_SPEED_POW) * STATIONARY_FLOOR_SPEED_GAIN)
}

pub fn dots_per_pixel(cap: &SprayCap, v_norm: f32) -> f32 {
    (cap.density / DOTS_PER_PIXEL_DIVISOR)
        * (1.0 + v_norm.powf(SPEED_DENSITY_POW) * SPEED_DENSITY_GAIN)
        * (1.0 + cap.core_density_boost)
}

pub fn spray_params(cap: &SprayCap, v_norm: f32, distance: f32) -> SprayParams {
    let v_norm = v_norm.clamp(0.0, 1.0);
    let travelled = (distance * dots_per_pixel(cap, v_norm)).round();
    let total = stationary_dots(cap, v_norm).max(travelled);
    SprayParams {
        radius: spray_radius(cap, v_norm),
        alpha: spray_alpha(cap, v_norm),
        total_dots: if total.is_finite() { total.round().max(0.0) as usize } else { 0 },
        spread_pow: cap.falloff_pow + (1.0 - v_norm) * SLOW_SPREAD_SOFTENING,
        edge_factor: EDGE_FADE_BASE - v_norm.sqrt() * EDGE_FADE_SPEED_SHARPEN,
    }
}

/// Random point at `r` from `center`, with `r = radius * u^pow`.
#[inline]
fn scatter<R: Rng + ?Sized>(rng: &mut R, center: Vec2, radius: f32, pow: f32) -> (Vec2, f32) {
    let angle = rng.gen::<f32>() * TAU;
    let r = radius * rng.gen::<f32>().powf(pow);
    (center + Vec2::from_angle(angle) * r, r)
}

/// Drip strokes for this frame; empty unless the pointer is nearly still and
/// the cap drips.
pub fn plan_drips<R: Rng + ?Sized>(
    rng: &mut R,
    cap: &SprayCap,
    pos: Vec2,
    inst_velocity: f32,
) -> SmallVec<[DripStroke; 4]> {
    let mut drips = SmallVec::new();
    if inst_velocity > DRIP_VELOCITY_MAX || cap.drip_chance <= 0.0 {
        return drips;
    }
    let chance = cap.drip_chance * (1.0 - inst_velocity / DRIP_VELOCITY_MAX);
    while drips.len() < cap.max_drips as usize && rng.gen::<f32>() < chance {
        let len = cap.max_radius * (DRIP_LENGTH_MIN + rng.gen::<f32>() * DRIP_LENGTH_SPAN);
        let thickness = DRIP_THICKNESS_MIN + rng.gen::<f32>() * DRIP_THICKNESS_SPAN;
        let start_dx = (rng.gen::<f32>() - 0.5) * cap.min_radius * DRIP_START_JITTER;
        let end_dx = (rng.gen::<f32>() - 0.5) * cap.min_radius * DRIP_END_JITTER;
        drips.push(DripStroke {
            start: Vec2::new(pos.x + start_dx, pos.y),
            end: Vec2::new(pos.x + end_dx, pos.y + len),
            thickness,
        });
    }
    drips
}

pub fn synthesize<S, R>(
    surface: &mut S,
    rng: &mut R,
    cap: &SprayCap,
    frame: StrokeFrame,
    color: Rgba,
) -> FrameStats
where
    S: RasterSurface + ?Sized,
    R: Rng + ?Sized,
{
    let StrokeFrame {
        current,
        previous,
        reading,
    } = frame;
    let v_norm = reading.v_norm.clamp(0.0, 1.0);
    let slow = 1.0 - v_norm;
    let start = previous.unwrap_or(current);
    let distance = start.distance(current);
    let params = spray_params(cap, v_norm, distance);
    let tuning = &cap.tuning;

    let mut stats = FrameStats {
        radius: params.radius,
        alpha: params.alpha,
        v_norm,
        total_dots: params.total_dots,
        ..FrameStats::default()
    };
    // a zero radius leaves nothing to scatter and would divide by zero below
    let radius = params.radius.max(f32::EPSILON);

    let halo_chance = if cap.halo > 0.0 {
        (tuning.halo_base_chance + slow * tuning.halo_slow_chance) * cap.halo_attenuation
    } else {
        0.0
    };
    let halo_reach = cap.halo * (1.0 + slow * tuning.halo_slow_reach);

    for i in 0..params.total_dots {
        let t = i as f32 / params.total_dots as f32;
        let base = start.lerp(current, t);
        let (p, r) = scatter(rng, base, radius, params.spread_pow);
        let local_alpha = params.alpha * (1.0 - (r / radius) * params.edge_factor);
        surface.draw_disc(
            p.x,
            p.y,
            DOT_BASE_RADIUS + r * DOT_RADIUS_GROWTH,
            color.with_alpha(local_alpha),
        );

        if halo_chance > 0.0 && rng.gen::<f32>() < halo_chance {
            let reach = radius
                * (tuning.halo_reach_min + rng.gen::<f32>() * tuning.halo_reach_span)
                * halo_reach;
            let h = base + Vec2::from_angle(rng.gen::<f32>() * TAU) * reach;
            surface.draw_rect_1x1(
                h.x,
                h.y,
                color.with_alpha(local_alpha * tuning.halo_alpha_share),
            );
            stats.halo_marks += 1;
        }
    }

    if cap.core_density_boost > tuning.core_threshold {
        let v_sq = v_norm * v_norm;
        let count = (params.total_dots as f32
            * (tuning.core_base_share + v_sq * tuning.core_speed_share))
            .round() as usize;
        let core_radius =
            (radius * tuning.core_radius_ratio * (1.0 - v_sq * tuning.core_speed_shrink))
                .max(f32::EPSILON);
        let core_alpha = (params.alpha * tuning.core_alpha_gain).min(1.0);
        for _ in 0..count {
            let (p, r) = scatter(rng, current, core_radius, params.spread_pow);
            let local_alpha = core_alpha * (1.0 - (r / radius) * params.edge_factor);
            surface.draw_disc(
                p.x,
                p.y,
                DOT_BASE_RADIUS + r * DOT_RADIUS_GROWTH,
                color.with_alpha(local_alpha),
            );
        }
        stats.core_dots = count;
    }

    let drips = plan_drips(rng, cap, current, reading.instant);
    for d in &drips {
        surface.draw_line(d.start.x, d.start.y, d.end.x, d.end.y, d.thickness, color);
    }
    stats.drips = drips.len();

    stats
}
