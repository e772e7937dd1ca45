// Velocity estimator and synthesis tuning constants shared by every cap.

// Velocity estimator
pub const EMA_DECAY: f32 = 0.18; // weight of the newest sample in the smoothed velocity
pub const PEAK_VELOCITY_SEED: f32 = 60.0; // initial peak reference (px per frame)
pub const PEAK_GROWTH_TRIGGER: f32 = 0.92; // grow peak when inst velocity exceeds this share of it
pub const PEAK_RETAIN: f32 = 0.96;
pub const PEAK_ABSORB: f32 = 0.04;
pub const REF_VELOCITY_FLOOR: f32 = 40.0;
pub const REF_VELOCITY_SHARE: f32 = 0.9; // refV = max(floor, peak * share)
pub const LOG_COMPRESSION_GAIN: f32 = 0.09; // ln(1 + gain * v)

// Radius
pub const DEFAULT_EXTREME_RADIUS_FACTOR: f32 = 0.6;
pub const RADIUS_BLEND_POW: f32 = 1.4;

// Alpha
pub const BASE_MIN_ALPHA: f32 = 0.38;
pub const BASE_MAX_ALPHA: f32 = 0.95; // scaled by cap alpha factor

// Particle budget
pub const DOTS_PER_PIXEL_DIVISOR: f32 = 9.0;
pub const SPEED_DENSITY_POW: f32 = 1.3;
pub const SPEED_DENSITY_GAIN: f32 = 4.2;
pub const STATIONARY_FLOOR_BASE: f32 = 1.7;
pub const STATIONARY_FLOOR_SPEED_POW: f32 = 0.9;
pub const STATIONARY_FLOOR_SPEED_GAIN: f32 = 1.5;

// Particle distribution
pub const SLOW_SPREAD_SOFTENING: f32 = 0.55; // added to falloff pow at vNorm = 0
pub const EDGE_FADE_BASE: f32 = 0.65;
pub const EDGE_FADE_SPEED_SHARPEN: f32 = 0.22;
pub const DOT_BASE_RADIUS: f32 = 1.2;
pub const DOT_RADIUS_GROWTH: f32 = 0.02; // dot radius grows with its offset from center

// Drips
pub const DRIP_VELOCITY_MAX: f32 = 2.0; // only drip while the nozzle is nearly still
pub const DRIP_LENGTH_MIN: f32 = 0.6; // multiples of the cap max radius
pub const DRIP_LENGTH_SPAN: f32 = 0.9;
pub const DRIP_THICKNESS_MIN: f32 = 1.0;
pub const DRIP_THICKNESS_SPAN: f32 = 2.2;
pub const DRIP_START_JITTER: f32 = 0.6; // multiples of the cap min radius
pub const DRIP_END_JITTER: f32 = 0.4;

// Export
pub const EXPORT_FILE_PREFIX: &str = "graffiti-";
pub const EXPORT_FILE_EXT: &str = ".png";
