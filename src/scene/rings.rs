//! The fixed ring table and per-ring point math.

use super::breath::Breath;
use crate::noise::NoiseField;
use std::f64::consts::TAU;

/// One concentric point formation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSpec {
    /// Number of points on the ring.
    pub point_count: u32,
    /// Rest radius as a fraction of the smaller canvas dimension.
    pub base_radius: f32,
}

/// The eight rings, innermost first.
pub const RINGS: [RingSpec; 8] = [
    RingSpec { point_count: 6, base_radius: 0.055 },
    RingSpec { point_count: 12, base_radius: 0.100 },
    RingSpec { point_count: 18, base_radius: 0.148 },
    RingSpec { point_count: 24, base_radius: 0.198 },
    RingSpec { point_count: 30, base_radius: 0.250 },
    RingSpec { point_count: 36, base_radius: 0.302 },
    RingSpec { point_count: 42, base_radius: 0.356 },
    RingSpec { point_count: 48, base_radius: 0.410 },
];

/// Number of axis spokes radiating from the center.
pub const SPOKE_COUNT: u32 = 6;
/// Number of concentric discs in the center glow.
pub const GLOW_LAYERS: u32 = 5;

/// Per-ring phase offset, a ripple travelling outward.
const RING_PHASE_STEP: f64 = 0.22;
/// Ring noise: lattice spacing along the ring axis.
const RING_NOISE_X_STEP: f64 = 9.1;
const RING_NOISE_RATE: f64 = 0.0020;
const RING_NOISE_AMPLITUDE: f64 = 0.05;
const RING_SINE_AMPLITUDE: f64 = 0.045;

/// Radial point jitter in pixels.
const POINT_RADIAL_RATE: f64 = 0.0030;
const POINT_RADIAL_AMPLITUDE: f64 = 4.5;
/// Angular point jitter in radians.
const POINT_ANGULAR_RATE: f64 = 0.0025;
const POINT_ANGULAR_AMPLITUDE: f64 = 0.022;

/// Dot brightness jitter.
const DOT_ALPHA_SEED_OFFSET: f64 = 500.0;
const DOT_ALPHA_RATE: f64 = 0.0040;
const DOT_ALPHA_AMPLITUDE: f64 = 55.0;
/// Dot size jitter.
const DOT_SIZE_SEED_OFFSET: f64 = 1500.0;
const DOT_SIZE_RATE: f64 = 0.0050;
const DOT_SIZE_AMPLITUDE: f64 = 1.5;
const ANGULAR_SEED_OFFSET: f64 = 777.0;

/// Alpha bounds for dots after jitter.
pub const DOT_ALPHA_MIN: f64 = 8.0;
pub const DOT_ALPHA_MAX: f64 = 255.0;
/// Smallest drawable dot diameter.
pub const DOT_DIAMETER_MIN: f64 = 0.5;

/// Map a ring index over `[0, n-1]` linearly onto `[from, to]`, endpoints
/// inclusive.
pub fn lerp_over_rings(ri: usize, from: f64, to: f64) -> f64 {
    let span = (RINGS.len() - 1) as f64;
    from + (to - from) * ri as f64 / span
}

/// Outline stroke alpha for ring `ri`, fading outward.
pub fn line_alpha(ri: usize) -> f64 {
    lerp_over_rings(ri, 28.0, 7.0)
}

/// Rest dot alpha for ring `ri` before per-point jitter.
pub fn dot_base_alpha(ri: usize) -> f64 {
    lerp_over_rings(ri, 210.0, 55.0)
}

/// Rest dot diameter for ring `ri` before per-point jitter.
pub fn dot_base_diameter(ri: usize) -> f64 {
    lerp_over_rings(ri, 4.8, 1.4)
}

/// Noise seed for point `i` of ring `ri`; gives every point a private
/// trajectory through the field.
pub fn point_seed(ri: usize, i: u32) -> f64 {
    (ri as u32 * 300 + i) as f64
}

/// Breathing radius of ring `ri` at frame `t`, in pixels.
pub fn ring_radius(
    ri: usize,
    t: u64,
    min_dim: f32,
    breath: &Breath,
    noise: &dyn NoiseField,
) -> f64 {
    let spec = &RINGS[ri];
    let phase_off = ri as f64 * RING_PHASE_STEP;
    let ring_noise = (noise.sample(ri as f64 * RING_NOISE_X_STEP, t as f64 * RING_NOISE_RATE)
        - 0.5)
        * RING_NOISE_AMPLITUDE;
    let local_mod = (breath.phase + phase_off).sin() * RING_SINE_AMPLITUDE + ring_noise;
    spec.base_radius as f64 * min_dim as f64 * breath.factor * (1.0 + local_mod)
}

/// Jittered polar position of point `i` on ring `ri`: `(radius, angle)`
/// around the canvas center, before the frame transform.
pub fn point_polar(
    ri: usize,
    i: u32,
    radius: f64,
    t: u64,
    noise: &dyn NoiseField,
) -> (f64, f64) {
    let count = RINGS[ri].point_count as f64;
    let angle = TAU * i as f64 / count;
    let seed = point_seed(ri, i);
    let t_scaled = t as f64;
    let w_r = (noise.sample(seed, t_scaled * POINT_RADIAL_RATE) - 0.5) * POINT_RADIAL_AMPLITUDE;
    let w_a = (noise.sample(seed + ANGULAR_SEED_OFFSET, t_scaled * POINT_ANGULAR_RATE) - 0.5)
        * POINT_ANGULAR_AMPLITUDE;
    (radius + w_r, angle + w_a)
}

/// Dot alpha for point `i` of ring `ri`, clamped into the drawable range.
pub fn dot_alpha(ri: usize, i: u32, t: u64, noise: &dyn NoiseField) -> f64 {
    let seed = point_seed(ri, i);
    let jitter = (noise.sample(seed + DOT_ALPHA_SEED_OFFSET, t as f64 * DOT_ALPHA_RATE) - 0.5)
        * DOT_ALPHA_AMPLITUDE;
    (dot_base_alpha(ri) + jitter).clamp(DOT_ALPHA_MIN, DOT_ALPHA_MAX)
}

/// Dot diameter for point `i` of ring `ri`, floored so dots never
/// degenerate.
pub fn dot_diameter(ri: usize, i: u32, t: u64, noise: &dyn NoiseField) -> f64 {
    let seed = point_seed(ri, i);
    let jitter = (noise.sample(seed + DOT_SIZE_SEED_OFFSET, t as f64 * DOT_SIZE_RATE) - 0.5)
        * DOT_SIZE_AMPLITUDE;
    (dot_base_diameter(ri) + jitter).max(DOT_DIAMETER_MIN)
}
