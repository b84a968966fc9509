//! Coherent noise fields.
//!
//! The animation derives all of its organic jitter from a smooth
//! pseudo-random field sampled at real-valued coordinates. The field is
//! injected as a trait object so frame composition stays a pure function
//! that tests can drive with a stub.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Default octave count for the production field.
pub const DEFAULT_OCTAVES: u32 = 4;
/// Default per-octave amplitude falloff.
pub const DEFAULT_PERSISTENCE: f64 = 0.5;

/// A smooth pseudo-random function of 2D coordinates.
///
/// Implementations must be deterministic for given coordinates and return
/// values in `[0, 1]`. Nearby inputs produce nearby outputs (coherent
/// noise, not uniform random).
pub trait NoiseField: Send + Sync {
    /// Sample the field at `(x, y)`.
    fn sample(&self, x: f64, y: f64) -> f64;
}

/// Gradient (Perlin) noise combined over several octaves.
///
/// Each octave doubles the input frequency and scales amplitude by the
/// persistence factor; the weighted sum is normalized back into `[0, 1]`.
pub struct PerlinField {
    perm: [u8; 512],
    octaves: u32,
    persistence: f64,
}

impl PerlinField {
    /// Create a field with the default detail (4 octaves, persistence 0.5).
    pub fn new(seed: u64) -> Self {
        Self::with_detail(seed, DEFAULT_OCTAVES, DEFAULT_PERSISTENCE)
    }

    /// Create a field with explicit octave count and persistence.
    pub fn with_detail(seed: u64, octaves: u32, persistence: f64) -> Self {
        let mut table: Vec<u8> = (0..=255).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        table.shuffle(&mut rng);

        let mut perm = [0u8; 512];
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = table[i & 255];
        }

        Self {
            perm,
            octaves: octaves.max(1),
            persistence,
        }
    }

    fn hash(&self, x: i64, y: i64) -> u8 {
        let xi = (x & 255) as usize;
        let yi = (y & 255) as usize;
        self.perm[self.perm[xi] as usize + yi]
    }

    /// Dot product of the lattice gradient at `(ix, iy)` with the offset
    /// vector to the sample point.
    fn grad(&self, ix: i64, iy: i64, dx: f64, dy: f64) -> f64 {
        match self.hash(ix, iy) & 7 {
            0 => dx + dy,
            1 => dx - dy,
            2 => -dx + dy,
            3 => -dx - dy,
            4 => dx,
            5 => -dx,
            6 => dy,
            _ => -dy,
        }
    }

    /// Single-octave signed noise, roughly in `[-1, 1]`.
    fn octave(&self, x: f64, y: f64) -> f64 {
        let x0 = x.floor();
        let y0 = y.floor();
        let ix = x0 as i64;
        let iy = y0 as i64;
        let dx = x - x0;
        let dy = y - y0;

        let u = fade(dx);
        let v = fade(dy);

        let n00 = self.grad(ix, iy, dx, dy);
        let n10 = self.grad(ix + 1, iy, dx - 1.0, dy);
        let n01 = self.grad(ix, iy + 1, dx, dy - 1.0);
        let n11 = self.grad(ix + 1, iy + 1, dx - 1.0, dy - 1.0);

        let nx0 = lerp(n00, n10, u);
        let nx1 = lerp(n01, n11, u);
        // 2D gradient noise peaks at sqrt(2)/2; rescale toward unit range.
        lerp(nx0, nx1, v) * std::f64::consts::SQRT_2
    }
}

impl NoiseField for PerlinField {
    fn sample(&self, x: f64, y: f64) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max_amplitude = 0.0;

        for _ in 0..self.octaves {
            total += self.octave(x * frequency, y * frequency) * amplitude;
            max_amplitude += amplitude;
            amplitude *= self.persistence;
            frequency *= 2.0;
        }

        (0.5 + 0.5 * total / max_amplitude).clamp(0.0, 1.0)
    }
}

fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
