//! Master breathing oscillator and frame rotation.

use crate::noise::NoiseField;
use std::f64::consts::TAU;

/// Phase advance per frame; one full sine period every ~15 s at 60 fps.
pub const PHASE_RATE: f64 = 0.007;
/// Sine contribution to the master breath.
const SINE_AMPLITUDE: f64 = 0.10;
/// Noise contribution to the master breath.
const NOISE_AMPLITUDE: f64 = 0.08;
/// Time scale of the noise input to the master breath.
const NOISE_RATE: f64 = 0.0015;
/// Radians of frame rotation per frame, barely perceptible drift.
const ROTATION_RATE: f64 = 0.00013;

/// The global pulsation driving all radii for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breath {
    /// `t * 0.007`, the shared sine phase.
    pub phase: f64,
    /// Signed deviation around zero, roughly `[-0.14, 0.14]`.
    pub master: f64,
    /// `1 + master`, the scalar applied to every radius.
    pub factor: f64,
}

impl Breath {
    /// Sample the oscillator at frame `t`.
    pub fn at(t: u64, noise: &dyn NoiseField) -> Self {
        let phase = t as f64 * PHASE_RATE;
        let master = phase.sin() * SINE_AMPLITUDE
            + (noise.sample(t as f64 * NOISE_RATE, 0.0) - 0.5) * NOISE_AMPLITUDE;
        Self {
            phase,
            master,
            factor: 1.0 + master,
        }
    }
}

/// Accumulated frame rotation at frame `t`, reduced mod 2π so the angle
/// stays numerically stable over unbounded runs.
pub fn rotation_angle(t: u64) -> f64 {
    (t as f64 * ROTATION_RATE) % TAU
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Flat(f64);

    impl NoiseField for Flat {
        fn sample(&self, _x: f64, _y: f64) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_breath_matches_formula() {
        let noise = Flat(0.8);
        for t in [0u64, 1, 77, 5_000, 1_000_000] {
            let breath = Breath::at(t, &noise);
            let expected =
                (t as f64 * 0.007).sin() * 0.10 + (0.8 - 0.5) * 0.08;
            assert_eq!(breath.master, expected);
            assert_eq!(breath.factor, 1.0 + expected);
        }
    }

    #[test]
    fn test_centered_noise_cancels_noise_term() {
        let breath = Breath::at(0, &Flat(0.5));
        assert_eq!(breath.master, 0.0);
        assert_eq!(breath.factor, 1.0);
    }

    #[test]
    fn test_factor_range_is_narrow() {
        // sin in [-1,1] and noise in [0,1] bound the factor to ~[0.86, 1.14].
        for t in 0..10_000u64 {
            let lo = Breath::at(t, &Flat(0.0)).factor;
            let hi = Breath::at(t, &Flat(1.0)).factor;
            assert!(lo >= 0.85 && hi <= 1.15);
        }
    }

    #[test]
    fn test_rotation_accumulates_mod_tau() {
        assert_eq!(rotation_angle(0), 0.0);
        let almost_full_turn = (TAU / ROTATION_RATE) as u64;
        assert!(rotation_angle(almost_full_turn) < TAU);
        for t in [1u64, 48_332, 10_000_000_000] {
            let angle = rotation_angle(t);
            assert!((0.0..TAU).contains(&angle));
            assert_eq!(angle, (t as f64 * 0.00013) % TAU);
        }
    }
}
