//! # Ridged-Multifractal Noise
//!
//! Mountain ridges: each octave inverts and squares the kernel so zero
//! crossings become sharp crests, and each octave's signal weights the next
//! so detail accumulates on the ridges and stays out of the valleys.
//!
//! ## Spectral weights
//!
//! Octave `i` is scaled by `lacunarity^(-H·i)` with `H = 1`. The 30-entry
//! table depends on lacunarity alone and is recomputed eagerly inside
//! [`RidgedMultifractal::set_lacunarity`] (recompute-on-write), so it can
//! never be stale while sampling.

use crate::config::{FractalConfig, NoiseQuality};
use crate::constants::MAX_OCTAVES;
use crate::error::{validate_frequency, validate_octave_count, NoiseResult};
use crate::field::ScalarField;
use crate::kernel::gradient_coherent_noise;
use crate::math::clamp;

/// Subtracted from `|n|` to turn zero crossings into crests.
const RIDGE_OFFSET: f64 = 1.0;
/// Multiplier from one octave's signal to the next octave's weight.
const RIDGE_GAIN: f64 = 2.0;
/// Spectral exponent.
const RIDGE_H: f64 = 1.0;
/// Seeds are masked to be non-negative for this generator.
const RIDGE_SEED_MASK: i32 = 0x7fff_ffff;

/// Ridged-multifractal noise, roughly in [-1, 1].
///
/// Persistence in the shared [`FractalConfig`] is ignored; the spectral
/// weights play that role.
#[derive(Clone, Debug, PartialEq)]
pub struct RidgedMultifractal {
    config: FractalConfig,
    spectral_weights: [f64; MAX_OCTAVES],
}

impl Default for RidgedMultifractal {
    fn default() -> Self {
        Self::new()
    }
}

impl RidgedMultifractal {
    /// Creates a generator with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        let config = FractalConfig::default();
        Self {
            spectral_weights: spectral_weights(config.lacunarity),
            config,
        }
    }

    /// Creates a generator from a full configuration.
    ///
    /// # Errors
    ///
    /// Fails if the octave count or the frequency is out of range.
    pub fn with_config(config: FractalConfig) -> NoiseResult<Self> {
        config.validate()?;
        Ok(Self {
            spectral_weights: spectral_weights(config.lacunarity),
            config,
        })
    }

    /// Returns the current configuration.
    #[must_use]
    pub const fn config(&self) -> &FractalConfig {
        &self.config
    }

    /// Returns the per-octave spectral weights for the current lacunarity.
    #[must_use]
    pub const fn spectral_weights(&self) -> &[f64; MAX_OCTAVES] {
        &self.spectral_weights
    }

    /// Sets the first-octave frequency.
    ///
    /// # Errors
    ///
    /// Fails if `frequency` is not finite and positive.
    pub fn set_frequency(&mut self, frequency: f64) -> NoiseResult<()> {
        self.config.frequency = validate_frequency(frequency)?;
        Ok(())
    }

    /// Sets the per-octave frequency multiplier and recomputes the spectral
    /// weights.
    pub fn set_lacunarity(&mut self, lacunarity: f64) {
        self.config.lacunarity = lacunarity;
        self.spectral_weights = spectral_weights(lacunarity);
        tracing::debug!(lacunarity, "recomputed ridged spectral weights");
    }

    /// Sets the number of octaves.
    ///
    /// # Errors
    ///
    /// Fails if `count` is outside `1..=30`.
    pub fn set_octave_count(&mut self, count: usize) -> NoiseResult<()> {
        self.config.octave_count = validate_octave_count(count)?;
        Ok(())
    }

    /// Sets the seed. Any value is accepted; the top bit is cleared when
    /// octave seeds are derived.
    pub fn set_seed(&mut self, seed: i32) {
        self.config.seed = seed;
    }

    /// Sets the kernel interpolation quality.
    pub fn set_quality(&mut self, quality: NoiseQuality) {
        self.config.quality = quality;
    }
}

/// `lacunarity^(-H·i)` for every possible octave.
fn spectral_weights(lacunarity: f64) -> [f64; MAX_OCTAVES] {
    let mut weights = [0.0; MAX_OCTAVES];
    let mut frequency = 1.0_f64;
    for weight in &mut weights {
        *weight = frequency.powf(-RIDGE_H);
        frequency *= lacunarity;
    }
    weights
}

impl ScalarField for RidgedMultifractal {
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn evaluate(&self, x: f64, y: f64, z: f64) -> f64 {
        let cfg = &self.config;
        let mut x = x * cfg.frequency;
        let mut y = y * cfg.frequency;
        let mut z = z * cfg.frequency;

        let mut value = 0.0;
        let mut weight = 1.0;

        for octave in 0..cfg.octave_count {
            let seed = cfg.seed.wrapping_add(octave as i32) & RIDGE_SEED_MASK;
            let noise = gradient_coherent_noise(x, y, z, seed, cfg.quality);

            let mut signal = RIDGE_OFFSET - noise.abs();
            signal *= signal;
            signal *= weight;

            weight = clamp(signal * RIDGE_GAIN, 0.0, 1.0);
            value += signal * self.spectral_weights[octave];

            x *= cfg.lacunarity;
            y *= cfg.lacunarity;
            z *= cfg.lacunarity;
        }

        value * 1.25 - 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_spectral_weight_is_one() {
        for lacunarity in [1.5, 2.0, 2.5, 3.7] {
            let mut ridged = RidgedMultifractal::new();
            ridged.set_lacunarity(lacunarity);
            assert_eq!(ridged.spectral_weights()[0], 1.0);
        }
    }

    #[test]
    fn test_spectral_weights_follow_lacunarity() {
        let mut ridged = RidgedMultifractal::new();
        assert!((ridged.spectral_weights()[1] - 0.5).abs() < 1e-12);
        assert!((ridged.spectral_weights()[3] - 0.125).abs() < 1e-12);

        ridged.set_lacunarity(4.0);
        assert!((ridged.spectral_weights()[1] - 0.25).abs() < 1e-12);
        assert!((ridged.spectral_weights()[2] - 0.0625).abs() < 1e-12);
    }

    #[test]
    fn test_single_octave_formula() {
        let mut ridged = RidgedMultifractal::new();
        ridged.set_octave_count(1).unwrap();
        ridged.set_lacunarity(3.0);
        ridged.set_seed(21);

        for i in 0..100 {
            let (x, y, z) = (f64::from(i) * 0.23, f64::from(i) * 0.41 - 7.0, 0.9);
            let n = gradient_coherent_noise(x, y, z, 21, NoiseQuality::Standard);
            let expected = (1.0 - n.abs()).powi(2) * 1.25 - 1.0;
            assert!((ridged.evaluate(x, y, z) - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_negative_seed_is_masked() {
        let mut masked = RidgedMultifractal::new();
        masked.set_seed(-5);
        let mut positive = RidgedMultifractal::new();
        positive.set_seed(-5 & RIDGE_SEED_MASK);

        assert_eq!(masked.evaluate(0.3, 0.5, 0.7), positive.evaluate(0.3, 0.5, 0.7));
    }

    #[test]
    fn test_two_octaves_carry_weight() {
        let (seed, lacunarity) = (-3, 2.5);
        let mut ridged = RidgedMultifractal::new();
        ridged.set_octave_count(2).unwrap();
        ridged.set_lacunarity(lacunarity);
        ridged.set_seed(seed);

        let mut partial_weights = 0;
        for i in 0..200 {
            let t = f64::from(i);
            let (x, y, z) = (t * 0.173 + 0.05, t * -0.311 + 0.4, 0.27);

            let n0 = gradient_coherent_noise(x, y, z, seed & RIDGE_SEED_MASK, NoiseQuality::Standard);
            let signal0 = (1.0 - n0.abs()) * (1.0 - n0.abs());
            let weight = (signal0 * 2.0).clamp(0.0, 1.0);

            let n1 = gradient_coherent_noise(
                x * lacunarity,
                y * lacunarity,
                z * lacunarity,
                (seed + 1) & RIDGE_SEED_MASK,
                NoiseQuality::Standard,
            );
            let signal1 = (1.0 - n1.abs()) * (1.0 - n1.abs()) * weight;

            let expected = (signal0 + signal1 / lacunarity) * 1.25 - 1.0;
            let actual = ridged.evaluate(x, y, z);
            assert!((actual - expected).abs() < 1e-12, "{actual} vs {expected} at step {i}");

            if weight < 1.0 {
                partial_weights += 1;
            }
        }
        // The sweep must exercise the feedback below the clamp.
        assert!(partial_weights > 0);
    }

    #[test]
    fn test_lattice_points_are_full_ridges() {
        // |n| = 0 everywhere on the lattice: every octave has signal 1 and
        // weight stays clamped at 1.
        let mut ridged = RidgedMultifractal::new();
        ridged.set_octave_count(2).unwrap();
        let expected = (1.0 + 0.5) * 1.25 - 1.0;
        assert!((ridged.evaluate(2.0, 5.0, -1.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_output_range() {
        let ridged = RidgedMultifractal::new();
        for i in 0..5_000 {
            let t = f64::from(i);
            let value = ridged.evaluate(t * 0.091, t * 0.033, t * -0.067);
            assert!((-1.0..=1.5).contains(&value), "value {value} out of range");
        }
    }
}
