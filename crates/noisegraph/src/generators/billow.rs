//! Billow noise: Perlin octaves folded with `2|n| - 1` for puffy, rounded
//! shapes (clouds, rocks).

use crate::config::{FractalConfig, NoiseQuality};
use crate::error::{validate_frequency, validate_octave_count, NoiseResult};
use crate::field::ScalarField;
use crate::kernel::gradient_coherent_noise;

/// Shift added to the folded sum to re-center it.
const BILLOW_BIAS: f64 = 0.5;

/// Octave-summed absolute gradient noise.
///
/// With one octave the output is `2|n| - 1 + 0.5`, inside `[-0.5, 1.5]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Billow {
    config: FractalConfig,
}

impl Billow {
    /// Creates a generator with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator from a full configuration.
    ///
    /// # Errors
    ///
    /// Fails if the octave count or the frequency is out of range.
    pub fn with_config(config: FractalConfig) -> NoiseResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the current configuration.
    #[must_use]
    pub const fn config(&self) -> &FractalConfig {
        &self.config
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

    /// Sets the per-octave frequency multiplier.
    pub fn set_lacunarity(&mut self, lacunarity: f64) {
        self.config.lacunarity = lacunarity;
    }

    /// Sets the per-octave amplitude multiplier.
    pub fn set_persistence(&mut self, persistence: f64) {
        self.config.persistence = persistence;
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

    /// Sets the seed.
    pub fn set_seed(&mut self, seed: i32) {
        self.config.seed = seed;
    }

    /// Sets the kernel interpolation quality.
    pub fn set_quality(&mut self, quality: NoiseQuality) {
        self.config.quality = quality;
    }
}

impl ScalarField for Billow {
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn evaluate(&self, x: f64, y: f64, z: f64) -> f64 {
        let cfg = &self.config;
        let mut x = x * cfg.frequency;
        let mut y = y * cfg.frequency;
        let mut z = z * cfg.frequency;

        let mut value = 0.0;
        let mut amplitude = 1.0;

        for octave in 0..cfg.octave_count {
            let seed = cfg.seed.wrapping_add(octave as i32);
            let signal = gradient_coherent_noise(x, y, z, seed, cfg.quality);
            value += (2.0 * signal.abs() - 1.0) * amplitude;

            x *= cfg.lacunarity;
            y *= cfg.lacunarity;
            z *= cfg.lacunarity;
            amplitude *= cfg.persistence;
        }

        value + BILLOW_BIAS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_octave(seed: i32) -> Billow {
        Billow::with_config(FractalConfig {
            octave_count: 1,
            seed,
            ..FractalConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_single_octave_formula() {
        let billow = single_octave(3);
        for i in 0..100 {
            let (x, y, z) = (f64::from(i) * 0.29, 1.7, f64::from(i) * -0.43);
            let n = gradient_coherent_noise(x, y, z, 3, NoiseQuality::Standard);
            let expected = 2.0 * n.abs() - 1.0 + 0.5;
            assert_eq!(billow.evaluate(x, y, z), expected);
        }
    }

    #[test]
    fn test_single_octave_range() {
        let billow = single_octave(11);
        for i in 0..5_000 {
            let t = f64::from(i);
            let value = billow.evaluate(t * 0.173, t * 0.057 - 40.0, t * 0.011);
            assert!((-0.5..=1.5).contains(&value), "value {value} out of range");
        }
    }

    #[test]
    fn test_lattice_points_hit_floor() {
        // Kernel is zero on the lattice, so every octave contributes -1.
        let mut billow = Billow::new();
        billow.set_octave_count(2).unwrap();
        let expected = -1.0 - 0.5 + 0.5;
        assert_eq!(billow.evaluate(3.0, -2.0, 8.0), expected);
    }
}
