//! Perlin-style fractal noise: octaves of gradient noise summed with
//! geometrically decaying amplitude.

use crate::config::{FractalConfig, NoiseQuality};
use crate::error::{validate_frequency, validate_octave_count, NoiseResult};
use crate::field::ScalarField;
use crate::kernel::gradient_coherent_noise;

/// Octave-summed gradient noise.
///
/// Octave `o` samples the kernel at `frequency · lacunarity^o` with seed
/// `seed + o` (wrapping) and contributes with amplitude `persistence^o`. The
/// sum is not normalized; with default settings it stays within about
/// [-2, 2].
///
/// # Example
///
/// ```rust
/// use noisegraph::{Perlin, ScalarField};
///
/// let mut noise = Perlin::with_seed(7);
/// noise.set_octave_count(3).unwrap();
/// let value = noise.evaluate(0.5, 1.25, -2.0);
/// assert!(value.abs() < 4.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Perlin {
    config: FractalConfig,
}

impl Default for Perlin {
    fn default() -> Self {
        Self::new()
    }
}

impl Perlin {
    /// Creates a generator with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: FractalConfig::default(),
        }
    }

    /// Creates a generator with the default configuration and `seed`.
    #[must_use]
    pub fn with_seed(seed: i32) -> Self {
        Self {
            config: FractalConfig {
                seed,
                ..FractalConfig::default()
            },
        }
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

    /// Wraps a configuration the caller has already validated.
    pub(crate) const fn from_validated(config: FractalConfig) -> Self {
        Self { config }
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

impl ScalarField for Perlin {
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
            value += gradient_coherent_noise(x, y, z, seed, cfg.quality) * amplitude;

            x *= cfg.lacunarity;
            y *= cfg.lacunarity;
            z *= cfg.lacunarity;
            amplitude *= cfg.persistence;
        }

        value
    }
}
