//! # Node Configuration
//!
//! Shared configuration for the fractal synthesizers, loadable from TOML once
//! at startup:
//!
//! ```toml
//! frequency = 0.01
//! lacunarity = 2.0
//! persistence = 0.5
//! octave_count = 6
//! seed = 1337
//! quality = "best"
//! ```
//!
//! Missing keys fall back to the defaults. Loading validates the same
//! preconditions the setters do.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_FREQUENCY, DEFAULT_LACUNARITY, DEFAULT_OCTAVE_COUNT, DEFAULT_PERSISTENCE,
    DEFAULT_SEED,
};
use crate::error::{validate_frequency, validate_octave_count, NoiseResult};

/// Interpolation quality of the coherent-noise kernel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseQuality {
    /// Linear weights. Visible creases at lattice boundaries.
    Fast,
    /// Cubic S-curve weights. Continuous first derivative.
    #[default]
    Standard,
    /// Quintic S-curve weights. Continuous second derivative.
    Best,
}

/// Configuration embedded in every octave-based synthesizer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalConfig {
    /// Frequency of the first octave. Must be finite and positive.
    pub frequency: f64,
    /// Frequency multiplier between successive octaves.
    pub lacunarity: f64,
    /// Amplitude multiplier between successive octaves.
    pub persistence: f64,
    /// Number of octaves, `1..=30`.
    pub octave_count: usize,
    /// Seed decorrelating octaves and instances.
    pub seed: i32,
    /// Kernel interpolation quality.
    pub quality: NoiseQuality,
}

impl Default for FractalConfig {
    fn default() -> Self {
        Self {
            frequency: DEFAULT_FREQUENCY,
            lacunarity: DEFAULT_LACUNARITY,
            persistence: DEFAULT_PERSISTENCE,
            octave_count: DEFAULT_OCTAVE_COUNT,
            seed: DEFAULT_SEED,
            quality: NoiseQuality::Standard,
        }
    }
}

impl FractalConfig {
    /// Checks octave count and frequency.
    ///
    /// # Errors
    ///
    /// Returns an error if the octave count is outside `1..=30` or the
    /// frequency is not a finite positive number.
    pub fn validate(&self) -> NoiseResult<()> {
        validate_octave_count(self.octave_count)?;
        validate_frequency(self.frequency)?;
        Ok(())
    }

    /// Parses and validates a config from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`crate::NoiseError::InvalidConfig`] for malformed TOML and the
    /// usual validation errors for out-of-range values.
    pub fn from_toml_str(source: &str) -> NoiseResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        tracing::debug!(
            octaves = config.octave_count,
            frequency = config.frequency,
            seed = config.seed,
            "loaded fractal config"
        );
        Ok(config)
    }
}
