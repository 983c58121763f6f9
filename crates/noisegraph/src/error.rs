//! # Noise Error Types
//!
//! Every error here is a configuration error: it is raised synchronously by a
//! constructor or a setter, never while sampling. A graph that was built
//! without error evaluates without error.
//!
//! There is no "missing child" error. Composite nodes take their children as
//! required constructor arguments, so an incomplete graph cannot be built.

use thiserror::Error;

use crate::constants::MAX_OCTAVES;

/// Errors raised while configuring noise nodes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NoiseError {
    /// Octave count outside `1..=MAX_OCTAVES`.
    #[error("octave count must be between 1 and {max}, got {count}")]
    OctaveCountOutOfRange {
        /// The rejected count.
        count: usize,
        /// The largest accepted count.
        max: usize,
    },

    /// Lower bound not strictly below the upper bound.
    #[error("lower bound {lower} must be lower than upper bound {upper}")]
    InvalidBounds {
        /// The rejected lower bound.
        lower: f64,
        /// The rejected upper bound.
        upper: f64,
    },

    /// Frequency that is zero, negative or not finite.
    #[error("frequency must be finite and greater than zero, got {0}")]
    InvalidFrequency(f64),

    /// Malformed configuration source.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl NoiseError {
    /// Returns true for every variant; all noise errors are
    /// configuration-time failures.
    #[must_use]
    pub const fn is_invalid_configuration(&self) -> bool {
        matches!(
            self,
            Self::OctaveCountOutOfRange { .. }
                | Self::InvalidBounds { .. }
                | Self::InvalidFrequency(_)
                | Self::InvalidConfig(_)
        )
    }

    pub(crate) const fn octave_count(count: usize) -> Self {
        Self::OctaveCountOutOfRange {
            count,
            max: MAX_OCTAVES,
        }
    }
}

impl From<toml::de::Error> for NoiseError {
    fn from(err: toml::de::Error) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}

/// Result type for noise configuration.
pub type NoiseResult<T> = Result<T, NoiseError>;

/// Checks an octave count against `1..=MAX_OCTAVES`.
pub(crate) fn validate_octave_count(count: usize) -> NoiseResult<usize> {
    if (1..=MAX_OCTAVES).contains(&count) {
        Ok(count)
    } else {
        Err(NoiseError::octave_count(count))
    }
}

/// Checks that a frequency is finite and strictly positive.
pub(crate) fn validate_frequency(frequency: f64) -> NoiseResult<f64> {
    if frequency.is_finite() && frequency > 0.0 {
        Ok(frequency)
    } else {
        Err(NoiseError::InvalidFrequency(frequency))
    }
}

/// Checks that `lower < upper`.
pub(crate) fn validate_bounds(lower: f64, upper: f64) -> NoiseResult<(f64, f64)> {
    if lower < upper {
        Ok((lower, upper))
    } else {
        Err(NoiseError::InvalidBounds { lower, upper })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_octave_count_limits() {
        assert!(validate_octave_count(0).is_err());
        assert_eq!(validate_octave_count(1), Ok(1));
        assert_eq!(validate_octave_count(MAX_OCTAVES), Ok(MAX_OCTAVES));
        assert_eq!(
            validate_octave_count(MAX_OCTAVES + 1),
            Err(NoiseError::OctaveCountOutOfRange { count: 31, max: 30 })
        );
    }

    #[test]
    fn test_frequency_rejects_degenerate_values() {
        assert!(validate_frequency(0.0).is_err());
        assert!(validate_frequency(-1.0).is_err());
        assert!(validate_frequency(f64::NAN).is_err());
        assert!(validate_frequency(f64::INFINITY).is_err());
        assert_eq!(validate_frequency(0.01), Ok(0.01));
    }

    #[test]
    fn test_bounds_must_be_strictly_ordered() {
        assert!(validate_bounds(1.0, 1.0).is_err());
        assert!(validate_bounds(2.0, 1.0).is_err());
        assert_eq!(validate_bounds(-1.0, 1.0), Ok((-1.0, 1.0)));
    }

    #[test]
    fn test_every_variant_is_configuration_error() {
        let errors = [
            NoiseError::octave_count(0),
            NoiseError::InvalidBounds {
                lower: 2.0,
                upper: 1.0,
            },
            NoiseError::InvalidFrequency(0.0),
            NoiseError::InvalidConfig("bad".into()),
        ];
        assert!(errors.iter().all(NoiseError::is_invalid_configuration));
    }

    #[test]
    fn test_error_messages() {
        let err = NoiseError::octave_count(31);
        assert_eq!(err.to_string(), "octave count must be between 1 and 30, got 31");
    }
}
