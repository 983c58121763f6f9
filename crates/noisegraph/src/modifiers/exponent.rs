//! Exponential remap of a child's output.

use std::fmt;

use crate::field::ScalarField;

/// Maps the source output from [-1, 1] to [0, 1], raises it to `exponent`
/// and maps back: `|(v + 1) / 2|^exponent · 2 - 1`.
///
/// Exponents above 1 push values toward -1 (wider valleys); below 1 toward 1.
pub struct ExponentialOutput {
    source: Box<dyn ScalarField>,
    exponent: f64,
}

impl ExponentialOutput {
    /// Wraps `source` with the given exponent.
    pub fn new(source: impl ScalarField + 'static, exponent: f64) -> Self {
        Self {
            source: Box::new(source),
            exponent,
        }
    }

    /// Returns the exponent.
    #[must_use]
    pub const fn exponent(&self) -> f64 {
        self.exponent
    }

    /// Changes the exponent.
    pub fn set_exponent(&mut self, exponent: f64) {
        self.exponent = exponent;
    }
}

impl fmt::Debug for ExponentialOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExponentialOutput")
            .field("exponent", &self.exponent)
            .finish_non_exhaustive()
    }
}

impl ScalarField for ExponentialOutput {
    #[inline]
    fn evaluate(&self, x: f64, y: f64, z: f64) -> f64 {
        let normalized = (self.source.evaluate(x, y, z) + 1.0) / 2.0;
        normalized.abs().powf(self.exponent) * 2.0 - 1.0
    }
}
