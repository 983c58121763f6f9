//! Output clamping.

use std::fmt;

use crate::error::{validate_bounds, NoiseResult};
use crate::field::ScalarField;
use crate::math::clamp;

/// Clamps the output of its source to `[lower, upper]` (default `[-1, 1]`).
pub struct ClampOutput {
    source: Box<dyn ScalarField>,
    lower: f64,
    upper: f64,
}

impl ClampOutput {
    /// Wraps `source` with bounds `[-1, 1]`.
    pub fn new(source: impl ScalarField + 'static) -> Self {
        Self {
            source: Box::new(source),
            lower: -1.0,
            upper: 1.0,
        }
    }

    /// Wraps `source` with the given bounds.
    ///
    /// # Errors
    ///
    /// Fails if `lower >= upper`.
    pub fn with_bounds(
        source: impl ScalarField + 'static,
        lower: f64,
        upper: f64,
    ) -> NoiseResult<Self> {
        let mut clamped = Self::new(source);
        clamped.set_bounds(lower, upper)?;
        Ok(clamped)
    }

    /// Returns `(lower, upper)`.
    #[must_use]
    pub const fn bounds(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }

    /// Sets the clamping bounds.
    ///
    /// # Errors
    ///
    /// Fails if `lower >= upper`; the previous bounds stay in place.
    pub fn set_bounds(&mut self, lower: f64, upper: f64) -> NoiseResult<()> {
        (self.lower, self.upper) = validate_bounds(lower, upper)?;
        Ok(())
    }
}

impl fmt::Debug for ClampOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClampOutput")
            .field("lower", &self.lower)
            .field("upper", &self.upper)
            .finish_non_exhaustive()
    }
}

impl ScalarField for ClampOutput {
    #[inline]
    fn evaluate(&self, x: f64, y: f64, z: f64) -> f64 {
        clamp(self.source.evaluate(x, y, z), self.lower, self.upper)
    }
}
