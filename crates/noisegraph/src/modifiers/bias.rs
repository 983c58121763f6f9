//! Additive offset on a child's output.

use std::fmt;

use crate::field::ScalarField;

/// Adds a constant to the output of its source.
pub struct BiasOutput {
    source: Box<dyn ScalarField>,
    bias: f64,
}

impl BiasOutput {
    /// Wraps `source`, adding `bias` to every value.
    pub fn new(source: impl ScalarField + 'static, bias: f64) -> Self {
        Self {
            source: Box::new(source),
            bias,
        }
    }

    /// Returns the offset.
    #[must_use]
    pub const fn bias(&self) -> f64 {
        self.bias
    }

    /// Changes the offset.
    pub fn set_bias(&mut self, bias: f64) {
        self.bias = bias;
    }
}

impl fmt::Debug for BiasOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BiasOutput")
            .field("bias", &self.bias)
            .finish_non_exhaustive()
    }
}

impl ScalarField for BiasOutput {
    #[inline]
    fn evaluate(&self, x: f64, y: f64, z: f64) -> f64 {
        self.source.evaluate(x, y, z) + self.bias
    }
}
