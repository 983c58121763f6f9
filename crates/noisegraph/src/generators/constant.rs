//! Constant field.

use crate::field::ScalarField;

/// Returns the same value at every coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Constant {
    value: f64,
}

impl Constant {
    /// Creates a constant field.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self { value }
    }

    /// Returns the constant.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Changes the constant.
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }
}

impl ScalarField for Constant {
    #[inline]
    fn evaluate(&self, _x: f64, _y: f64, _z: f64) -> f64 {
        self.value
    }
}
