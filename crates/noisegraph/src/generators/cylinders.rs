//! Concentric cylinders around the y axis.

use crate::constants::DEFAULT_FREQUENCY;
use crate::error::{validate_frequency, NoiseResult};
use crate::field::ScalarField;
use crate::math::get_smaller;

/// Concentric rings in the xz plane, extruded along y.
///
/// Output is `1` on each ring (integer radius after frequency scaling) and
/// falls linearly to `-1` halfway between rings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cylinders {
    frequency: f64,
}

impl Default for Cylinders {
    fn default() -> Self {
        Self::new()
    }
}

impl Cylinders {
    /// Creates rings one unit apart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            frequency: DEFAULT_FREQUENCY,
        }
    }

    /// Returns the ring frequency.
    #[must_use]
    pub const fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Sets the ring frequency (rings per unit radius).
    ///
    /// # Errors
    ///
    /// Fails if `frequency` is not finite and positive.
    pub fn set_frequency(&mut self, frequency: f64) -> NoiseResult<()> {
        self.frequency = validate_frequency(frequency)?;
        Ok(())
    }
}

impl ScalarField for Cylinders {
    fn evaluate(&self, x: f64, _y: f64, z: f64) -> f64 {
        let x = x * self.frequency;
        let z = z * self.frequency;

        let radius = (x * x + z * z).sqrt();
        let from_inner = radius - radius.floor();
        let from_outer = 1.0 - from_inner;
        1.0 - get_smaller(from_inner, from_outer) * 4.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rings_and_midpoints() {
        let cylinders = Cylinders::new();
        assert_eq!(cylinders.evaluate(0.0, 0.0, 0.0), 1.0);
        assert_eq!(cylinders.evaluate(3.0, 0.0, 0.0), 1.0);
        assert_eq!(cylinders.evaluate(0.0, 0.0, -2.0), 1.0);
        assert_eq!(cylinders.evaluate(0.5, 0.0, 0.0), -1.0);
        assert_eq!(cylinders.evaluate(0.0, 0.0, 2.5), -1.0);
        assert_eq!(cylinders.evaluate(1.25, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_independent_of_y() {
        let cylinders = Cylinders::new();
        for y in [-100.0, -0.5, 0.0, 3.3, 1e6] {
            assert_eq!(cylinders.evaluate(0.3, y, 0.4), cylinders.evaluate(0.3, 0.0, 0.4));
        }
    }

    #[test]
    fn test_frequency_scales_radius() {
        let mut cylinders = Cylinders::new();
        cylinders.set_frequency(2.0).unwrap();
        // Radius 0.25 becomes 0.5 after scaling: midway between rings.
        assert_eq!(cylinders.evaluate(0.25, 0.0, 0.0), -1.0);
        assert!(cylinders.set_frequency(0.0).is_err());
        assert_eq!(cylinders.frequency(), 2.0);
    }
}
