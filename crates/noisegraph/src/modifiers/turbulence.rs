//! # Turbulence
//!
//! Domain distortion: three Perlin generators, one per axis, push the input
//! coordinates around before the source is sampled.
//!
//! The distorters are sampled at the input offset by fixed fractions of a
//! cell. Without the offsets, integer-aligned inputs (after frequency
//! scaling) would land on lattice points where gradient noise is exactly
//! zero, and those points would never move.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::FractalConfig;
use crate::constants::{DEFAULT_FREQUENCY, DEFAULT_SEED};
use crate::error::{validate_frequency, validate_octave_count, NoiseResult};
use crate::field::ScalarField;
use crate::generators::Perlin;

/// Per-axis sampling offsets for the x, y and z distorters.
const DISTORT_OFFSETS: [[f64; 3]; 3] = [
    [12414.0 / 65536.0, 65124.0 / 65536.0, 31337.0 / 65536.0],
    [26519.0 / 65536.0, 18128.0 / 65536.0, 60493.0 / 65536.0],
    [53820.0 / 65536.0, 11213.0 / 65536.0, 44845.0 / 65536.0],
];

/// Default octave count of the distorters.
const DEFAULT_ROUGHNESS: usize = 3;

/// Turbulence configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurbulenceConfig {
    /// Frequency of the distorters.
    pub frequency: f64,
    /// Scale of the displacement added to each coordinate.
    pub power: f64,
    /// Octave count of the distorters.
    pub roughness: usize,
    /// Base seed; the y and z distorters use `seed + 1` and `seed + 2`.
    pub seed: i32,
}

impl Default for TurbulenceConfig {
    fn default() -> Self {
        Self {
            frequency: DEFAULT_FREQUENCY,
            power: 1.0,
            roughness: DEFAULT_ROUGHNESS,
            seed: DEFAULT_SEED,
        }
    }
}

/// Evaluates its source at coordinates displaced by three Perlin fields.
pub struct Turbulence {
    source: Box<dyn ScalarField>,
    power: f64,
    distorters: [Perlin; 3],
}

impl Turbulence {
    /// Wraps `source` with the default configuration.
    pub fn new(source: impl ScalarField + 'static) -> Self {
        let distorter = |offset: i32| {
            Perlin::from_validated(FractalConfig {
                octave_count: DEFAULT_ROUGHNESS,
                seed: DEFAULT_SEED.wrapping_add(offset),
                ..FractalConfig::default()
            })
        };
        Self {
            source: Box::new(source),
            power: 1.0,
            distorters: [distorter(0), distorter(1), distorter(2)],
        }
    }

    /// Wraps `source` with a full configuration.
    ///
    /// # Errors
    ///
    /// Fails if the roughness or the frequency is out of range.
    pub fn with_config(
        source: impl ScalarField + 'static,
        config: TurbulenceConfig,
    ) -> NoiseResult<Self> {
        let mut turbulence = Self::new(source);
        turbulence.set_frequency(config.frequency)?;
        turbulence.set_roughness(config.roughness)?;
        turbulence.set_power(config.power);
        turbulence.set_seed(config.seed);
        Ok(turbulence)
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> TurbulenceConfig {
        let x = self.distorters[0].config();
        TurbulenceConfig {
            frequency: x.frequency,
            power: self.power,
            roughness: x.octave_count,
            seed: x.seed,
        }
    }

    /// Sets the frequency of all three distorters.
    ///
    /// # Errors
    ///
    /// Fails if `frequency` is not finite and positive.
    pub fn set_frequency(&mut self, frequency: f64) -> NoiseResult<()> {
        let frequency = validate_frequency(frequency)?;
        for generator in &mut self.distorters {
            generator.set_frequency(frequency)?;
        }
        Ok(())
    }

    /// Sets the displacement scale.
    pub fn set_power(&mut self, power: f64) {
        self.power = power;
    }

    /// Sets the octave count of all three distorters.
    ///
    /// # Errors
    ///
    /// Fails if `roughness` is outside `1..=30`.
    pub fn set_roughness(&mut self, roughness: usize) -> NoiseResult<()> {
        let roughness = validate_octave_count(roughness)?;
        for generator in &mut self.distorters {
            generator.set_octave_count(roughness)?;
        }
        Ok(())
    }

    /// Seeds the distorters with `seed`, `seed + 1` and `seed + 2`.
    pub fn set_seed(&mut self, seed: i32) {
        for (generator, offset) in self.distorters.iter_mut().zip(0..) {
            generator.set_seed(seed.wrapping_add(offset));
        }
    }

    /// Returns the distorted coordinates for `(x, y, z)`.
    #[must_use]
    pub fn distort(&self, x: f64, y: f64, z: f64) -> (f64, f64, f64) {
        let sample = |axis: usize| {
            let [ox, oy, oz] = DISTORT_OFFSETS[axis];
            self.distorters[axis].evaluate(x + ox, y + oy, z + oz) * self.power
        };
        (x + sample(0), y + sample(1), z + sample(2))
    }
}

impl fmt::Debug for Turbulence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Turbulence")
            .field("config", &self.config())
            .finish_non_exhaustive()
    }
}

impl ScalarField for Turbulence {
    #[inline]
    fn evaluate(&self, x: f64, y: f64, z: f64) -> f64 {
        let (dx, dy, dz) = self.distort(x, y, z);
        self.source.evaluate(dx, dy, dz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::Constant;

    /// Returns its x coordinate.
    struct XProbe;

    impl ScalarField for XProbe {
        fn evaluate(&self, x: f64, _y: f64, _z: f64) -> f64 {
            x
        }
    }

    #[test]
    fn test_default_config() {
        let turbulence = Turbulence::new(Constant::new(0.0));
        let config = turbulence.config();
        assert_eq!(config, TurbulenceConfig::default());
        assert_eq!(config.roughness, 3);
    }

    #[test]
    fn test_seeds_are_offset_per_axis() {
        let mut turbulence = Turbulence::new(Constant::new(0.0));
        turbulence.set_seed(i32::MAX);
        assert_eq!(turbulence.distorters[0].config().seed, i32::MAX);
        assert_eq!(turbulence.distorters[1].config().seed, i32::MIN);
        assert_eq!(turbulence.distorters[2].config().seed, i32::MIN + 1);
    }

    #[test]
    fn test_zero_power_is_pass_through() {
        let mut turbulence = Turbulence::new(XProbe);
        turbulence.set_power(0.0);
        for x in [-3.5, 0.0, 1.0, 7.25] {
            assert_eq!(turbulence.evaluate(x, 2.0, 3.0), x);
        }
    }

    #[test]
    fn test_integer_inputs_are_still_displaced() {
        let turbulence = Turbulence::new(XProbe);
        let moved = (-3..=3).any(|i| {
            let x = f64::from(i);
            turbulence.evaluate(x, 0.0, 0.0) != x
        });
        assert!(moved);
    }

    #[test]
    fn test_displacement_matches_distorter() {
        let turbulence = Turbulence::new(XProbe);
        let (x, y, z) = (0.3, 0.7, -1.1);
        let [ox, oy, oz] = DISTORT_OFFSETS[0];
        let expected = x + turbulence.distorters[0].evaluate(x + ox, y + oy, z + oz);
        assert_eq!(turbulence.evaluate(x, y, z), expected);
    }

    #[test]
    fn test_setters_validate() {
        let mut turbulence = Turbulence::new(Constant::new(0.0));
        assert!(turbulence.set_roughness(0).is_err());
        assert!(turbulence.set_roughness(31).is_err());
        assert!(turbulence.set_frequency(0.0).is_err());
        assert_eq!(turbulence.config().roughness, 3);

        turbulence.set_roughness(5).unwrap();
        assert!(turbulence.distorters.iter().all(|d| d.config().octave_count == 5));
    }

    #[test]
    fn test_with_config() {
        let config = TurbulenceConfig {
            frequency: 0.5,
            power: 0.125,
            roughness: 2,
            seed: 9,
        };
        let turbulence = Turbulence::with_config(Constant::new(0.0), config).unwrap();
        assert_eq!(turbulence.config(), config);
    }
}
