//! # Voronoi Cellular Noise
//!
//! Every unit lattice cell holds one feature point, displaced from the cell
//! corner by up to a full cell width on each axis. A sample belongs to the
//! nearest feature point; its value is a per-cell constant, optionally shaded
//! by the distance to that point.
//!
//! ## Neighbourhood
//!
//! Displacements reach up to one cell in either direction, so a feature point
//! two cells away can still be the nearest. The search therefore covers the
//! 5×5×5 block around the sample's cell (125 candidates), a fixed cost.
//!
//! ## Lattice values
//!
//! Feature offsets and cell values come from a [`CellValues`] source.
//! [`HashedCellValues`] uses the kernel's value noise; tests substitute a
//! hand-built source to check the search against known geometry.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FREQUENCY, DEFAULT_SEED, SQRT_3};
use crate::error::{validate_frequency, NoiseResult};
use crate::field::ScalarField;
use crate::kernel::{fast_floor, lattice_cell, value_noise};

/// Search radius around the sample's cell, in cells.
const SEARCH_RADIUS: i32 = 2;

/// Source of per-lattice-point scalars for Voronoi.
pub trait CellValues: Send + Sync {
    /// Returns the scalar for lattice point `(ix, iy, iz)` under `seed`,
    /// expected in [-1, 1].
    fn value(&self, ix: i32, iy: i32, iz: i32, seed: i32) -> f64;
}

/// [`CellValues`] backed by the kernel's hashed value noise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HashedCellValues;

impl CellValues for HashedCellValues {
    #[inline]
    fn value(&self, ix: i32, iy: i32, iz: i32, seed: i32) -> f64 {
        value_noise(ix, iy, iz, seed)
    }
}

/// Voronoi configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoronoiConfig {
    /// Cells per unit of input space.
    pub frequency: f64,
    /// Scale of the per-cell value.
    pub displacement: f64,
    /// Adds `distance·√3 - 1` shading when true.
    pub distance_enabled: bool,
    /// Seed for feature placement and cell values.
    pub seed: i32,
}

impl Default for VoronoiConfig {
    fn default() -> Self {
        Self {
            frequency: DEFAULT_FREQUENCY,
            displacement: 1.0,
            distance_enabled: false,
            seed: DEFAULT_SEED,
        }
    }
}

/// Cellular noise around pseudo-randomly displaced feature points.
#[derive(Clone, Debug, PartialEq)]
pub struct Voronoi<V = HashedCellValues> {
    config: VoronoiConfig,
    values: V,
}

impl Default for Voronoi {
    fn default() -> Self {
        Self::new()
    }
}

impl Voronoi {
    /// Creates a generator with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_cell_values(HashedCellValues)
    }

    /// Creates a generator from a full configuration.
    ///
    /// # Errors
    ///
    /// Fails if the frequency is not finite and positive.
    pub fn with_config(config: VoronoiConfig) -> NoiseResult<Self> {
        let mut voronoi = Self::new();
        voronoi.set_config(config)?;
        Ok(voronoi)
    }
}

impl<V: CellValues> Voronoi<V> {
    /// Creates a generator drawing lattice values from `values`.
    pub fn with_cell_values(values: V) -> Self {
        Self {
            config: VoronoiConfig::default(),
            values,
        }
    }

    /// Replaces the whole configuration.
    ///
    /// # Errors
    ///
    /// Fails if the frequency is not finite and positive.
    pub fn set_config(&mut self, config: VoronoiConfig) -> NoiseResult<()> {
        validate_frequency(config.frequency)?;
        self.config = config;
        Ok(())
    }

    /// Returns the current configuration.
    #[must_use]
    pub const fn config(&self) -> &VoronoiConfig {
        &self.config
    }

    /// Sets the cell frequency.
    ///
    /// # Errors
    ///
    /// Fails if `frequency` is not finite and positive.
    pub fn set_frequency(&mut self, frequency: f64) -> NoiseResult<()> {
        self.config.frequency = validate_frequency(frequency)?;
        Ok(())
    }

    /// Sets the scale of the per-cell value.
    pub fn set_displacement(&mut self, displacement: f64) {
        self.config.displacement = displacement;
    }

    /// Enables or disables distance shading.
    pub fn set_distance_enabled(&mut self, enabled: bool) {
        self.config.distance_enabled = enabled;
    }

    /// Sets the seed.
    pub fn set_seed(&mut self, seed: i32) {
        self.config.seed = seed;
    }
}

impl<V: CellValues> ScalarField for Voronoi<V> {
    fn evaluate(&self, x: f64, y: f64, z: f64) -> f64 {
        let cfg = &self.config;
        let x = x * cfg.frequency;
        let y = y * cfg.frequency;
        let z = z * cfg.frequency;

        // Positions are kept relative to the sample's cell so distances stay
        // small however far the input is from the origin.
        let (xi, tx) = lattice_cell(x);
        let (yi, ty) = lattice_cell(y);
        let (zi, tz) = lattice_cell(z);

        let mut min_dist = f64::MAX;
        let mut candidate = (0.0, 0.0, 0.0);

        for dz in -SEARCH_RADIUS..=SEARCH_RADIUS {
            let zc = zi.wrapping_add(dz);
            for dy in -SEARCH_RADIUS..=SEARCH_RADIUS {
                let yc = yi.wrapping_add(dy);
                for dx in -SEARCH_RADIUS..=SEARCH_RADIUS {
                    let xc = xi.wrapping_add(dx);

                    let x_pos = f64::from(dx) + self.values.value(xc, yc, zc, cfg.seed);
                    let y_pos = f64::from(dy)
                        + self.values.value(xc, yc, zc, cfg.seed.wrapping_add(1));
                    let z_pos = f64::from(dz)
                        + self.values.value(xc, yc, zc, cfg.seed.wrapping_add(2));

                    let (ddx, ddy, ddz) = (x_pos - tx, y_pos - ty, z_pos - tz);
                    let dist = ddx * ddx + ddy * ddy + ddz * ddz;

                    if dist < min_dist {
                        min_dist = dist;
                        candidate = (x_pos, y_pos, z_pos);
                    }
                }
            }
        }

        let value = if cfg.distance_enabled {
            min_dist.sqrt() * SQRT_3 - 1.0
        } else {
            0.0
        };

        let cell_value = self.values.value(
            xi.wrapping_add(fast_floor(candidate.0)),
            yi.wrapping_add(fast_floor(candidate.1)),
            zi.wrapping_add(fast_floor(candidate.2)),
            cfg.seed,
        );

        value + cfg.displacement * cell_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Feature points at cell centres, except for a few pulled cells.
    struct PinnedCells;

    impl CellValues for PinnedCells {
        fn value(&self, ix: i32, iy: i32, iz: i32, seed: i32) -> f64 {
            match (ix, iy, iz, seed) {
                // Feature of cell (2, 0, 0) pulled to x = 1.1.
                (2, 0, 0, 0) => -0.9,
                // Feature of cell (13, 0, 0) pulled to x = 12.0.
                (13, 0, 0, 0) => -1.0,
                _ => 0.5,
            }
        }
    }

    fn pinned(distance_enabled: bool) -> Voronoi<PinnedCells> {
        let mut voronoi = Voronoi::with_cell_values(PinnedCells);
        voronoi.set_distance_enabled(distance_enabled);
        voronoi
    }

    #[test]
    fn test_centre_feature_distance() {
        let voronoi = pinned(true);
        // Nearest feature is the centre of cell (0, 0, 0).
        let expected = 0.29_f64.sqrt() * SQRT_3 - 1.0 + 0.5;
        assert!((voronoi.evaluate(0.2, 0.3, 0.9) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_displaced_neighbour_wins() {
        let voronoi = pinned(true);
        // Cell (1,0,0) centre is 0.3 away, but cell (2,0,0)'s feature at
        // x = 1.1 is only 0.1 away.
        let value = voronoi.evaluate(1.2, 0.5, 0.5);
        // Winner floors into cell (1,0,0), whose value is 0.5.
        let expected = 0.1 * SQRT_3 - 1.0 + 0.5;
        assert!((value - expected).abs() < 1e-9, "{value} vs {expected}");
    }

    #[test]
    fn test_cell_value_comes_from_winner_floor() {
        let voronoi = pinned(false);
        // The winning feature belongs to cell (2,0,0) but sits in cell
        // (1,0,0); the output uses the latter's value.
        assert_eq!(voronoi.evaluate(1.2, 0.5, 0.5), 0.5);
    }

    #[test]
    fn test_search_reaches_two_cells() {
        let voronoi = pinned(true);
        // Sample in cell 11; cell 13's feature sits at x = 12.0.
        let value = voronoi.evaluate(11.9, 0.5, 0.5);
        let expected = 0.1 * SQRT_3 - 1.0 + 0.5;
        assert!((value - expected).abs() < 1e-9, "{value} vs {expected}");
    }

    #[test]
    fn test_hashed_is_deterministic_and_bounded() {
        let mut voronoi = Voronoi::new();
        voronoi.set_seed(77);
        voronoi.set_frequency(0.25).unwrap();

        for i in 0..500 {
            let t = f64::from(i);
            let (x, y, z) = (t * 0.37 - 50.0, t * 0.11, t * -0.29);
            let value = voronoi.evaluate(x, y, z);
            assert_eq!(value.to_bits(), voronoi.evaluate(x, y, z).to_bits());
            assert!((-1.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn test_piecewise_constant_without_distance() {
        let voronoi = Voronoi::new();
        // Tiny moves almost never cross a cell border.
        let a = voronoi.evaluate(3.3, 4.4, 5.5);
        let b = voronoi.evaluate(3.3 + 1e-9, 4.4, 5.5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_distance_bounded_far_from_origin() {
        let mut voronoi = Voronoi::new();
        voronoi.set_distance_enabled(true);
        for i in 0..200 {
            let t = f64::from(i);
            let value = voronoi.evaluate(3.0e9 + t * 0.37, -8.0e11 + t * 0.53, 1.0e15 * t);
            // Nearest feature is at most ~2 cells away: sqrt(12)·sqrt(3) - 1 + 1.
            assert!(value.abs() <= 6.0 + 1e-9, "value {value} at step {i}");
        }
    }

    #[test]
    fn test_set_config_validates_frequency() {
        let mut voronoi = Voronoi::new();
        let config = VoronoiConfig {
            frequency: -1.0,
            ..VoronoiConfig::default()
        };
        assert!(voronoi.set_config(config).is_err());
        assert_eq!(voronoi.config().frequency, 1.0);
        assert!(Voronoi::with_config(config).is_err());

        let config = VoronoiConfig {
            frequency: 0.5,
            distance_enabled: true,
            ..VoronoiConfig::default()
        };
        assert_eq!(Voronoi::with_config(config).unwrap().config(), &config);
    }
}
