//! # Select
//!
//! Chooses between two sources based on the value of a control field.
//!
//! ```text
//!   control:  ──── lower-f ──── lower+f ──── upper-f ──── upper+f ────
//!   output:   source1 │ blend 1→2 │   source2   │ blend 2→1 │ source1
//! ```
//!
//! With zero edge falloff the step is hard and both bounds are inclusive:
//! a control value in `[lower, upper]` selects source 2. With a positive
//! falloff the two transitions are smoothed with a cubic S-curve. The falloff
//! is clamped to half the bound interval so the two blend bands never
//! overlap.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{validate_bounds, NoiseResult};
use crate::field::ScalarField;
use crate::math::{lerp, s_curve3};

/// Select bounds and edge falloff.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectConfig {
    /// Lower bound of the source-2 interval.
    pub lower_bound: f64,
    /// Upper bound of the source-2 interval.
    pub upper_bound: f64,
    /// Half-width of each blend band.
    pub edge_falloff: f64,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            lower_bound: -1.0,
            upper_bound: 1.0,
            edge_falloff: 0.0,
        }
    }
}

/// Threshold selection between two sources.
pub struct Select {
    control: Box<dyn ScalarField>,
    source1: Box<dyn ScalarField>,
    source2: Box<dyn ScalarField>,
    lower: f64,
    upper: f64,
    edge_falloff: f64,
}

impl Select {
    /// Creates a selector with bounds `[-1, 1]` and no falloff.
    pub fn new(
        control: impl ScalarField + 'static,
        source1: impl ScalarField + 'static,
        source2: impl ScalarField + 'static,
    ) -> Self {
        let defaults = SelectConfig::default();
        Self {
            control: Box::new(control),
            source1: Box::new(source1),
            source2: Box::new(source2),
            lower: defaults.lower_bound,
            upper: defaults.upper_bound,
            edge_falloff: defaults.edge_falloff,
        }
    }

    /// Creates a selector from a configuration.
    ///
    /// # Errors
    ///
    /// Fails if `lower_bound >= upper_bound`.
    pub fn with_config(
        control: impl ScalarField + 'static,
        source1: impl ScalarField + 'static,
        source2: impl ScalarField + 'static,
        config: SelectConfig,
    ) -> NoiseResult<Self> {
        let mut select = Self::new(control, source1, source2);
        select.set_bounds(config.lower_bound, config.upper_bound)?;
        select.set_edge_falloff(config.edge_falloff);
        Ok(select)
    }

    /// Returns the current configuration (falloff as clamped).
    #[must_use]
    pub const fn config(&self) -> SelectConfig {
        SelectConfig {
            lower_bound: self.lower,
            upper_bound: self.upper,
            edge_falloff: self.edge_falloff,
        }
    }

    /// Sets the source-2 interval and re-clamps the current falloff to fit.
    ///
    /// # Errors
    ///
    /// Fails if `lower >= upper`; the previous bounds stay in place.
    pub fn set_bounds(&mut self, lower: f64, upper: f64) -> NoiseResult<()> {
        (self.lower, self.upper) = validate_bounds(lower, upper)?;
        self.set_edge_falloff(self.edge_falloff);
        Ok(())
    }

    /// Sets the blend band half-width, clamped to `[0, (upper - lower) / 2]`.
    ///
    /// Negative and non-finite values disable the blend.
    pub fn set_edge_falloff(&mut self, edge_falloff: f64) {
        let max_falloff = (self.upper - self.lower) / 2.0;
        self.edge_falloff = if !edge_falloff.is_finite() || edge_falloff < 0.0 {
            tracing::warn!(edge_falloff, "invalid select edge falloff replaced by 0");
            0.0
        } else if edge_falloff > max_falloff {
            tracing::warn!(
                edge_falloff,
                max_falloff,
                "select edge falloff clamped to half the bound interval"
            );
            max_falloff
        } else {
            edge_falloff
        };
    }

    /// Blends `from` into `to` across the band `[start, end)`.
    #[inline]
    fn blend(
        control: f64,
        start: f64,
        end: f64,
        from: &dyn ScalarField,
        to: &dyn ScalarField,
        (x, y, z): (f64, f64, f64),
    ) -> f64 {
        let alpha = s_curve3((control - start) / (end - start));
        lerp(from.evaluate(x, y, z), to.evaluate(x, y, z), alpha)
    }
}

impl fmt::Debug for Select {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Select")
            .field("config", &self.config())
            .finish_non_exhaustive()
    }
}

impl ScalarField for Select {
    fn evaluate(&self, x: f64, y: f64, z: f64) -> f64 {
        let control = self.control.evaluate(x, y, z);
        let falloff = self.edge_falloff;
        let point = (x, y, z);

        if falloff > 0.0 {
            if control < self.lower - falloff {
                self.source1.evaluate(x, y, z)
            } else if control < self.lower + falloff {
                Self::blend(
                    control,
                    self.lower - falloff,
                    self.lower + falloff,
                    &*self.source1,
                    &*self.source2,
                    point,
                )
            } else if control < self.upper - falloff {
                self.source2.evaluate(x, y, z)
            } else if control < self.upper + falloff {
                Self::blend(
                    control,
                    self.upper - falloff,
                    self.upper + falloff,
                    &*self.source2,
                    &*self.source1,
                    point,
                )
            } else {
                self.source1.evaluate(x, y, z)
            }
        } else if control < self.lower || control > self.upper {
            self.source1.evaluate(x, y, z)
        } else {
            self.source2.evaluate(x, y, z)
        }
    }
}
