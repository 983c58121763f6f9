//! # noisegraph
//!
//! Deterministic coherent noise for procedural content: terrain heightmaps,
//! texture masks, density fields.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: a node's output is a pure function of `(x, y, z)` and
//!    its configuration. Call order never matters.
//! 2. **Composable**: every node implements [`ScalarField`]; modifiers own
//!    their children as opaque `ScalarField`s.
//! 3. **Fail at configuration time**: setters validate, evaluation is total.
//! 4. **Thread-safe sampling**: a built graph is `Send + Sync` and evaluation
//!    takes `&self`, so rows of a heightmap can be sampled in parallel.
//!
//! ## Core Components
//!
//! - [`math`]: interpolation and S-curves
//! - [`kernel`]: lattice gradient and value noise
//! - [`generators`]: Perlin, Billow, Ridged-Multifractal, Voronoi, Cylinders
//! - [`modifiers`]: rotation, turbulence, select, clamp, bias, exponent
//!
//! ## Example
//!
//! ```rust
//! use noisegraph::{ClampOutput, Perlin, ScalarField, Turbulence};
//!
//! let mut base = Perlin::new();
//! base.set_octave_count(4).unwrap();
//!
//! let mut warped = Turbulence::new(base);
//! warped.set_power(0.25);
//!
//! let height = ClampOutput::new(warped);
//! let value = height.evaluate(10.5, 0.0, -3.25);
//! assert!((-1.0..=1.0).contains(&value));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod constants;
pub mod error;
pub mod field;
pub mod generators;
pub mod kernel;
pub mod math;
pub mod modifiers;

pub use config::{FractalConfig, NoiseQuality};
pub use error::{NoiseError, NoiseResult};
pub use field::ScalarField;
pub use generators::{
    Billow, CellValues, Constant, Cylinders, HashedCellValues, Perlin, RidgedMultifractal,
    Voronoi, VoronoiConfig,
};
pub use modifiers::{
    BiasOutput, ClampOutput, ExponentialOutput, RotateInput, Select, SelectConfig, Turbulence,
    TurbulenceConfig,
};
