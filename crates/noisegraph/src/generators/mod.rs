//! # Generators
//!
//! Leaf nodes of a noise graph. Each owns its own frequency, seed and (for the
//! fractal ones) octave configuration and calls into the kernel directly.
//!
//! | Node | Character |
//! |------|-----------|
//! | [`Perlin`] | Octave-summed gradient noise |
//! | [`Billow`] | Puffy, cloud-like folds (`2|n| - 1` per octave) |
//! | [`RidgedMultifractal`] | Sharp ridges, weighted octave feedback |
//! | [`Voronoi`] | Cellular regions around displaced feature points |
//! | [`Cylinders`] | Concentric rings around the y axis |
//! | [`Constant`] | Same value everywhere |

mod billow;
mod constant;
mod cylinders;
mod perlin;
mod ridged;
mod voronoi;

pub use billow::Billow;
pub use constant::Constant;
pub use cylinders::Cylinders;
pub use perlin::Perlin;
pub use ridged::RidgedMultifractal;
pub use voronoi::{CellValues, HashedCellValues, Voronoi, VoronoiConfig};
