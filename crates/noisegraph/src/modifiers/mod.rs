//! # Modifiers
//!
//! Composite nodes. Each owns its children as boxed [`ScalarField`]s taken at
//! construction, so a modifier can never be evaluated with a missing input.
//!
//! - Input transforms: [`RotateInput`], [`Turbulence`]
//! - Output transforms: [`ClampOutput`], [`BiasOutput`], [`ExponentialOutput`]
//! - Blending: [`Select`]
//!
//! [`ScalarField`]: crate::ScalarField

mod bias;
mod clamp;
mod exponent;
mod rotate;
mod select;
mod turbulence;

pub use bias::BiasOutput;
pub use clamp::ClampOutput;
pub use exponent::ExponentialOutput;
pub use rotate::RotateInput;
pub use select::{Select, SelectConfig};
pub use turbulence::{Turbulence, TurbulenceConfig};
