//! # Noisegraph Texture
//!
//! Samples one channel of an RGBA bitmap as a [`ScalarField`], so painted
//! masks and height maps can sit inside a noise graph next to procedural
//! generators.
//!
//! ```rust
//! use noisegraph::ScalarField;
//! use noisegraph_texture::{Texture, TextureChannel, Textured};
//!
//! let texture = Texture::from_rgba8(2, 1, &[255, 0, 0, 255, 0, 0, 255, 255]).unwrap();
//! let sampler = Textured::new(texture, TextureChannel::Blue);
//! assert_eq!(sampler.evaluate(1.5, 0.0, 0.0), 1.0);
//! assert_eq!(sampler.evaluate(-0.5, 0.0, 0.0), 0.0);
//! ```
//!
//! [`ScalarField`]: noisegraph::ScalarField

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod error;
pub mod sampler;
pub mod texture;

pub use error::{TextureError, TextureResult};
pub use sampler::{TextureChannel, Textured};
pub use texture::{Rgba, Texture};
