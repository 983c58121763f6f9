//! Texture construction errors.

use thiserror::Error;

/// Errors raised while building a [`Texture`](crate::Texture).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextureError {
    /// The buffer does not hold exactly `width × height` pixels.
    #[error("texture size mismatch: {width}x{height} needs {expected} {unit}, got {actual}")]
    SizeMismatch {
        /// Texture width in pixels.
        width: usize,
        /// Texture height in pixels.
        height: usize,
        /// Required buffer length.
        expected: usize,
        /// Supplied buffer length.
        actual: usize,
        /// Unit of the two lengths.
        unit: &'static str,
    },
}

/// Result alias for texture operations.
pub type TextureResult<T> = Result<T, TextureError>;
