//! # RGBA Pixel Storage
//!
//! Pixels are stored row-major, `y * width + x`, as `f32` channels in
//! `[0, 1]`. [`Rgba`] is `Pod`, so raw float buffers can be read without
//! per-channel parsing.

use bytemuck::{Pod, Zeroable};

use crate::error::{TextureError, TextureResult};

/// Size of one [`Rgba`] pixel in a raw float buffer.
const RGBA32F_STRIDE: usize = std::mem::size_of::<Rgba>();

/// A linear RGBA colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Rgba {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
    /// Alpha.
    pub a: f32,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Creates a colour from its channels.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Converts 8-bit channels to `[0, 1]`.
    #[must_use]
    pub fn from_rgba8([r, g, b, a]: [u8; 4]) -> Self {
        let unit = |c: u8| f32::from(c) / 255.0;
        Self::new(unit(r), unit(g), unit(b), unit(a))
    }

    /// HSV value: the largest of the three colour channels.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.r.max(self.g).max(self.b)
    }
}

/// A `width × height` RGBA bitmap.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Texture {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl Texture {
    /// Builds a texture from row-major pixels.
    ///
    /// # Errors
    ///
    /// Fails if `pixels.len() != width * height`.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Rgba>) -> TextureResult<Self> {
        check_len(width, height, 1, pixels.len(), "pixels")?;
        tracing::debug!(width, height, "texture created");
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Builds a texture from 8-bit RGBA bytes.
    ///
    /// # Errors
    ///
    /// Fails if `bytes.len() != width * height * 4`.
    pub fn from_rgba8(width: usize, height: usize, bytes: &[u8]) -> TextureResult<Self> {
        check_len(width, height, 4, bytes.len(), "bytes")?;
        let pixels = bytes
            .chunks_exact(4)
            .map(|px| Rgba::from_rgba8([px[0], px[1], px[2], px[3]]))
            .collect();
        Self::from_pixels(width, height, pixels)
    }

    /// Builds a texture from native-endian `f32` RGBA bytes.
    ///
    /// The buffer need not be aligned.
    ///
    /// # Errors
    ///
    /// Fails if `bytes.len() != width * height * 16`.
    pub fn from_rgba32f(width: usize, height: usize, bytes: &[u8]) -> TextureResult<Self> {
        check_len(width, height, RGBA32F_STRIDE, bytes.len(), "bytes")?;
        let pixels = bytes
            .chunks_exact(RGBA32F_STRIDE)
            .map(bytemuck::pod_read_unaligned::<Rgba>)
            .collect();
        Self::from_pixels(width, height, pixels)
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// True when the texture holds no pixels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the bitmap.
    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    /// Raw pixel storage as bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

fn check_len(
    width: usize,
    height: usize,
    stride: usize,
    actual: usize,
    unit: &'static str,
) -> TextureResult<()> {
    let expected = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(stride));
    if expected == Some(actual) {
        Ok(())
    } else {
        Err(TextureError::SizeMismatch {
            width,
            height,
            expected: expected.unwrap_or(usize::MAX),
            actual,
            unit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_is_sixteen_bytes() {
        assert_eq!(RGBA32F_STRIDE, 16);
    }

    #[test]
    fn test_value_is_max_channel() {
        assert_eq!(Rgba::new(0.2, 0.7, 0.4, 0.0).value(), 0.7);
        assert_eq!(Rgba::BLACK.value(), 0.0);
    }

    #[test]
    fn test_from_rgba8_scales_channels() {
        let texture = Texture::from_rgba8(1, 1, &[255, 0, 51, 255]).unwrap();
        let px = texture.pixel(0, 0).unwrap();
        assert_eq!(px.r, 1.0);
        assert_eq!(px.g, 0.0);
        assert!((px.b - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_row_major_layout() {
        let pixels = (0..6u8)
            .map(|i| Rgba::new(f32::from(i), 0.0, 0.0, 1.0))
            .collect();
        let texture = Texture::from_pixels(3, 2, pixels).unwrap();
        assert_eq!(texture.pixel(2, 0).unwrap().r, 2.0);
        assert_eq!(texture.pixel(0, 1).unwrap().r, 3.0);
        assert_eq!(texture.pixel(3, 0), None);
    }

    #[test]
    fn test_rgba32f_reads_unaligned_buffer() {
        let source = [Rgba::new(0.25, 0.5, 0.75, 1.0), Rgba::WHITE];
        let mut bytes = vec![0u8];
        bytes.extend_from_slice(bytemuck::cast_slice(&source));

        let texture = Texture::from_rgba32f(2, 1, &bytes[1..]).unwrap();
        assert_eq!(texture.pixel(0, 0), Some(source[0]));
        assert_eq!(texture.as_bytes(), &bytes[1..]);
    }

    #[test]
    fn test_size_mismatch() {
        let err = Texture::from_rgba8(2, 2, &[0; 15]).unwrap_err();
        assert_eq!(
            err,
            TextureError::SizeMismatch {
                width: 2,
                height: 2,
                expected: 16,
                actual: 15,
                unit: "bytes",
            }
        );
        assert!(Texture::from_pixels(usize::MAX, 2, Vec::new()).is_err());
    }

    #[test]
    fn test_empty_texture() {
        let texture = Texture::from_pixels(0, 5, Vec::new()).unwrap();
        assert!(texture.is_empty());
        assert_eq!(texture.pixel(0, 0), None);
    }
}
