//! Texture channel sampling.
//!
//! The absolute input `(x, y)` is floored and wrapped by the texture size, so
//! the bitmap tiles space and mirrors across both axes. `z` is ignored.

use noisegraph::ScalarField;

use crate::texture::{Rgba, Texture};

/// Which part of a pixel becomes the field value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextureChannel {
    /// HSV value of the RGB channels.
    #[default]
    Luminosity,
    /// Red channel.
    Red,
    /// Green channel.
    Green,
    /// Blue channel.
    Blue,
    /// Alpha channel.
    Alpha,
}

impl TextureChannel {
    /// Extracts this channel from `color`.
    #[must_use]
    pub fn extract(self, color: Rgba) -> f64 {
        let value = match self {
            Self::Luminosity => color.value(),
            Self::Red => color.r,
            Self::Green => color.g,
            Self::Blue => color.b,
            Self::Alpha => color.a,
        };
        f64::from(value)
    }
}

/// A texture channel exposed as a scalar field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Textured {
    texture: Texture,
    channel: TextureChannel,
    default_color: Rgba,
}

impl Textured {
    /// Samples `channel` of `texture`. The fallback colour is transparent black.
    #[must_use]
    pub fn new(texture: Texture, channel: TextureChannel) -> Self {
        Self {
            texture,
            channel,
            default_color: Rgba::default(),
        }
    }

    /// Returns the texture.
    #[must_use]
    pub const fn texture(&self) -> &Texture {
        &self.texture
    }

    /// Replaces the texture.
    pub fn set_texture(&mut self, texture: Texture) {
        self.texture = texture;
    }

    /// Returns the sampled channel.
    #[must_use]
    pub const fn channel(&self) -> TextureChannel {
        self.channel
    }

    /// Selects the sampled channel.
    pub fn set_channel(&mut self, channel: TextureChannel) {
        self.channel = channel;
    }

    /// Returns the colour used when the texture is empty.
    #[must_use]
    pub const fn default_color(&self) -> Rgba {
        self.default_color
    }

    /// Sets the colour used when the texture is empty.
    pub fn set_default_color(&mut self, color: Rgba) {
        self.default_color = color;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn wrap(coord: f64, size: usize) -> usize {
        // Saturating cast; NaN lands on 0.
        (coord.abs().floor() as usize) % size
    }
}

impl ScalarField for Textured {
    fn evaluate(&self, x: f64, y: f64, _z: f64) -> f64 {
        let (width, height) = (self.texture.width(), self.texture.height());
        let color = if self.texture.is_empty() {
            self.default_color
        } else {
            self.texture
                .pixel(Self::wrap(x, width), Self::wrap(y, height))
                .unwrap_or(self.default_color)
        };
        self.channel.extract(color)
    }
}
