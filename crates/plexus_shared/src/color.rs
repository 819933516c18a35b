//! Color palette for the ambient background.
//!
//! Dark slate backdrop, translucent teal particles. The palette is fixed -
//! the field never changes hue, only alpha.

use serde::{Deserialize, Serialize};

/// RGBA color, components in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    /// Solid black.
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    /// Teal accent (the site's signature hue, #5EEAD4).
    pub const TEAL: Self = Self::rgba(94.0 / 255.0, 234.0 / 255.0, 212.0 / 255.0, 1.0);
    /// Particle fill: teal at 40% alpha.
    pub const PARTICLE: Self = Self::TEAL.with_alpha(0.4);
    /// Dark slate backdrop behind the field.
    pub const BACKDROP: Self = Self::rgba(0.008, 0.024, 0.09, 1.0);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from RGB values (0-1) with full alpha.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Returns the same color with a different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// Converts to 8-bit RGBA (for raster backends).
    #[must_use]
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_alpha_keeps_hue() {
        let faded = Color::TEAL.with_alpha(0.35);
        assert_eq!(faded.r, Color::TEAL.r);
        assert_eq!(faded.g, Color::TEAL.g);
        assert_eq!(faded.b, Color::TEAL.b);
        assert!((faded.a - 0.35).abs() < f32::EPSILON);
    }

    #[test]
    fn test_rgba8_quantization() {
        assert_eq!(Color::WHITE.to_rgba8(), [255, 255, 255, 255]);
        assert_eq!(Color::TEAL.to_rgba8(), [94, 234, 212, 255]);
    }
}
