//! Surface material for ray casting.
//!
//! A material is a base color plus an optional Phong specular exponent.
//! Light intensity scales the base color; alpha is never touched.

use image::Rgba;

/// 8-bit RGBA color, the unit written to the framebuffer.
pub type Color = Rgba<u8>;

/// Specular exponent meaning "no highlight".
pub const NO_SPECULAR: f32 = -1.0;

/// Surface appearance of a sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Unlit surface color (full albedo).
    pub color: Color,

    /// Specular exponent controlling highlight sharpness.
    ///
    /// `None` means the surface has no specular highlight at all.
    pub specular: Option<f32>,
}

impl Material {
    /// Matte material with no specular highlight.
    pub fn matte(color: Color) -> Self {
        Self { color, specular: None }
    }

    /// Shiny material; larger exponents give smaller, tighter highlights.
    ///
    /// An exponent of [`NO_SPECULAR`] gives a matte material. Any other
    /// exponent must be positive.
    pub fn shiny(color: Color, specular: f32) -> Self {
        Self { color, specular: specular_exponent(specular) }
    }

    /// Scale the color channels by an accumulated light intensity.
    ///
    /// The factor is capped at 1.0 so a channel never exceeds its base value.
    /// Intensities are sums of non-negative terms, so no lower clamp is needed.
    pub fn shade(&self, intensity: f32) -> Color {
        let factor = intensity.min(1.0);
        let [r, g, b, a] = self.color.0;
        let scale = |channel: u8| (channel as f32 * factor) as u8;
        Rgba([scale(r), scale(g), scale(b), a])
    }
}

/// Map a raw exponent to the stored form, `None` for [`NO_SPECULAR`].
pub fn specular_exponent(specular: f32) -> Option<f32> {
    if specular == NO_SPECULAR {
        return None;
    }
    debug_assert!(specular > 0.0, "specular exponent must be positive or -1, got {}", specular);
    Some(specular)
}
