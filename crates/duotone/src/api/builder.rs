//! Duotone builder -- the ergonomic entry point for the crate.
//!
//! [`Duotone`] bundles the two gradient colors with a [`ToneParameters`]
//! set behind a fluent builder and applies them to pixel buffers.

use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::tone::ToneParameters;
use crate::transform::transform;

/// Shadow pink of the "Brave Pink" look (`#ff3ea5`).
pub const BRAVE_PINK: Color = Color::new(0xff, 0x3e, 0xa5);
/// Highlight green of the "Brave Pink" look (`#32ff84`).
pub const HERO_GREEN: Color = Color::new(0x32, 0xff, 0x84);

/// High-level duotone builder.
///
/// # Design
///
/// - Constructor requires both gradient colors (no invalid states)
/// - Configuration methods consume and return `self`; the type is `Copy`
///   so hosts can keep one around and derive variants from it
/// - [`apply()`](Self::apply) takes `&self` and is reusable across buffers
///
/// # Example
///
/// ```
/// use duotone::{Color, Duotone, PixelBuffer};
///
/// let duotone = Duotone::new(Color::new(0, 0, 80), Color::new(255, 220, 0))
///     .strength(0.75)
///     .contrast(20.0);
///
/// let src = PixelBuffer::filled(4, 4, [128, 128, 128, 255]).unwrap();
/// let out = duotone.apply(&src);
///
/// assert_eq!(out.width(), 4);
/// assert_eq!(out.height(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Duotone {
    shadow: Color,
    highlight: Color,
    params: ToneParameters,
}

impl Duotone {
    /// Create a duotone with identity tone parameters.
    pub fn new(shadow: Color, highlight: Color) -> Self {
        Self {
            shadow,
            highlight,
            params: ToneParameters::default(),
        }
    }

    /// Pink shadows, green highlights, 90% strength, contrast 10.
    pub fn brave_pink() -> Self {
        Self::new(BRAVE_PINK, HERO_GREEN).params(ToneParameters::brave_pink())
    }

    /// Set the shadow color.
    #[inline]
    pub fn shadow(mut self, color: Color) -> Self {
        self.shadow = color;
        self
    }

    /// Set the highlight color.
    #[inline]
    pub fn highlight(mut self, color: Color) -> Self {
        self.highlight = color;
        self
    }

    /// Replace all tone parameters at once.
    #[inline]
    pub fn params(mut self, params: ToneParameters) -> Self {
        self.params = params;
        self
    }

    /// Set blend strength (0.0..=1.0).
    #[inline]
    pub fn strength(mut self, strength: f32) -> Self {
        self.params = self.params.strength(strength);
        self
    }

    /// Set gamma exponent.
    #[inline]
    pub fn gamma(mut self, gamma: f32) -> Self {
        self.params = self.params.gamma(gamma);
        self
    }

    /// Set contrast (-100..=100).
    #[inline]
    pub fn contrast(mut self, contrast: f32) -> Self {
        self.params = self.params.contrast(contrast);
        self
    }

    /// Set brightness (-100..=100).
    #[inline]
    pub fn brightness(mut self, brightness: f32) -> Self {
        self.params = self.params.brightness(brightness);
        self
    }

    /// Exchange the shadow and highlight colors.
    #[inline]
    pub fn swap(mut self) -> Self {
        std::mem::swap(&mut self.shadow, &mut self.highlight);
        self
    }

    /// The current shadow color.
    #[inline]
    pub fn shadow_color(&self) -> Color {
        self.shadow
    }

    /// The current highlight color.
    #[inline]
    pub fn highlight_color(&self) -> Color {
        self.highlight
    }

    /// The current tone parameters.
    #[inline]
    pub fn tone(&self) -> &ToneParameters {
        &self.params
    }

    /// Recolor `src`, returning a new buffer of the same size.
    pub fn apply(&self, src: &PixelBuffer) -> PixelBuffer {
        transform(src, self.shadow, self.highlight, &self.params)
    }
}

impl Default for Duotone {
    fn default() -> Self {
        Self::brave_pink()
    }
}
