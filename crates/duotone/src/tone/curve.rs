//! Luma and tone correction.
//!
//! The tone curve turns a pixel's Rec.709 luma into the gradient position
//! `tg` in 0.0..=1.0:
//!
//! ```text
//! t   = 0.2126 r + 0.7152 g + 0.0722 b          (r, g, b in 0..=1)
//! t'  = cf (t - 0.5) + 0.5                      cf = 259 (c + 255) / (255 (259 - c))
//! t'' = clamp(t' + brightness / 100, 0, 1)
//! tg  = clamp(t''^max(gamma, 0.01), 0, 1)
//! ```

use super::params::{ToneParameters, MIN_GAMMA};

/// Rec.709 red weight.
pub const LUMA_R: f32 = 0.2126;
/// Rec.709 green weight.
pub const LUMA_G: f32 = 0.7152;
/// Rec.709 blue weight.
pub const LUMA_B: f32 = 0.0722;

/// Rec.709 luma of an 8-bit pixel, in 0.0..=1.0.
///
/// # Example
/// ```
/// use duotone::luma;
/// assert_eq!(luma(0, 0, 0), 0.0);
/// assert!((luma(255, 255, 255) - 1.0).abs() < 1e-6);
/// ```
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> f32 {
    LUMA_R * (r as f32 / 255.0) + LUMA_G * (g as f32 / 255.0) + LUMA_B * (b as f32 / 255.0)
}

/// Contrast factor for a contrast value in -100..=100.
///
/// Equals 1.0 at contrast 0. The formula has a pole at 259, which the
/// documented range never reaches.
#[inline]
pub fn contrast_factor(contrast: f32) -> f32 {
    (259.0 * (contrast + 255.0)) / (255.0 * (259.0 - contrast))
}

/// Precomputed tone correction for one parameter set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneCurve {
    contrast_factor: f32,
    brightness_offset: f32,
    gamma: f32,
}

impl ToneCurve {
    /// Build the curve from (clamped) parameters.
    pub fn new(params: &ToneParameters) -> Self {
        let params = params.clamped();
        Self {
            contrast_factor: contrast_factor(params.contrast),
            brightness_offset: params.brightness / 100.0,
            gamma: params.gamma.max(MIN_GAMMA),
        }
    }

    /// Map a luma value to the gradient position `tg`.
    #[inline]
    pub fn apply(&self, luma: f32) -> f32 {
        let t = self.contrast_factor * (luma - 0.5) + 0.5;
        let t = (t + self.brightness_offset).clamp(0.0, 1.0);
        t.powf(self.gamma).clamp(0.0, 1.0)
    }
}

/// Gradient position `tg` for a luma value under `params`.
///
/// Convenience form of [`ToneCurve::apply`] for single values; the
/// transform builds the curve once per buffer instead.
pub fn tone_value(luma: f32, params: &ToneParameters) -> f32 {
    ToneCurve::new(params).apply(luma)
}
