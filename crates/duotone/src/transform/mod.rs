//! The duotone pixel transform.
//!
//! Every pixel is processed independently:
//!
//! 1. Rec.709 luma of the normalized source channels
//! 2. Contrast, brightness and gamma correction ([`ToneCurve`]) giving `tg`
//! 3. Linear interpolation from `shadow` to `highlight` by `tg`, in 0..=255
//! 4. Blend with the source channel by `strength`
//! 5. Round to nearest, clamp to 0..=255; alpha is copied unchanged
//!
//! Transparent pixels are recolored like any other; alpha is never used
//! as a mask.

mod parallel;

pub use parallel::PARALLEL_THRESHOLD;

use crate::buffer::{PixelBuffer, CHANNELS};
use crate::color::Color;
use crate::tone::{luma, ToneCurve, ToneParameters};

/// Recolor `src` onto the gradient from `shadow` to `highlight`.
///
/// Returns a new buffer with the same dimensions; `src` is not modified.
/// Parameters outside their documented ranges are clamped
/// (see [`ToneParameters::clamped`]).
///
/// # Example
///
/// ```
/// use duotone::{transform, Color, PixelBuffer, ToneParameters};
///
/// let src = PixelBuffer::new(2, 1, vec![0, 0, 0, 255, 255, 255, 255, 128]).unwrap();
/// let shadow = Color::new(255, 0, 170);
/// let highlight = Color::new(50, 255, 136);
///
/// let out = transform(&src, shadow, highlight, &ToneParameters::default());
///
/// assert_eq!(out.pixel(0, 0), Some([255, 0, 170, 255]));
/// assert_eq!(out.pixel(1, 0), Some([50, 255, 136, 128]));
/// ```
pub fn transform(
    src: &PixelBuffer,
    shadow: Color,
    highlight: Color,
    params: &ToneParameters,
) -> PixelBuffer {
    let mapper = PixelMapper::new(shadow, highlight, params);
    let row_len = src.width() as usize * CHANNELS;
    let mut out = vec![0u8; src.data().len()];

    parallel::for_each_row(src.data(), &mut out, row_len, |src_row, dst_row| {
        mapper.map_row(src_row, dst_row);
    });

    PixelBuffer::from_raw_parts(src.width(), src.height(), out)
}

/// Recolor a single RGBA pixel.
///
/// Same result as [`transform`] on a one-pixel buffer.
pub fn map_pixel(
    rgba: [u8; 4],
    shadow: Color,
    highlight: Color,
    params: &ToneParameters,
) -> [u8; 4] {
    PixelMapper::new(shadow, highlight, params).map(rgba)
}

/// Per-buffer constants for the pixel loop.
struct PixelMapper {
    curve: ToneCurve,
    shadow: [f32; 3],
    delta: [f32; 3],
    strength: f32,
}

impl PixelMapper {
    fn new(shadow: Color, highlight: Color, params: &ToneParameters) -> Self {
        let params = params.clamped();
        let shadow = shadow.to_f32();
        let highlight = highlight.to_f32();
        Self {
            curve: ToneCurve::new(&params),
            shadow,
            delta: [
                highlight[0] - shadow[0],
                highlight[1] - shadow[1],
                highlight[2] - shadow[2],
            ],
            strength: params.strength,
        }
    }

    #[inline]
    fn map(&self, [r, g, b, a]: [u8; 4]) -> [u8; 4] {
        let tg = self.curve.apply(luma(r, g, b));
        [
            self.channel(0, r, tg),
            self.channel(1, g, tg),
            self.channel(2, b, tg),
            a,
        ]
    }

    #[inline]
    fn channel(&self, c: usize, src: u8, tg: f32) -> u8 {
        let mapped = self.shadow[c] + self.delta[c] * tg;
        let src = src as f32;
        let out = src + (mapped - src) * self.strength;
        out.round().clamp(0.0, 255.0) as u8
    }

    fn map_row(&self, src_row: &[u8], dst_row: &mut [u8]) {
        for (s, d) in src_row
            .chunks_exact(CHANNELS)
            .zip(dst_row.chunks_exact_mut(CHANNELS))
        {
            d.copy_from_slice(&self.map([s[0], s[1], s[2], s[3]]));
        }
    }
}
