//! Assertion helpers for tests.

use duotone::PixelBuffer;
use pretty_assertions::assert_eq;

/// Assert two buffers have the same dimensions
pub fn assert_same_size(actual: &PixelBuffer, expected: &PixelBuffer) {
    assert_eq!(
        (actual.width(), actual.height()),
        (expected.width(), expected.height()),
        "Buffer dimensions differ"
    );
}

/// Assert the alpha channel of `actual` equals that of `source`, pixel for pixel
pub fn assert_alpha_preserved(actual: &PixelBuffer, source: &PixelBuffer) {
    assert_same_size(actual, source);
    let actual_alpha: Vec<u8> = actual.pixels().map(|p| p[3]).collect();
    let source_alpha: Vec<u8> = source.pixels().map(|p| p[3]).collect();
    assert_eq!(actual_alpha, source_alpha, "Alpha channel changed");
}

/// Assert a pixel is within `tolerance` of `expected` on every channel
pub fn assert_pixel_near(actual: [u8; 4], expected: [u8; 4], tolerance: u8) {
    let close = actual
        .iter()
        .zip(expected.iter())
        .all(|(a, e)| a.abs_diff(*e) <= tolerance);
    assert!(
        close,
        "Pixel {actual:?} not within ±{tolerance} of {expected:?}"
    );
}
