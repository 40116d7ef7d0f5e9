//! Working-buffer size cap.
//!
//! Large photos are shrunk so their longest side is at most the configured
//! maximum before any recoloring, which bounds the cost of every recompute.

use duotone::{BufferError, PixelBuffer};

/// Dimensions that fit within `max_dim` on the longest side, keeping the
/// aspect ratio. Images already within the limit are returned unchanged,
/// and neither side drops below 1. A `max_dim` of 0 means no cap.
pub fn fit_dimensions(width: u32, height: u32, max_dim: u32) -> (u32, u32) {
    let longest = width.max(height);
    if max_dim == 0 || longest <= max_dim || longest == 0 {
        return (width, height);
    }

    let scale = max_dim as f64 / longest as f64;
    let w = ((width as f64 * scale).round() as u32).max(1);
    let h = ((height as f64 * scale).round() as u32).max(1);
    (w, h)
}

/// Shrink `src` to `width` x `height` with an area-averaging box filter.
///
/// Every destination pixel averages the block of source pixels it covers,
/// with each channel (alpha included) averaged independently. Target
/// dimensions larger than the source are clamped to the source size.
pub fn downscale(src: &PixelBuffer, width: u32, height: u32) -> Result<PixelBuffer, BufferError> {
    let (sw, sh) = (src.width() as u64, src.height() as u64);
    let dw = (width as u64).min(sw);
    let dh = (height as u64).min(sh);
    if dw == sw && dh == sh {
        return Ok(src.clone());
    }

    let data = src.data();
    let stride = sw as usize * 4;

    PixelBuffer::from_fn(dw as u32, dh as u32, |dx, dy| {
        let x0 = dx as u64 * sw / dw;
        let x1 = ((dx as u64 + 1) * sw / dw).max(x0 + 1);
        let y0 = dy as u64 * sh / dh;
        let y1 = ((dy as u64 + 1) * sh / dh).max(y0 + 1);

        let mut sum = [0u64; 4];
        for y in y0..y1 {
            let row = &data[y as usize * stride..];
            for x in x0..x1 {
                let i = x as usize * 4;
                for c in 0..4 {
                    sum[c] += row[i + c] as u64;
                }
            }
        }

        let count = (x1 - x0) * (y1 - y0);
        let avg = |c: usize| ((sum[c] + count / 2) / count) as u8;
        [avg(0), avg(1), avg(2), avg(3)]
    })
}

/// Fit `src` within `max_dim`, downscaling only when needed.
pub fn fit_to_max(src: &PixelBuffer, max_dim: u32) -> Result<PixelBuffer, BufferError> {
    let (w, h) = fit_dimensions(src.width(), src.height(), max_dim);
    if (w, h) == (src.width(), src.height()) {
        return Ok(src.clone());
    }
    tracing::debug!(
        from_width = src.width(),
        from_height = src.height(),
        to_width = w,
        to_height = h,
        "Downscaling working buffer"
    );
    downscale(src, w, h)
}
