//! Validated RGBA8 pixel buffer.

use thiserror::Error;

/// Bytes per RGBA8 pixel.
pub const CHANNELS: usize = 4;

/// Error type for pixel buffer construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// Width or height is zero
    #[error("buffer dimensions must be non-zero (got {width}x{height})")]
    ZeroDimension { width: u32, height: u32 },
    /// Data length does not equal width * height * 4
    #[error("buffer length {actual} does not match {width}x{height} RGBA ({expected} bytes)")]
    LengthMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    /// width * height * 4 does not fit in memory addressing
    #[error("buffer dimensions {width}x{height} overflow")]
    Overflow { width: u32, height: u32 },
}

/// An immutable RGBA8 image, row-major with a top-left origin.
///
/// A `PixelBuffer` that exists is always valid: both dimensions are
/// positive and the data holds exactly `width * height * 4` bytes. The
/// transform never mutates a buffer; it always returns a new one.
///
/// # Example
///
/// ```
/// use duotone::PixelBuffer;
///
/// let data = vec![
///     0, 0, 0, 255,       255, 255, 255, 255,
///     128, 128, 128, 255, 64, 200, 30, 255,
/// ];
/// let buffer = PixelBuffer::new(2, 2, data).unwrap();
///
/// assert_eq!(buffer.width(), 2);
/// assert_eq!(buffer.height(), 2);
/// assert_eq!(buffer.pixel(1, 1), Some([64, 200, 30, 255]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer from interleaved RGBA8 bytes.
    ///
    /// Returns [`BufferError`] when a dimension is zero or when `data.len()`
    /// is not `width * height * 4`.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, BufferError> {
        let expected = byte_len(width, height)?;
        if data.len() != expected {
            return Err(BufferError::LengthMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a buffer with every pixel set to `rgba`.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self, BufferError> {
        let len = byte_len(width, height)?;
        let data = rgba.iter().copied().cycle().take(len).collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a buffer by evaluating `f(x, y)` for every pixel in row-major order.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self, BufferError>
    where
        F: FnMut(u32, u32) -> [u8; 4],
    {
        let mut data = Vec::with_capacity(byte_len(width, height)?);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Wrap bytes produced by the transform, whose length is correct by construction.
    pub(crate) fn from_raw_parts(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(
            data.len(),
            width as usize * height as usize * CHANNELS,
            "data length ({}) must match {}x{} RGBA",
            data.len(),
            width,
            height,
        );
        Self {
            width,
            height,
            data,
        }
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.data.len() / CHANNELS
    }

    /// Raw interleaved RGBA bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The pixel at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * CHANNELS;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Iterate pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 4]> + '_ {
        self.data
            .chunks_exact(CHANNELS)
            .map(|p| [p[0], p[1], p[2], p[3]])
    }

    /// Consume the buffer, returning its bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

fn byte_len(width: u32, height: u32) -> Result<usize, BufferError> {
    if width == 0 || height == 0 {
        return Err(BufferError::ZeroDimension { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or(BufferError::Overflow { width, height })
}
