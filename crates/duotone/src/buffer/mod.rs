//! Pixel buffers passed into and out of the transform.
//!
//! [`PixelBuffer`] holds interleaved RGBA8 bytes plus dimensions. Hosts
//! decode images into this form themselves; the crate does no format
//! decoding or encoding.

mod pixel_buffer;

pub use pixel_buffer::{BufferError, PixelBuffer, CHANNELS};
