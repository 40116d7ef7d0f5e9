//! duotone: luminance-driven two-color recoloring for RGBA buffers
//!
//! Every pixel's Rec.709 luma is tone-corrected (contrast, brightness,
//! gamma) and used as the position on a gradient between a *shadow* and a
//! *highlight* color. The mapped color is then blended back over the
//! original pixel by a *strength* factor. Alpha is always copied through.
//!
//! # Quick Start
//!
//! The [`Duotone`] builder is the primary entry point:
//!
//! ```
//! use duotone::{Duotone, PixelBuffer};
//!
//! let src = PixelBuffer::filled(2, 2, [128, 128, 128, 255]).unwrap();
//! let out = Duotone::brave_pink().apply(&src);
//!
//! assert_eq!(out.width(), 2);
//! assert_eq!(out.height(), 2);
//! ```
//!
//! # Function API
//!
//! [`transform()`] is the same operation as a free function:
//!
//! ```
//! use duotone::{transform, Color, PixelBuffer, ToneParameters};
//!
//! let shadow: Color = "#ff00aa".parse().unwrap();
//! let highlight: Color = "#00ff88".parse().unwrap();
//! let src = PixelBuffer::new(1, 1, vec![0, 0, 0, 255]).unwrap();
//!
//! let out = transform(&src, shadow, highlight, &ToneParameters::default());
//! assert_eq!(out.pixel(0, 0), Some([255, 0, 170, 255]));
//! ```
//!
//! # Pipeline
//!
//! ```text
//! RGBA8 pixel
//!     |
//!     v
//! luma = 0.2126 r + 0.7152 g + 0.0722 b        (normalized channels)
//!     |
//!     v
//! contrast   cf (t - 0.5) + 0.5
//! brightness + brightness / 100, clamp 0..=1
//! gamma      t^max(gamma, 0.01), clamp 0..=1   -> tg
//!     |
//!     v
//! mapped = shadow + (highlight - shadow) tg    (0..=255 per channel)
//! out    = src + (mapped - src) strength
//!     |
//!     v
//! round, clamp 0..=255; alpha copied
//! ```
//!
//! # Parameter Policy
//!
//! The transform never fails: a [`PixelBuffer`] is validated when it is
//! built, and tone parameters outside their documented ranges are clamped.
//! [`ToneParameters::validate()`] is available for callers that want to
//! reject bad input instead.
//!
//! # Parallelism
//!
//! With the default `parallel` feature, buffers of at least
//! [`PARALLEL_THRESHOLD`] pixels are processed row-wise on the rayon pool.
//! The output is identical either way.

pub mod api;
pub mod buffer;
pub mod color;
pub mod tone;
pub mod transform;


pub use api::{Duotone, DuotoneError, BRAVE_PINK, HERO_GREEN};
pub use buffer::{BufferError, PixelBuffer};
pub use color::{Color, ParseColorError};
pub use tone::{contrast_factor, luma, tone_value, ParameterError, ToneCurve, ToneParameters};
pub use transform::{map_pixel, transform, PARALLEL_THRESHOLD};
