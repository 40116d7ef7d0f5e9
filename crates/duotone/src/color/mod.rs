//! Color type and hex parsing
//!
//! # Example
//!
//! ```
//! use duotone::Color;
//!
//! let shadow: Color = "#ff3ea5".parse().unwrap();
//! let highlight: Color = "#32ff84".parse().unwrap();
//! assert_eq!(shadow.to_bytes(), [255, 62, 165]);
//! assert_eq!(highlight.to_bytes(), [50, 255, 132]);
//! ```

mod error;
mod rgb;

pub use error::ParseColorError;
pub use rgb::Color;
