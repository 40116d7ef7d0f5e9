//! Unified error type for the duotone public API.

use thiserror::Error;

use crate::buffer::BufferError;
use crate::color::ParseColorError;
use crate::tone::ParameterError;

/// Unified error type for the duotone public API.
///
/// Wraps every error the crate can produce so application code can use `?`
/// across buffer construction, color parsing and parameter validation.
///
/// # Example
///
/// ```
/// use duotone::{Color, DuotoneError, PixelBuffer};
///
/// fn load(hex: &str, data: Vec<u8>) -> Result<(Color, PixelBuffer), DuotoneError> {
///     let color: Color = hex.parse()?;
///     let buffer = PixelBuffer::new(1, 1, data)?;
///     Ok((color, buffer))
/// }
///
/// assert!(load("#ff3ea5", vec![0, 0, 0, 255]).is_ok());
/// assert!(matches!(load("#ff3e", vec![0; 4]), Err(DuotoneError::MalformedColor(_))));
/// assert!(matches!(load("#fff", vec![0; 3]), Err(DuotoneError::InvalidDimensions(_))));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DuotoneError {
    /// Zero-sized buffer or data length not equal to width * height * 4
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(#[from] BufferError),
    /// Tone parameter outside its documented domain
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] ParameterError),
    /// Hex color string with wrong length or non-hex characters
    #[error("malformed color: {0}")]
    MalformedColor(#[from] ParseColorError),
}
