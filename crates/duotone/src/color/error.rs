//! Error type for hex color parsing.

use thiserror::Error;

/// Error type for parsing hex color strings.
///
/// Returned when a hex color string has the wrong number of digits or
/// contains characters that are not hexadecimal digits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 digits after stripping '#')
    #[error("invalid hex color length {0} (expected 3 or 6 digits)")]
    InvalidLength(usize),
    /// A character outside `0-9`, `a-f`, `A-F` was found
    #[error("invalid hex digit in color {0:?}")]
    InvalidHex(String),
}
