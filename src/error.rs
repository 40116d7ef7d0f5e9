use std::path::PathBuf;

use duotone::{BufferError, DuotoneError, ParameterError, ParseColorError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("Duotone error: {0}")]
    Duotone(#[from] DuotoneError),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Raw image {path} has {actual} bytes, expected {expected} for {width}x{height} RGBA")]
    RawLength {
        path: PathBuf,
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid size {0:?} (expected WIDTHxHEIGHT)")]
    InvalidSize(String),

    #[error("Invalid {option} color {value:?}: {source}")]
    InvalidColor {
        option: &'static str,
        value: String,
        source: ParseColorError,
    },

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Config error in {path}: {source}")]
    Config {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

impl From<ParseColorError> for HostError {
    fn from(e: ParseColorError) -> Self {
        HostError::Duotone(e.into())
    }
}

impl From<BufferError> for HostError {
    fn from(e: BufferError) -> Self {
        HostError::Duotone(e.into())
    }
}

impl From<ParameterError> for HostError {
    fn from(e: ParameterError) -> Self {
        HostError::Duotone(e.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_error_invalid_size() {
        let error = HostError::InvalidSize("12by4".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid size \"12by4\" (expected WIDTHxHEIGHT)"
        );
    }

    #[test]
    fn test_host_error_unknown_preset() {
        let error = HostError::UnknownPreset("sepia".to_string());
        assert_eq!(error.to_string(), "Unknown preset: sepia");
    }

    #[test]
    fn test_host_error_raw_length() {
        let error = HostError::RawLength {
            path: PathBuf::from("in.rgba"),
            width: 2,
            height: 2,
            expected: 16,
            actual: 12,
        };
        assert_eq!(
            error.to_string(),
            "Raw image in.rgba has 12 bytes, expected 16 for 2x2 RGBA"
        );
    }

    #[test]
    fn test_host_error_invalid_color() {
        let error = HostError::InvalidColor {
            option: "--shadow",
            value: "#12".to_string(),
            source: ParseColorError::InvalidLength(2),
        };
        assert!(error.to_string().starts_with("Invalid --shadow color \"#12\": "));
    }

    #[test]
    fn test_host_error_from_color_error() {
        let error: HostError = ParseColorError::InvalidLength(5).into();
        match error {
            HostError::Duotone(DuotoneError::MalformedColor(_)) => {}
            _ => panic!("Expected MalformedColor variant"),
        }
    }

    #[test]
    fn test_host_error_from_parameter_error() {
        let error: HostError = ParameterError::OutOfRange {
            name: "gamma",
            value: 0.0,
            range: "(0, inf)",
        }
        .into();
        assert_eq!(
            error.to_string(),
            "Duotone error: invalid parameter: gamma = 0 is outside (0, inf)"
        );
    }
}
