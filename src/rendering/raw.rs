//! Raw RGBA8 file I/O.
//!
//! Files hold interleaved RGBA bytes with no header; dimensions travel
//! separately (e.g. `--size 800x600`). This is the same layout
//! ImageMagick reads and writes as `rgba:` so any image can be converted
//! in and out without this crate doing format decoding.

use std::path::Path;

use duotone::{BufferError, PixelBuffer};

use crate::error::HostError;

/// Suffix appended to exported file stems.
pub const EXPORT_SUFFIX: &str = "-brave-pink";

/// Extension used for raw RGBA exports.
pub const RAW_EXTENSION: &str = "rgba";

/// Read a raw RGBA8 file of the given dimensions.
pub fn read_raw_rgba(path: &Path, width: u32, height: u32) -> Result<PixelBuffer, HostError> {
    let data = std::fs::read(path).map_err(|source| HostError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    PixelBuffer::new(width, height, data).map_err(|e| match e {
        BufferError::LengthMismatch {
            expected, actual, ..
        } => HostError::RawLength {
            path: path.to_path_buf(),
            width,
            height,
            expected,
            actual,
        },
        other => other.into(),
    })
}

/// Write a buffer as a raw RGBA8 file.
pub fn write_raw_rgba(path: &Path, buffer: &PixelBuffer) -> Result<(), HostError> {
    std::fs::write(path, buffer.data()).map_err(|source| HostError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a `WIDTHxHEIGHT` size string such as `800x600`.
pub fn parse_size(s: &str) -> Result<(u32, u32), HostError> {
    let invalid = || HostError::InvalidSize(s.to_string());
    let (w, h) = s.trim().split_once(['x', 'X']).ok_or_else(invalid)?;
    let width: u32 = w.trim().parse().map_err(|_| invalid())?;
    let height: u32 = h.trim().parse().map_err(|_| invalid())?;
    if width == 0 || height == 0 {
        return Err(invalid());
    }
    Ok((width, height))
}

/// Export file name for a source file name.
///
/// Strips the last extension and appends `-brave-pink.rgba`; without a
/// usable source name the stem is `brave-pink`.
pub fn export_file_name(source: Option<&str>) -> String {
    let stem = source
        .map(|name| match name.rfind('.') {
            Some(dot) if dot > 0 => &name[..dot],
            _ => name,
        })
        .filter(|stem| !stem.is_empty())
        .unwrap_or("brave-pink");
    format!("{stem}{EXPORT_SUFFIX}.{RAW_EXTENSION}")
}
