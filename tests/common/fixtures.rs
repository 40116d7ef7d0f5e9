//! Test fixtures and constants.

use std::path::PathBuf;

use duotone::PixelBuffer;
use tempfile::TempDir;

/// Gradient endpoints used across tests
pub mod colors {
    use duotone::Color;

    /// Shadow color from the reference scenario
    pub const SHADOW: Color = Color::new(255, 0, 170);

    /// Highlight color from the reference scenario
    pub const HIGHLIGHT: Color = Color::new(50, 255, 136);
}

/// Config file with a custom default preset and a small size cap
pub const SMALL_CONFIG: &str = r##"
max_dimension: 16
default_preset: reference
presets:
  reference:
    shadow: "#ff00aa"
    highlight: "#32ff88"
    strength: 100
  faded:
    shadow: "#000"
    highlight: "#fff"
    strength: 40
    gamma: 1.8
"##;

/// The 2x2 reference image: black, white, mid gray, green-ish.
pub fn reference_2x2() -> PixelBuffer {
    PixelBuffer::new(
        2,
        2,
        vec![
            0, 0, 0, 255, //
            255, 255, 255, 255, //
            128, 128, 128, 255, //
            64, 200, 30, 255,
        ],
    )
    .unwrap()
}

/// A colorful image with varying alpha.
pub fn photo(width: u32, height: u32) -> PixelBuffer {
    PixelBuffer::from_fn(width, height, |x, y| {
        [
            (x * 255 / width.max(2).saturating_sub(1)).min(255) as u8,
            (y * 255 / height.max(2).saturating_sub(1)).min(255) as u8,
            ((x + y) * 7 % 256) as u8,
            (255 - (x * 3 % 128)) as u8,
        ]
    })
    .unwrap()
}

/// Scratch directory for raw image and config files.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a buffer as raw RGBA and return its path.
    pub fn write_image(&self, name: &str, buffer: &PixelBuffer) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, buffer.data()).expect("write raw image");
        path
    }

    /// Write a config file and return its path.
    pub fn write_config(&self, yaml: &str) -> PathBuf {
        let path = self.path("config.yaml");
        std::fs::write(&path, yaml).expect("write config");
        path
    }
}
