use duotone::{Color, Duotone, ToneParameters};
use serde::Deserialize;

use crate::error::HostError;

/// Name of the built-in preset.
pub const BRAVE_PINK_PRESET: &str = "brave-pink";

/// A preset as written in config.yaml.
///
/// Colors are hex strings; strength is a percentage (0-100) like the
/// slider it came from.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PresetConfig {
    /// Shadow color, e.g. "#ff3ea5"
    pub shadow: String,

    /// Highlight color, e.g. "#32ff84"
    pub highlight: String,

    /// Blend strength in percent (0-100)
    #[serde(default = "default_strength")]
    pub strength: f32,

    /// Gamma exponent
    #[serde(default = "default_gamma")]
    pub gamma: f32,

    /// Contrast (-100..100)
    #[serde(default)]
    pub contrast: f32,

    /// Brightness (-100..100)
    #[serde(default)]
    pub brightness: f32,
}

fn default_strength() -> f32 {
    100.0
}

fn default_gamma() -> f32 {
    1.0
}

impl PresetConfig {
    /// The built-in Brave Pink preset.
    pub fn brave_pink() -> Self {
        Self {
            shadow: "#ff3ea5".to_string(),
            highlight: "#32ff84".to_string(),
            strength: 90.0,
            gamma: 1.0,
            contrast: 10.0,
            brightness: 0.0,
        }
    }

    /// Parse colors and convert strength from percent.
    pub fn resolve(&self) -> Result<Preset, HostError> {
        Ok(Preset {
            shadow: self.shadow.parse()?,
            highlight: self.highlight.parse()?,
            params: ToneParameters::new()
                .strength(self.strength / 100.0)
                .gamma(self.gamma)
                .contrast(self.contrast)
                .brightness(self.brightness),
        })
    }
}

/// A resolved preset: gradient colors plus tone parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub shadow: Color,
    pub highlight: Color,
    pub params: ToneParameters,
}

impl Preset {
    pub fn brave_pink() -> Self {
        let duotone = Duotone::brave_pink();
        Self {
            shadow: duotone.shadow_color(),
            highlight: duotone.highlight_color(),
            params: *duotone.tone(),
        }
    }

    pub fn duotone(&self) -> Duotone {
        Duotone::new(self.shadow, self.highlight).params(self.params)
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::brave_pink()
    }
}
