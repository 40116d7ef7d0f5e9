use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use super::preset::{Preset, PresetConfig, BRAVE_PINK_PRESET};
use crate::error::HostError;

/// Environment variable naming the config file when `--config` is absent.
pub const CONFIG_ENV: &str = "BRAVE_PINK_CONFIG";

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Longest side of the working buffer in pixels, at least 1
    #[serde(
        default = "default_max_dimension",
        deserialize_with = "positive_dimension"
    )]
    pub max_dimension: u32,

    /// Preset used when none is requested (and by reset)
    #[serde(default = "default_preset")]
    pub default_preset: String,

    /// Named presets
    #[serde(default = "default_presets")]
    pub presets: BTreeMap<String, PresetConfig>,
}

fn default_max_dimension() -> u32 {
    3500
}

fn positive_dimension<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match u32::deserialize(deserializer)? {
        0 => Err(serde::de::Error::custom("max_dimension must be at least 1")),
        value => Ok(value),
    }
}

fn default_preset() -> String {
    BRAVE_PINK_PRESET.to_string()
}

fn default_presets() -> BTreeMap<String, PresetConfig> {
    let mut presets = BTreeMap::new();
    presets.insert(BRAVE_PINK_PRESET.to_string(), PresetConfig::brave_pink());
    presets
}

impl AppConfig {
    /// Parse configuration from a YAML string.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Load configuration from a file, falling back to defaults on error
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match Self::try_load(path) {
            Ok(config) => {
                tracing::info!(
                    path = %path.display(),
                    presets = config.presets.len(),
                    max_dimension = config.max_dimension,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Load configuration from a file, reporting read and parse errors
    pub fn try_load(path: &Path) -> Result<Self, HostError> {
        let content = std::fs::read_to_string(path).map_err(|source| HostError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|source| HostError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Look up a preset by name.
    ///
    /// The built-in `brave-pink` preset is always available, even when the
    /// config file defines its own preset list without it.
    pub fn preset(&self, name: &str) -> Result<Preset, HostError> {
        match self.presets.get(name) {
            Some(preset) => preset.resolve(),
            None if name == BRAVE_PINK_PRESET => Ok(Preset::brave_pink()),
            None => Err(HostError::UnknownPreset(name.to_string())),
        }
    }

    /// The configured default preset, or the built-in one if it is unusable
    pub fn default_preset(&self) -> Preset {
        match self.preset(&self.default_preset) {
            Ok(preset) => preset,
            Err(e) => {
                tracing::warn!(%e, "Default preset unusable, using brave-pink");
                Preset::brave_pink()
            }
        }
    }

    /// Every preset in name order, each resolved on its own so one broken
    /// entry doesn't hide the rest
    pub fn resolve_presets(&self) -> Vec<(&str, Result<Preset, HostError>)> {
        self.preset_names()
            .into_iter()
            .map(|name| (name, self.preset(name)))
            .collect()
    }

    /// Preset names in sorted order, including the built-in one
    pub fn preset_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.presets.keys().map(String::as_str).collect();
        if !self.presets.contains_key(BRAVE_PINK_PRESET) {
            names.push(BRAVE_PINK_PRESET);
            names.sort_unstable();
        }
        names
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_dimension: default_max_dimension(),
            default_preset: default_preset(),
            presets: default_presets(),
        }
    }
}
