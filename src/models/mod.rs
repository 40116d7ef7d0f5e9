pub mod config;
pub mod preset;

pub use config::{AppConfig, CONFIG_ENV};
pub use preset::{Preset, PresetConfig, BRAVE_PINK_PRESET};
