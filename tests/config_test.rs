mod common;

use brave_pink::error::HostError;
use brave_pink::models::{AppConfig, Preset, BRAVE_PINK_PRESET};
use brave_pink::services::DuotoneSession;
use common::{fixtures, Workspace};
use duotone::DuotoneError;
use pretty_assertions::assert_eq;

#[test]
fn test_missing_config_uses_defaults() {
    let ws = Workspace::new();
    let config = AppConfig::load(Some(&ws.path("nope.yaml")));

    assert_eq!(config.max_dimension, 3500);
    assert_eq!(config.default_preset, BRAVE_PINK_PRESET);
    assert_eq!(config.default_preset(), Preset::brave_pink());
}

#[test]
fn test_try_load_reports_bad_yaml() {
    let ws = Workspace::new();
    let path = ws.write_config("max_dimension: [not, a, number]\n");

    assert!(matches!(
        AppConfig::try_load(&path),
        Err(HostError::Config { .. })
    ));
    // The lenient loader falls back instead
    assert_eq!(AppConfig::load(Some(&path)).max_dimension, 3500);
}

#[test]
fn test_unknown_preset() {
    let ws = Workspace::new();
    let config = AppConfig::load(Some(&ws.write_config(fixtures::SMALL_CONFIG)));

    match config.preset("sepia") {
        Err(HostError::UnknownPreset(name)) => assert_eq!(name, "sepia"),
        other => panic!("Expected UnknownPreset, got {other:?}"),
    }
}

#[test]
fn test_brave_pink_always_available() {
    let ws = Workspace::new();
    let config = AppConfig::load(Some(&ws.write_config(fixtures::SMALL_CONFIG)));

    assert_eq!(
        config.preset(BRAVE_PINK_PRESET).unwrap(),
        Preset::brave_pink()
    );
}

#[test]
fn test_malformed_preset_color() {
    let ws = Workspace::new();
    let path = ws.write_config(
        r##"
default_preset: broken
presets:
  broken:
    shadow: "#12345"
    highlight: "#ffffff"
"##,
    );
    let config = AppConfig::load(Some(&path));

    assert!(matches!(
        config.preset("broken"),
        Err(HostError::Duotone(DuotoneError::MalformedColor(_)))
    ));
    // An unusable default degrades to the built-in preset
    assert_eq!(config.default_preset(), Preset::brave_pink());
}

#[test]
fn test_zero_max_dimension_falls_back() {
    let ws = Workspace::new();
    let path = ws.write_config("max_dimension: 0\n");

    assert!(matches!(
        AppConfig::try_load(&path),
        Err(HostError::Config { .. })
    ));

    let config = AppConfig::load(Some(&path));
    assert_eq!(config.max_dimension, 3500);

    let session = DuotoneSession::new(
        fixtures::photo(80, 60),
        config.max_dimension,
        config.default_preset(),
    )
    .unwrap();
    assert_eq!((session.working().width(), session.working().height()), (80, 60));
}
