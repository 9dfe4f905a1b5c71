//! Tests for TOML configuration round-trip.

use mapfit::storage::config::{load_config_from, save_config_to, AppConfig};

#[test]
fn defaults_match_the_shipped_map_behavior() {
    let config = AppConfig::default();

    assert_eq!(config.map.default_zoom, 15);
    assert_eq!(config.map.popup_max_width, 250);
    assert_eq!(config.map.popup_min_width, 100);
    assert_eq!(config.storage.storage_key, "workouts");
    assert!(config.map.fallback_center().is_some());
}

#[test]
fn config_survives_a_toml_round_trip() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("config.toml");

    let mut config = AppConfig::default();
    config.map.default_zoom = 12;
    config.storage.storage_key = "trips".to_string();

    save_config_to(&config, &path).expect("save config");
    let loaded = load_config_from(&path).expect("load config");

    assert_eq!(loaded.map.default_zoom, 12);
    assert_eq!(loaded.storage.storage_key, "trips");
    assert_eq!(loaded.map.popup_max_width, config.map.popup_max_width);
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("does-not-exist.toml");

    let config = load_config_from(&path).expect("missing file is not an error");

    assert_eq!(config.map.default_zoom, 15);
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "map = 3").expect("write file");

    assert!(load_config_from(&path).is_err());
}
