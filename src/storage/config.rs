//! Application configuration loaded from TOML.

use crate::geo::Coordinates;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Map settings
    pub map: MapSettings,
    /// Persistence settings
    pub storage: StorageSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            map: MapSettings::default(),
            storage: StorageSettings::default(),
        }
    }
}

/// Map-related settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapSettings {
    /// Initial zoom level
    pub default_zoom: u8,
    /// Center used when geolocation fails and a host still wants a map
    pub fallback_latitude: f64,
    /// Center used when geolocation fails and a host still wants a map
    pub fallback_longitude: f64,
    /// Marker popup maximum width in pixels
    pub popup_max_width: u16,
    /// Marker popup minimum width in pixels
    pub popup_min_width: u16,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            default_zoom: 15,
            fallback_latitude: 12.8791619,
            fallback_longitude: 77.6916485,
            popup_max_width: 250,
            popup_min_width: 100,
        }
    }
}

impl MapSettings {
    /// Fallback center as coordinates, if the configured pair is valid.
    pub fn fallback_center(&self) -> Option<Coordinates> {
        Coordinates::new(self.fallback_latitude, self.fallback_longitude).ok()
    }
}

/// Persistence-related settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Key the workout blob is stored under
    pub storage_key: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            storage_key: crate::storage::store::DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "mapfit", "MapFit")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from file.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load application configuration from an explicit path.
pub fn load_config_from(path: &std::path::Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        let config = AppConfig {
            data_dir: get_data_dir(),
            ..Default::default()
        };
        return Ok(config);
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let mut config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    config.data_dir = get_data_dir();

    Ok(config)
}

/// Save application configuration to file.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(config, &get_config_path())
}

/// Save application configuration to an explicit path.
pub fn save_config_to(config: &AppConfig, path: &std::path::Path) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
