//! Storage module: key-value seam, workout store, configuration.

pub mod config;
pub mod keyvalue;
pub mod store;

pub use config::{AppConfig, ConfigError, MapSettings, StorageSettings};
pub use keyvalue::{KeyValueError, KeyValueStore, MemoryStore};
pub use store::{StoreError, WorkoutStore, DEFAULT_STORAGE_KEY};
