//! Flat string key-value collaborator seam.
//!
//! The persistence collaborator is a browser-localStorage-shaped store:
//! string keys, string values, single writer, no transactions.

use std::collections::HashMap;
use thiserror::Error;

/// Errors from the backing key-value store.
#[derive(Debug, Error)]
pub enum KeyValueError {
    /// The store rejected a write (quota, detached backend, ...)
    #[error("Key-value write failed: {0}")]
    WriteFailed(String),

    /// The store could not be read
    #[error("Key-value read failed: {0}")]
    ReadFailed(String),
}

/// Narrow interface over the persistent key-value collaborator.
pub trait KeyValueStore {
    /// Fetch the value under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, KeyValueError>;

    /// Overwrite the value under `key` (last-writer-wins).
    fn set(&mut self, key: &str, value: &str) -> Result<(), KeyValueError>;

    /// Remove `key`; removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), KeyValueError>;
}

/// In-memory key-value store.
///
/// The default backend for tests and embedding hosts that bring their own
/// persistence lifetime.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with entries.
    pub fn with_entries(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, KeyValueError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), KeyValueError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), KeyValueError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("workouts").expect("read"), None);

        store.set("workouts", "[]").expect("write");
        assert_eq!(store.get("workouts").expect("read").as_deref(), Some("[]"));

        store.remove("workouts").expect("remove");
        assert_eq!(store.get("workouts").expect("read"), None);
    }

    #[test]
    fn set_overwrites_prior_value() {
        let mut store = MemoryStore::new();
        store.set("k", "first").expect("write");
        store.set("k", "second").expect("write");
        assert_eq!(store.get("k").expect("read").as_deref(), Some("second"));
    }

    #[test]
    fn removing_absent_key_is_ok() {
        let mut store = MemoryStore::new();
        assert!(store.remove("missing").is_ok());
    }
}
