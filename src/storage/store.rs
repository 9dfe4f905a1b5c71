//! Ordered workout collection with a persistence round-trip.

use crate::storage::keyvalue::{KeyValueError, KeyValueStore};
use crate::workouts::{Workout, WorkoutId};
use thiserror::Error;

/// Default key the collection is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "workouts";

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No workout with the given id
    #[error("Workout not found: {0}")]
    NotFound(WorkoutId),

    /// The persisted blob is malformed
    #[error("Malformed workout blob: {0}")]
    Persistence(String),

    /// The backing key-value store failed
    #[error(transparent)]
    KeyValue(#[from] KeyValueError),
}

/// In-memory ordered collection of workouts, kept consistent with a
/// key-value backend under a single fixed key.
///
/// Insertion order is chronological creation order and is preserved across
/// persist/restore. The store is the exclusive owner of the collection;
/// views hold only derived presentation state keyed by workout id.
pub struct WorkoutStore<S: KeyValueStore> {
    workouts: Vec<Workout>,
    backend: S,
    storage_key: String,
}

impl<S: KeyValueStore> WorkoutStore<S> {
    /// Create an empty store over `backend`, persisting under the default key.
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, DEFAULT_STORAGE_KEY)
    }

    /// Create an empty store persisting under a custom key.
    pub fn with_key(backend: S, storage_key: impl Into<String>) -> Self {
        Self {
            workouts: Vec::new(),
            backend,
            storage_key: storage_key.into(),
        }
    }

    /// Append a workout and persist the full collection.
    ///
    /// On persist failure the workout stays in the in-memory list and the
    /// error is reported to the caller (write-then-report).
    pub fn add(&mut self, workout: Workout) -> Result<(), StoreError> {
        tracing::info!(id = %workout.id, kind = %workout.kind(), "Adding workout");
        self.workouts.push(workout);
        self.persist()
    }

    /// Iterate current entries in insertion order.
    pub fn all(&self) -> impl Iterator<Item = &Workout> {
        self.workouts.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    /// Look up a workout by id.
    pub fn find_by_id(&self, id: &WorkoutId) -> Result<&Workout, StoreError> {
        self.workouts
            .iter()
            .find(|w| &w.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    /// Look up a workout by id for mutation (interaction counting).
    pub fn find_by_id_mut(&mut self, id: &WorkoutId) -> Result<&mut Workout, StoreError> {
        self.workouts
            .iter_mut()
            .find(|w| &w.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    /// Serialize the full collection to the backend as one JSON blob,
    /// overwriting any prior blob (last-writer-wins).
    pub fn persist(&mut self) -> Result<(), StoreError> {
        let blob = serde_json::to_string(&self.workouts)
            .map_err(|e| StoreError::Persistence(e.to_string()))?;
        self.backend.set(&self.storage_key, &blob)?;
        tracing::debug!(key = %self.storage_key, count = self.workouts.len(), "Persisted workouts");
        Ok(())
    }

    /// Read the blob and repopulate the in-memory list.
    ///
    /// An absent blob leaves the store empty and returns `Ok(0)`. A
    /// malformed blob fails with `StoreError::Persistence` and leaves the
    /// in-memory list untouched.
    pub fn restore(&mut self) -> Result<usize, StoreError> {
        let Some(blob) = self.backend.get(&self.storage_key)? else {
            tracing::debug!(key = %self.storage_key, "No persisted workouts");
            return Ok(0);
        };

        let restored: Vec<Workout> =
            serde_json::from_str(&blob).map_err(|e| StoreError::Persistence(e.to_string()))?;

        let count = restored.len();
        self.workouts = restored;
        tracing::info!(count, "Restored workouts from storage");
        Ok(count)
    }

    /// Empty both the in-memory list and the persisted blob.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.workouts.clear();
        self.backend.remove(&self.storage_key)?;
        tracing::info!("Cleared workout store");
        Ok(())
    }

    /// Access the backing store (tests inspect persisted state through this).
    pub fn backend(&self) -> &S {
        &self.backend
    }
}
