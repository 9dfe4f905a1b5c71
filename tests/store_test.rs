//! Tests for the workout store persistence round-trip.

use mapfit::storage::keyvalue::{KeyValueError, KeyValueStore, MemoryStore};
use mapfit::storage::store::{StoreError, WorkoutStore, DEFAULT_STORAGE_KEY};
use mapfit::workouts::{Workout, WorkoutId};
use mapfit::Coordinates;
use std::collections::HashMap;

fn coords() -> Coordinates {
    Coordinates::new(12.8791619, 77.6916485).expect("valid coordinates")
}

fn running() -> Workout {
    Workout::running(coords(), 5.2, 24.0, 178.0).expect("valid running workout")
}

fn cycling() -> Workout {
    Workout::cycling(coords(), 27.0, 95.0, 524.0).expect("valid cycling workout")
}

#[test]
fn add_then_find_by_id_returns_the_workout() {
    let mut store = WorkoutStore::new(MemoryStore::new());
    let workout = running();
    let id = workout.id.clone();

    store.add(workout).expect("add should persist");

    let found = store.find_by_id(&id).expect("just-added id should be found");
    assert_eq!(found.id, id);
    assert_eq!(found.distance_km, 5.2);
}

#[test]
fn find_by_id_on_absent_id_signals_not_found() {
    let store: WorkoutStore<MemoryStore> = WorkoutStore::new(MemoryStore::new());
    let absent = WorkoutId::from("zzzzzzzzzz");

    assert!(matches!(
        store.find_by_id(&absent),
        Err(StoreError::NotFound(_))
    ));
}

#[test]
fn round_trip_preserves_order_and_all_fields() {
    let mut store = WorkoutStore::new(MemoryStore::new());
    store.add(running()).expect("add running");
    store.add(cycling()).expect("add cycling");
    let original: Vec<Workout> = store.all().cloned().collect();

    let blob = store
        .backend()
        .get(DEFAULT_STORAGE_KEY)
        .expect("backend read")
        .expect("blob should exist");

    let mut entries = HashMap::new();
    entries.insert(DEFAULT_STORAGE_KEY.to_string(), blob);
    let mut restored_store = WorkoutStore::new(MemoryStore::with_entries(entries));

    let count = restored_store.restore().expect("restore should succeed");
    assert_eq!(count, 2);

    let restored: Vec<Workout> = restored_store.all().cloned().collect();
    assert_eq!(restored, original);
}

#[test]
fn restore_from_absent_blob_leaves_store_empty() {
    let mut store = WorkoutStore::new(MemoryStore::new());

    let count = store.restore().expect("absent blob is not an error");

    assert_eq!(count, 0);
    assert!(store.is_empty());
}

#[test]
fn restore_from_malformed_blob_fails_and_store_stays_usable() {
    let mut broken = HashMap::new();
    broken.insert(DEFAULT_STORAGE_KEY.to_string(), "not json {".to_string());
    let mut store = WorkoutStore::new(MemoryStore::with_entries(broken));

    assert!(matches!(store.restore(), Err(StoreError::Persistence(_))));
    assert!(store.is_empty());

    // The failure is non-fatal; adding afterwards overwrites the bad blob.
    store.add(cycling()).expect("add after failed restore");
    assert_eq!(store.len(), 1);
    let mut fresh = WorkoutStore::new(MemoryStore::with_entries(
        store
            .backend()
            .get(DEFAULT_STORAGE_KEY)
            .expect("read")
            .map(|blob| {
                let mut entries = HashMap::new();
                entries.insert(DEFAULT_STORAGE_KEY.to_string(), blob);
                entries
            })
            .expect("blob should exist"),
    ));
    assert_eq!(fresh.restore().expect("restore"), 1);
}

#[test]
fn all_is_restartable_and_in_insertion_order() {
    let mut store = WorkoutStore::new(MemoryStore::new());
    let first = running();
    let second = cycling();
    let first_id = first.id.clone();
    let second_id = second.id.clone();
    store.add(first).expect("add first");
    store.add(second).expect("add second");

    let ids: Vec<&WorkoutId> = store.all().map(|w| &w.id).collect();
    assert_eq!(ids, vec![&first_id, &second_id]);

    // Iterating again starts over.
    assert_eq!(store.all().count(), 2);
}

#[test]
fn clear_empties_memory_and_removes_the_blob() {
    let mut store = WorkoutStore::new(MemoryStore::new());
    store.add(running()).expect("add");

    store.clear().expect("clear");

    assert!(store.is_empty());
    assert_eq!(
        store.backend().get(DEFAULT_STORAGE_KEY).expect("read"),
        None
    );
}

/// Backend that accepts reads but fails every write.
struct ReadOnlyBackend;

impl KeyValueStore for ReadOnlyBackend {
    fn get(&self, _key: &str) -> Result<Option<String>, KeyValueError> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), KeyValueError> {
        Err(KeyValueError::WriteFailed("quota exceeded".to_string()))
    }

    fn remove(&mut self, _key: &str) -> Result<(), KeyValueError> {
        Err(KeyValueError::WriteFailed("quota exceeded".to_string()))
    }
}

#[test]
fn persist_failure_is_reported_but_keeps_the_workout_in_memory() {
    let mut store = WorkoutStore::new(ReadOnlyBackend);
    let workout = running();
    let id = workout.id.clone();

    let result = store.add(workout);

    assert!(matches!(result, Err(StoreError::KeyValue(_))));
    assert_eq!(store.len(), 1);
    assert!(store.find_by_id(&id).is_ok());
}
