//! MapFit - Map-Pinned Workout Tracker Core
//!
//! The domain core of a map-based workout tracker: running and cycling
//! entries with derived metrics, an ordered store with a persistence
//! round-trip, and a synchronizer that projects the store onto a map
//! surface and a list surface. The mapping widget, geolocation service,
//! form UI, and key-value persistence are external collaborators consumed
//! through narrow trait seams.

pub mod app;
pub mod geo;
pub mod storage;
pub mod view;
pub mod workouts;

// Re-export commonly used types
pub use app::{FormInput, FormState, TrackerApp};
pub use geo::{Coordinates, GeolocationError, Geolocator};
pub use storage::{KeyValueStore, MemoryStore, StoreError, WorkoutStore};
pub use view::ViewSynchronizer;
pub use workouts::{ValidationError, Workout, WorkoutId, WorkoutKind};
