//! Workout entities and identifier generation.

pub mod id;
pub mod types;

pub use id::WorkoutId;
pub use types::{ValidationError, Workout, WorkoutDetails, WorkoutKind};
