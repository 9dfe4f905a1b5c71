//! Workout entities: the base entry plus the running/cycling variants
//! with their derived metrics.

use crate::geo::{CoordinateError, Coordinates};
use crate::workouts::id::WorkoutId;
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Discriminator between the two workout variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    /// Emoji used in marker popups and list entries.
    pub fn icon(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "🏃‍♂️",
            WorkoutKind::Cycling => "🚴‍♀️",
        }
    }

    /// The other kind, for the form's type toggle.
    pub fn toggled(&self) -> Self {
        match self {
            WorkoutKind::Running => WorkoutKind::Cycling,
            WorkoutKind::Cycling => WorkoutKind::Running,
        }
    }
}

impl std::fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkoutKind::Running => write!(f, "Running"),
            WorkoutKind::Cycling => write!(f, "Cycling"),
        }
    }
}

/// Kind-specific input and the metric derived from it at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WorkoutDetails {
    Running {
        /// Cadence in steps per minute
        cadence_spm: f64,
        /// Derived pace in min/km, cached at construction
        pace_min_per_km: f64,
    },
    Cycling {
        /// Elevation gain in meters (negative for net descents)
        elevation_gain_m: f64,
        /// Derived speed in km/h, cached at construction
        speed_km_per_h: f64,
    },
}

impl WorkoutDetails {
    /// The discriminator for this variant.
    pub fn kind(&self) -> WorkoutKind {
        match self {
            WorkoutDetails::Running { .. } => WorkoutKind::Running,
            WorkoutDetails::Cycling { .. } => WorkoutKind::Cycling,
        }
    }
}

/// A recorded exercise session pinned to a map location.
///
/// Fully populated at construction; immutable afterwards except for
/// `interaction_count`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Unique identifier, the join key between rendered entry and entity
    pub id: WorkoutId,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Location the workout was pinned to
    pub coordinates: Coordinates,
    /// Distance in kilometers
    pub distance_km: f64,
    /// Duration in minutes
    pub duration_min: f64,
    /// Human label, "Kind on Month Day", derived once at construction
    pub description: String,
    /// Times the rendered entry has been interacted with
    pub interaction_count: u32,
    /// Kind discriminator plus kind-specific data
    #[serde(flatten)]
    pub details: WorkoutDetails,
}

impl Workout {
    /// Create a running workout; derives pace (min/km) and the display label.
    pub fn running(
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: f64,
    ) -> Result<Self, ValidationError> {
        validate_positive("distance", distance_km)?;
        validate_positive("duration", duration_min)?;
        validate_positive("cadence", cadence_spm)?;

        let details = WorkoutDetails::Running {
            cadence_spm,
            pace_min_per_km: duration_min / distance_km,
        };
        Ok(Self::assemble(coordinates, distance_km, duration_min, details))
    }

    /// Create a cycling workout; derives speed (km/h) and the display label.
    ///
    /// Elevation gain may be zero or negative for net descents.
    pub fn cycling(
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Result<Self, ValidationError> {
        validate_positive("distance", distance_km)?;
        validate_positive("duration", duration_min)?;
        if !elevation_gain_m.is_finite() {
            return Err(ValidationError::NotFinite { field: "elevation" });
        }

        let details = WorkoutDetails::Cycling {
            elevation_gain_m,
            speed_km_per_h: distance_km / (duration_min / 60.0),
        };
        Ok(Self::assemble(coordinates, distance_km, duration_min, details))
    }

    fn assemble(
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        details: WorkoutDetails,
    ) -> Self {
        let created_at = Utc::now();
        Self {
            id: WorkoutId::generate(),
            created_at,
            coordinates,
            distance_km,
            duration_min,
            description: Self::describe(details.kind(), created_at),
            interaction_count: 0,
            details,
        }
    }

    /// Produce the display label "Kind on Month Day" for a kind and timestamp.
    pub fn describe(kind: WorkoutKind, at: DateTime<Utc>) -> String {
        format!("{} on {} {}", kind, at.format("%B"), at.day())
    }

    /// The discriminator for this workout.
    pub fn kind(&self) -> WorkoutKind {
        self.details.kind()
    }

    /// Record a user interaction with the rendered entry; returns the new count.
    pub fn record_interaction(&mut self) -> u32 {
        self.interaction_count += 1;
        self.interaction_count
    }
}

fn validate_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field });
    }
    if value <= 0.0 {
        return Err(ValidationError::NotPositive { field, value });
    }
    Ok(())
}

/// Bad user input during workout construction.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Field did not parse as a number
    #[error("{field} is not a number: {value:?}")]
    Unparseable { field: &'static str, value: String },

    /// Field parsed but is NaN or infinite
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    /// Field must be strictly positive
    #[error("{field} must be a positive number, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    /// Coordinates out of range
    #[error("Invalid coordinates: {0}")]
    Coordinate(#[from] CoordinateError),
}
