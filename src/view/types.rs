//! Render-model types handed to the map and list surfaces.

use crate::geo::Coordinates;
use crate::workouts::{WorkoutId, WorkoutKind};

/// A map marker with its popup, ready for placement.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    /// Workout the marker belongs to
    pub workout_id: WorkoutId,
    /// Marker position
    pub coordinates: Coordinates,
    /// Kind, for popup styling
    pub kind: WorkoutKind,
    /// Popup label: "<icon> <description>"
    pub popup_text: String,
    /// Popup maximum width in pixels
    pub popup_max_width: u16,
    /// Popup minimum width in pixels
    pub popup_min_width: u16,
}

/// One icon/value/unit cell of a list entry.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricField {
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
}

impl MetricField {
    pub fn new(icon: &'static str, value: String, unit: &'static str) -> Self {
        Self { icon, value, unit }
    }
}

/// A rendered list entry for one workout.
///
/// Carries distance, duration, and the two kind-specific metrics; derived
/// values are rounded to one decimal for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    /// Join key back to the stored workout
    pub workout_id: WorkoutId,
    /// Kind, for row styling
    pub kind: WorkoutKind,
    /// Entry title, the workout description
    pub title: String,
    /// Metric cells in display order
    pub metrics: Vec<MetricField>,
}
