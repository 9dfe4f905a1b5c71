//! Collaborator seams for the map widget, the workout list, and the form.
//!
//! The real surfaces live in the embedding host (a mapping widget and a
//! form/list UI); the recording implementations here back tests and
//! headless hosts.

use crate::geo::Coordinates;
use crate::view::types::{ListEntry, MarkerSpec};

/// Narrow interface over the mapping widget.
pub trait MapSurface {
    /// Create the map centered at `center` with the given zoom.
    fn init(&mut self, center: Coordinates, zoom: u8);

    /// Whether `init` has run; markers may only be placed afterwards.
    fn is_ready(&self) -> bool;

    /// Place a marker with its popup open.
    fn place_marker(&mut self, marker: MarkerSpec);

    /// Re-center on `coords` with a pan animation.
    fn pan_to(&mut self, coords: Coordinates);
}

/// Narrow interface over the rendered workout list.
pub trait ListSurface {
    /// Insert an entry after the form, newest first.
    fn insert_entry(&mut self, entry: ListEntry);

    /// Remove all entries.
    fn clear_entries(&mut self);
}

/// Narrow interface over the entry form.
pub trait FormSurface {
    /// Reveal the form and focus the distance field.
    fn show(&mut self);

    /// Clear all fields and hide the form.
    fn hide_and_clear(&mut self);

    /// Swap visibility of the cadence and elevation field rows.
    fn toggle_kind_fields(&mut self);

    /// Surface a user-facing message (invalid input, geolocation failure).
    fn alert(&mut self, message: &str);
}

/// Map surface that records every call, for tests and headless hosts.
#[derive(Debug, Default)]
pub struct RecordingMapSurface {
    /// Center and zoom from `init`, if it ran
    pub initialized: Option<(Coordinates, u8)>,
    /// Markers placed, in order
    pub markers: Vec<MarkerSpec>,
    /// Pan targets, in order
    pub pans: Vec<Coordinates>,
}

impl RecordingMapSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MapSurface for RecordingMapSurface {
    fn init(&mut self, center: Coordinates, zoom: u8) {
        self.initialized = Some((center, zoom));
    }

    fn is_ready(&self) -> bool {
        self.initialized.is_some()
    }

    fn place_marker(&mut self, marker: MarkerSpec) {
        self.markers.push(marker);
    }

    fn pan_to(&mut self, coords: Coordinates) {
        self.pans.push(coords);
    }
}

/// List surface that records every call.
#[derive(Debug, Default)]
pub struct RecordingListSurface {
    /// Entries inserted, in order
    pub entries: Vec<ListEntry>,
}

impl RecordingListSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ListSurface for RecordingListSurface {
    fn insert_entry(&mut self, entry: ListEntry) {
        self.entries.push(entry);
    }

    fn clear_entries(&mut self) {
        self.entries.clear();
    }
}

/// Form surface that records every call.
#[derive(Debug, Default)]
pub struct RecordingFormSurface {
    /// Whether the form is currently shown
    pub visible: bool,
    /// Alert messages surfaced, in order
    pub alerts: Vec<String>,
    /// Number of kind-field toggles
    pub toggles: u32,
    /// Number of hide-and-clear calls
    pub clears: u32,
}

impl RecordingFormSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FormSurface for RecordingFormSurface {
    fn show(&mut self) {
        self.visible = true;
    }

    fn hide_and_clear(&mut self) {
        self.visible = false;
        self.clears += 1;
    }

    fn toggle_kind_fields(&mut self) {
        self.toggles += 1;
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
