//! Interaction controller: orchestrates map clicks, form submission,
//! store mutation, and rendering.

use crate::app::form::{parse_field, FormInput, FormState};
use crate::geo::{Coordinates, Geolocator};
use crate::storage::config::AppConfig;
use crate::storage::keyvalue::KeyValueStore;
use crate::storage::store::WorkoutStore;
use crate::view::surfaces::{FormSurface, ListSurface, MapSurface};
use crate::view::sync::ViewSynchronizer;
use crate::workouts::{ValidationError, Workout, WorkoutId, WorkoutKind};

/// Application context: owns the store, the view synchronizer, and the
/// collaborator surfaces, constructed once at startup.
///
/// All event handling runs to completion on the caller's thread; there is
/// no queue and no locking.
pub struct TrackerApp<S, M, L, F, G>
where
    S: KeyValueStore,
    M: MapSurface,
    L: ListSurface,
    F: FormSurface,
    G: Geolocator,
{
    config: AppConfig,
    store: WorkoutStore<S>,
    synchronizer: ViewSynchronizer,
    map: M,
    list: L,
    form: F,
    geolocator: G,
    form_state: FormState,
}

impl<S, M, L, F, G> TrackerApp<S, M, L, F, G>
where
    S: KeyValueStore,
    M: MapSurface,
    L: ListSurface,
    F: FormSurface,
    G: Geolocator,
{
    /// Assemble the application from its collaborators.
    pub fn new(config: AppConfig, backend: S, map: M, list: L, form: F, geolocator: G) -> Self {
        let store = WorkoutStore::with_key(backend, config.storage.storage_key.clone());
        let synchronizer = ViewSynchronizer::new(config.map.clone());
        Self {
            config,
            store,
            synchronizer,
            map,
            list,
            form,
            geolocator,
            form_state: FormState::Idle,
        }
    }

    /// One-shot startup: request the position, initialize the map on
    /// success, then restore persisted workouts into the list.
    ///
    /// Geolocation failure leaves the map uninitialized (the app keeps
    /// running without it). Restore failure is non-fatal: the app proceeds
    /// with an empty store. Restored workouts get list entries only; marker
    /// placement waits for map readiness and is not replayed here.
    pub fn init(&mut self) {
        match self.geolocator.locate() {
            Ok(position) => {
                self.map.init(position, self.config.map.default_zoom);
                tracing::info!(%position, zoom = self.config.map.default_zoom, "Map initialized");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Geolocation failed, map left uninitialized");
                self.form.alert(&e.to_string());
            }
        }

        match self.store.restore() {
            Ok(count) => {
                if count > 0 {
                    self.synchronizer.render_restored(&self.store, &mut self.list);
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Restore failed, starting with an empty store");
                self.form.alert(&e.to_string());
            }
        }
    }

    /// Map click: bind the clicked coordinates and open the form.
    ///
    /// A click while the form is already open rebinds the coordinates and
    /// keeps the selected kind.
    pub fn on_map_click(&mut self, coordinates: Coordinates) {
        if !self.map.is_ready() {
            tracing::warn!("Ignoring map click before map initialization");
            return;
        }

        let kind = match self.form_state {
            FormState::Open { kind, .. } => kind,
            FormState::Idle => WorkoutKind::Running,
        };
        self.form_state = FormState::Open { coordinates, kind };
        self.form.show();
    }

    /// Kind toggle: swap running/cycling and the matching form field row.
    /// Bound coordinates are unchanged.
    pub fn on_kind_toggle(&mut self) {
        if let FormState::Open { coordinates, kind } = self.form_state {
            self.form_state = FormState::Open {
                coordinates,
                kind: kind.toggled(),
            };
        }
        self.form.toggle_kind_fields();
    }

    /// Form submit: validate, construct the workout, store it, render the
    /// marker and the list entry, and close the form.
    ///
    /// Any validation failure is surfaced as an alert and leaves the form
    /// open and the store untouched.
    pub fn on_submit(&mut self, input: &FormInput) {
        let FormState::Open { coordinates, kind } = self.form_state else {
            tracing::warn!("Submit with no open form");
            return;
        };

        let workout = match Self::build_workout(coordinates, kind, input) {
            Ok(workout) => workout,
            Err(e) => {
                tracing::debug!(error = %e, "Rejected workout input");
                self.form.alert(&format!("Inputs have to be positive numbers! ({e})"));
                return;
            }
        };

        let id = workout.id.clone();
        if let Err(e) = self.store.add(workout) {
            // Write-then-report: the workout stays in memory and on screen,
            // only the blob write failed.
            tracing::error!(error = %e, "Failed to persist workouts");
            self.form.alert(&e.to_string());
        }

        // find_by_id cannot fail here; the workout was just appended.
        if let Ok(workout) = self.store.find_by_id(&id) {
            self.synchronizer.render_marker(workout, &mut self.map);
            self.synchronizer.render_entry(workout, &mut self.list);
        }

        self.form.hide_and_clear();
        self.form_state = FormState::Idle;
    }

    /// List entry click: pan the map to the workout and count the
    /// interaction. An unknown id is logged and otherwise ignored.
    pub fn on_entry_click(&mut self, id: &WorkoutId) {
        match self.store.find_by_id_mut(id) {
            Ok(workout) => {
                let coordinates = workout.coordinates;
                let count = workout.record_interaction();
                tracing::debug!(%id, count, "Workout entry clicked");
                self.map.pan_to(coordinates);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Entry click for unknown workout");
            }
        }
    }

    /// Clear the store and the persisted blob, then reload the list view.
    pub fn reset(&mut self) {
        if let Err(e) = self.store.clear() {
            tracing::error!(error = %e, "Failed to clear persisted workouts");
            self.form.alert(&e.to_string());
        }
        self.list.clear_entries();
        self.form.hide_and_clear();
        self.form_state = FormState::Idle;
    }

    fn build_workout(
        coordinates: Coordinates,
        kind: WorkoutKind,
        input: &FormInput,
    ) -> Result<Workout, ValidationError> {
        let distance = parse_field("distance", &input.distance)?;
        let duration = parse_field("duration", &input.duration)?;

        match kind {
            WorkoutKind::Running => {
                let cadence = parse_field("cadence", &input.cadence)?;
                Workout::running(coordinates, distance, duration, cadence)
            }
            WorkoutKind::Cycling => {
                let elevation = parse_field("elevation", &input.elevation)?;
                Workout::cycling(coordinates, distance, duration, elevation)
            }
        }
    }

    /// Current form state.
    pub fn form_state(&self) -> FormState {
        self.form_state
    }

    /// The workout store.
    pub fn store(&self) -> &WorkoutStore<S> {
        &self.store
    }

    /// The map surface.
    pub fn map(&self) -> &M {
        &self.map
    }

    /// The list surface.
    pub fn list(&self) -> &L {
        &self.list
    }

    /// The form surface.
    pub fn form(&self) -> &F {
        &self.form
    }
}
