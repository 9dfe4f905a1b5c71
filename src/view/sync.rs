//! View synchronizer: translates store state into markers and list entries.

use crate::storage::config::MapSettings;
use crate::storage::keyvalue::KeyValueStore;
use crate::storage::store::WorkoutStore;
use crate::view::surfaces::{ListSurface, MapSurface};
use crate::view::types::{ListEntry, MarkerSpec, MetricField};
use crate::workouts::{Workout, WorkoutDetails};

/// Builds render models from workouts and pushes them to the surfaces.
///
/// Rendering is fire-and-forget per workout per target: the synchronizer
/// does not deduplicate, so callers render each workout exactly once to
/// each surface.
pub struct ViewSynchronizer {
    map_settings: MapSettings,
}

impl ViewSynchronizer {
    /// Create a synchronizer with the given map settings.
    pub fn new(map_settings: MapSettings) -> Self {
        Self { map_settings }
    }

    /// Place a marker for `workout`, popup labeled "<icon> <description>".
    pub fn render_marker(&self, workout: &Workout, map: &mut impl MapSurface) {
        map.place_marker(MarkerSpec {
            workout_id: workout.id.clone(),
            coordinates: workout.coordinates,
            kind: workout.kind(),
            popup_text: format!("{} {}", workout.kind().icon(), workout.description),
            popup_max_width: self.map_settings.popup_max_width,
            popup_min_width: self.map_settings.popup_min_width,
        });
    }

    /// Insert a list entry for `workout`.
    pub fn render_entry(&self, workout: &Workout, list: &mut impl ListSurface) {
        list.insert_entry(self.build_entry(workout));
    }

    /// Render list entries for every workout in the restored store.
    ///
    /// Map markers are intentionally not re-placed here: marker placement
    /// waits for the map-ready event, which arrives after restore.
    pub fn render_restored<S: KeyValueStore>(
        &self,
        store: &WorkoutStore<S>,
        list: &mut impl ListSurface,
    ) {
        for workout in store.all() {
            self.render_entry(workout, list);
        }
        tracing::debug!(count = store.len(), "Rendered restored workout list");
    }

    fn build_entry(&self, workout: &Workout) -> ListEntry {
        let icon = workout.kind().icon();
        let mut metrics = vec![
            MetricField::new(icon, workout.distance_km.to_string(), "km"),
            MetricField::new("⏱", workout.duration_min.to_string(), "min"),
        ];

        match workout.details {
            WorkoutDetails::Running {
                cadence_spm,
                pace_min_per_km,
            } => {
                metrics.push(MetricField::new("⚡️", format!("{pace_min_per_km:.1}"), "min/km"));
                metrics.push(MetricField::new("🦶🏼", cadence_spm.to_string(), "spm"));
            }
            WorkoutDetails::Cycling {
                elevation_gain_m,
                speed_km_per_h,
            } => {
                metrics.push(MetricField::new("⚡️", format!("{speed_km_per_h:.1}"), "km/h"));
                metrics.push(MetricField::new("⛰", elevation_gain_m.to_string(), "m"));
            }
        }

        ListEntry {
            workout_id: workout.id.clone(),
            kind: workout.kind(),
            title: workout.description.clone(),
            metrics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Coordinates;
    use crate::view::surfaces::{RecordingListSurface, RecordingMapSurface};

    fn coords() -> Coordinates {
        Coordinates::new(12.87, 77.69).expect("valid coordinates")
    }

    fn synchronizer() -> ViewSynchronizer {
        ViewSynchronizer::new(MapSettings::default())
    }

    #[test]
    fn marker_popup_carries_icon_and_description() {
        let workout = Workout::running(coords(), 5.2, 24.0, 178.0).expect("valid workout");
        let mut map = RecordingMapSurface::new();

        synchronizer().render_marker(&workout, &mut map);

        let marker = &map.markers[0];
        assert_eq!(marker.workout_id, workout.id);
        assert_eq!(marker.coordinates, workout.coordinates);
        assert_eq!(
            marker.popup_text,
            format!("🏃‍♂️ {}", workout.description)
        );
        assert_eq!(marker.popup_max_width, 250);
        assert_eq!(marker.popup_min_width, 100);
    }

    #[test]
    fn running_entry_shows_pace_to_one_decimal() {
        let workout = Workout::running(coords(), 5.2, 24.0, 178.0).expect("valid workout");
        let mut list = RecordingListSurface::new();

        synchronizer().render_entry(&workout, &mut list);

        let entry = &list.entries[0];
        assert_eq!(entry.metrics.len(), 4);
        assert_eq!(entry.metrics[0].value, "5.2");
        assert_eq!(entry.metrics[0].unit, "km");
        assert_eq!(entry.metrics[1].value, "24");
        assert_eq!(entry.metrics[2].value, "4.6");
        assert_eq!(entry.metrics[2].unit, "min/km");
        assert_eq!(entry.metrics[3].value, "178");
        assert_eq!(entry.metrics[3].unit, "spm");
    }

    #[test]
    fn cycling_entry_shows_speed_to_one_decimal() {
        let workout = Workout::cycling(coords(), 27.0, 95.0, 524.0).expect("valid workout");
        let mut list = RecordingListSurface::new();

        synchronizer().render_entry(&workout, &mut list);

        let entry = &list.entries[0];
        assert_eq!(entry.metrics[2].value, "17.1");
        assert_eq!(entry.metrics[2].unit, "km/h");
        assert_eq!(entry.metrics[3].value, "524");
        assert_eq!(entry.metrics[3].unit, "m");
    }

    #[test]
    fn rendering_twice_duplicates_the_entry() {
        let workout = Workout::running(coords(), 5.0, 25.0, 170.0).expect("valid workout");
        let mut list = RecordingListSurface::new();

        let sync = synchronizer();
        sync.render_entry(&workout, &mut list);
        sync.render_entry(&workout, &mut list);

        assert_eq!(list.entries.len(), 2);
    }
}
