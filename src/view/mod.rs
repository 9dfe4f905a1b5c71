//! View module: render models, collaborator surfaces, and the synchronizer.

pub mod surfaces;
pub mod sync;
pub mod types;

pub use surfaces::{
    FormSurface, ListSurface, MapSurface, RecordingFormSurface, RecordingListSurface,
    RecordingMapSurface,
};
pub use sync::ViewSynchronizer;
pub use types::{ListEntry, MarkerSpec, MetricField};
