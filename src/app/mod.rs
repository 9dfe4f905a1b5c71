//! Application module: interaction controller and form state machine.

pub mod controller;
pub mod form;

pub use controller::TrackerApp;
pub use form::{FormInput, FormState};
