//! Form lifecycle state and raw input parsing.

use crate::geo::Coordinates;
use crate::workouts::{ValidationError, WorkoutKind};

/// State machine over the entry form.
///
/// `Idle` until a map click binds coordinates; submit (valid) returns to
/// `Idle`, submit (invalid) and kind toggles stay `Open`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormState {
    /// Form hidden, no coordinates bound
    Idle,
    /// Form visible, bound to the clicked location
    Open {
        /// Coordinates the next workout will be pinned to
        coordinates: Coordinates,
        /// Currently selected workout kind
        kind: WorkoutKind,
    },
}

/// Raw field values as read from the form.
///
/// Only the extra field matching the selected kind is consulted at submit.
#[derive(Debug, Clone, Default)]
pub struct FormInput {
    /// Distance field, kilometers
    pub distance: String,
    /// Duration field, minutes
    pub duration: String,
    /// Cadence field, steps per minute (running)
    pub cadence: String,
    /// Elevation gain field, meters (cycling)
    pub elevation: String,
}

/// Parse a raw field into a finite number.
pub fn parse_field(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::Unparseable {
            field,
            value: raw.to_string(),
        })?;
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_negative_numbers() {
        assert_eq!(parse_field("distance", "5.2").expect("parse"), 5.2);
        assert_eq!(parse_field("duration", "-5").expect("parse"), -5.0);
        assert_eq!(parse_field("elevation", " 524 ").expect("parse"), 524.0);
    }

    #[test]
    fn rejects_empty_and_garbage() {
        assert!(matches!(
            parse_field("distance", ""),
            Err(ValidationError::Unparseable { field: "distance", .. })
        ));
        assert!(parse_field("cadence", "fast").is_err());
    }

    #[test]
    fn rejects_infinities() {
        assert!(matches!(
            parse_field("duration", "inf"),
            Err(ValidationError::NotFinite { field: "duration" })
        ));
    }
}
