//! Geographic coordinates and the geolocation collaborator seam.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl Coordinates {
    /// Create coordinates, validating degree ranges.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::Latitude(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::Longitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.7}, {:.7}]", self.latitude, self.longitude)
    }
}

/// Coordinate validation errors.
#[derive(Debug, Error)]
pub enum CoordinateError {
    #[error("Latitude out of range: {0}")]
    Latitude(f64),

    #[error("Longitude out of range: {0}")]
    Longitude(f64),
}

/// Errors from the geolocation collaborator.
#[derive(Debug, Error)]
pub enum GeolocationError {
    /// Position could not be determined
    #[error("Could not get your position")]
    PositionUnavailable,

    /// The host denied the location request
    #[error("Location permission denied")]
    PermissionDenied,
}

/// One-shot position provider.
///
/// The host requests the position exactly once at startup; there is no
/// retry or cancellation.
pub trait Geolocator {
    /// Resolve the current position, or report why it is unavailable.
    fn locate(&self) -> Result<Coordinates, GeolocationError>;
}

/// Geolocator returning a fixed position, for tests and hosts without a
/// location service.
pub struct FixedGeolocator {
    position: Coordinates,
}

impl FixedGeolocator {
    /// Create a geolocator that always reports the given position.
    pub fn new(position: Coordinates) -> Self {
        Self { position }
    }
}

impl Geolocator for FixedGeolocator {
    fn locate(&self) -> Result<Coordinates, GeolocationError> {
        Ok(self.position)
    }
}

/// Geolocator that always fails, for exercising the degraded startup path.
pub struct UnavailableGeolocator;

impl Geolocator for UnavailableGeolocator {
    fn locate(&self) -> Result<Coordinates, GeolocationError> {
        Err(GeolocationError::PositionUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_latitude() {
        assert!(Coordinates::new(91.0, 0.0).is_err());
        assert!(Coordinates::new(-90.5, 0.0).is_err());
    }

    #[test]
    fn rejects_non_finite_longitude() {
        assert!(Coordinates::new(0.0, f64::NAN).is_err());
        assert!(Coordinates::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn accepts_boundary_values() {
        assert!(Coordinates::new(90.0, -180.0).is_ok());
        assert!(Coordinates::new(-90.0, 180.0).is_ok());
    }
}
