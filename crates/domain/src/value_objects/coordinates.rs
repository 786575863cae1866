//! Resolved latitude/longitude pair

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A resolved geographic position
///
/// Both components are guaranteed finite. No range check is applied; the
/// upstream weather service rejects positions it does not cover.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    lat: f64,
    lon: f64,
}

impl Coordinates {
    /// Create coordinates from a latitude and longitude
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinates` if either component is NaN or infinite.
    pub fn new(lat: f64, lon: f64) -> Result<Self, DomainError> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(DomainError::InvalidCoordinates);
        }
        Ok(Self { lat, lon })
    }

    /// Get the latitude
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    /// Get the longitude
    #[must_use]
    pub const fn lon(&self) -> f64 {
        self.lon
    }
}

/// Renders as `lat,lon`, the form used in weather.gov point paths
impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}
