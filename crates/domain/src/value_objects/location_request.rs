//! Location request schema
//!
//! A request names a location in up to three overlapping ways: a ZIP code, a
//! free-text address, or explicit coordinates. The schema only checks the
//! shape of each field. Whether the request is actionable at all is a
//! separate check ([`LocationRequest::ensure_actionable`]) performed by the
//! orchestrating service.

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use super::Coordinates;
use crate::errors::DomainError;

/// User-supplied location descriptor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct LocationRequest {
    /// ZIP code, 5-10 characters
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[validate(length(min = 5, max = 10, message = "must be 5-10 characters"))]
    pub zip: Option<String>,

    /// Free-text address, up to 200 characters
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[validate(length(max = 200, message = "must be at most 200 characters"))]
    pub address: Option<String>,

    /// Latitude in degrees
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub lat: Option<f64>,

    /// Longitude in degrees
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub lon: Option<f64>,
}

/// Optional fields may be absent but never `null`
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

impl LocationRequest {
    /// Request a forecast by ZIP code
    pub fn for_zip(zip: impl Into<String>) -> Self {
        Self {
            zip: Some(zip.into()),
            ..Self::default()
        }
    }

    /// Request a forecast by free-text address
    pub fn for_address(address: impl Into<String>) -> Self {
        Self {
            address: Some(address.into()),
            ..Self::default()
        }
    }

    /// Request a forecast for explicit coordinates
    pub const fn for_coordinates(lat: f64, lon: f64) -> Self {
        Self {
            zip: None,
            address: None,
            lat: Some(lat),
            lon: Some(lon),
        }
    }

    /// Parse and validate a raw request body
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the body is not JSON or violates the schema.
    pub fn parse(body: &[u8]) -> Result<Self, DomainError> {
        let raw: serde_json::Value = serde_json::from_slice(body)
            .map_err(|e| DomainError::invalid_input(format!("malformed JSON: {e}")))?;
        Self::from_json(&raw)
    }

    /// Validate an untrusted JSON value against the location schema
    ///
    /// There is no partial success: any type mismatch or length violation
    /// rejects the whole value.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` describing the first class of violation found.
    pub fn from_json(raw: &serde_json::Value) -> Result<Self, DomainError> {
        if !raw.is_object() {
            return Err(DomainError::invalid_input("expected a JSON object"));
        }

        let request =
            Self::deserialize(raw).map_err(|e| DomainError::invalid_input(e.to_string()))?;

        request.validate().map_err(|e| {
            let mut errors: Vec<String> = e
                .field_errors()
                .iter()
                .flat_map(|(field, errors)| {
                    errors
                        .iter()
                        .map(|error| {
                            format!(
                                "{}: {}",
                                field,
                                error
                                    .message
                                    .as_ref()
                                    .map_or_else(|| error.code.to_string(), ToString::to_string)
                            )
                        })
                        .collect::<Vec<_>>()
                })
                .collect();
            errors.sort();
            DomainError::invalid_input(errors.join("; "))
        })?;

        Ok(request)
    }

    /// Explicit coordinates, when both components are present
    pub fn coordinates(&self) -> Option<Coordinates> {
        self.lat
            .zip(self.lon)
            .and_then(|(lat, lon)| Coordinates::new(lat, lon).ok())
    }

    /// ZIP code with surrounding whitespace removed, if non-empty
    pub fn zip_query(&self) -> Option<&str> {
        non_blank(self.zip.as_deref())
    }

    /// Address with surrounding whitespace removed, if non-empty
    pub fn address_query(&self) -> Option<&str> {
        non_blank(self.address.as_deref())
    }

    /// Whether the request names a location in at least one usable way
    pub fn has_location(&self) -> bool {
        self.coordinates().is_some()
            || self.zip_query().is_some()
            || self.address_query().is_some()
    }

    /// Require at least one of coordinates, ZIP code or address
    ///
    /// # Errors
    ///
    /// Returns `LocationRequired` if the request names no location.
    pub fn ensure_actionable(&self) -> Result<(), DomainError> {
        if self.has_location() {
            Ok(())
        } else {
            Err(DomainError::LocationRequired)
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn accepts_zip_only() {
        let request = LocationRequest::from_json(&json!({"zip": "12345"})).unwrap();
        assert_eq!(request, LocationRequest::for_zip("12345"));
    }

    #[test]
    fn accepts_address_without_zip() {
        let request =
            LocationRequest::from_json(&json!({"address": "1600 Pennsylvania Ave NW"})).unwrap();
        assert_eq!(request.address.as_deref(), Some("1600 Pennsylvania Ave NW"));
        assert!(request.zip.is_none());
    }

    #[test]
    fn zip_length_bounds_are_inclusive() {
        assert!(LocationRequest::from_json(&json!({"zip": "12345"})).is_ok());
        assert!(LocationRequest::from_json(&json!({"zip": "12345-6789"})).is_ok());
        assert!(LocationRequest::from_json(&json!({"zip": "1234"})).is_err());
        assert!(LocationRequest::from_json(&json!({"zip": "12345-67890"})).is_err());
    }

    #[test]
    fn rejects_too_short_zip() {
        let err = LocationRequest::from_json(&json!({"zip": "123"})).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert!(err.to_string().contains("zip"));
    }

    #[test]
    fn rejects_long_address() {
        let address = "a".repeat(201);
        assert!(LocationRequest::from_json(&json!({"address": address})).is_err());

        let address = "a".repeat(200);
        assert!(LocationRequest::from_json(&json!({"address": address})).is_ok());
    }

    #[test]
    fn address_length_counts_characters() {
        let address = "é".repeat(200);
        assert!(LocationRequest::from_json(&json!({"address": address})).is_ok());
    }

    #[test]
    fn rejects_non_numeric_coordinates() {
        assert!(LocationRequest::from_json(&json!({"lat": "not-a-number"})).is_err());
        assert!(LocationRequest::from_json(&json!({"lat": 1, "lon": true})).is_err());
    }

    #[test]
    fn rejects_wrong_field_types() {
        assert!(LocationRequest::from_json(&json!({"zip": 12345})).is_err());
        assert!(LocationRequest::from_json(&json!({"address": ["x"]})).is_err());
    }

    #[test]
    fn rejects_null_fields() {
        assert!(LocationRequest::from_json(&json!({"zip": null})).is_err());
        assert!(LocationRequest::from_json(&json!({"lat": null, "lon": 2})).is_err());
    }

    #[test]
    fn rejects_non_object_values() {
        assert!(LocationRequest::from_json(&json!([])).is_err());
        assert!(LocationRequest::from_json(&json!("12345")).is_err());
        assert!(LocationRequest::from_json(&json!(null)).is_err());
    }

    #[test]
    fn ignores_unknown_fields() {
        let request =
            LocationRequest::from_json(&json!({"zip": "90210", "units": "metric"})).unwrap();
        assert_eq!(request.zip.as_deref(), Some("90210"));
    }

    #[test]
    fn empty_object_validates_but_is_not_actionable() {
        let request = LocationRequest::from_json(&json!({})).unwrap();
        assert!(!request.has_location());
        assert!(matches!(
            request.ensure_actionable(),
            Err(DomainError::LocationRequired)
        ));
    }

    #[test]
    fn parse_rejects_malformed_json() {
        let err = LocationRequest::parse(b"{zip: 12345").unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn parse_accepts_integer_coordinates() {
        let request = LocationRequest::parse(br#"{"lat": 1, "lon": 2}"#).unwrap();
        let coords = request.coordinates().unwrap();
        assert!((coords.lat() - 1.0).abs() < f64::EPSILON);
        assert!((coords.lon() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn coordinates_need_both_components() {
        let request = LocationRequest {
            lat: Some(1.0),
            ..LocationRequest::default()
        };
        assert!(request.coordinates().is_none());
        assert!(!request.has_location());
    }

    #[test]
    fn blank_zip_and_address_do_not_count() {
        let request = LocationRequest {
            zip: Some("     ".to_string()),
            address: Some("   ".to_string()),
            ..LocationRequest::default()
        };
        assert!(request.zip_query().is_none());
        assert!(request.address_query().is_none());
        assert!(!request.has_location());
    }

    #[test]
    fn queries_are_trimmed() {
        let request = LocationRequest::for_address("  1 Main St ");
        assert_eq!(request.address_query(), Some("1 Main St"));
    }

    #[test]
    fn serialization_skips_absent_fields() {
        let json = serde_json::to_value(LocationRequest::for_zip("90210")).unwrap();
        assert_eq!(json, json!({"zip": "90210"}));
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;
    use serde_json::json;

    use super::*;

    proptest! {
        #[test]
        fn zip_accepted_iff_length_in_bounds(zip in "[0-9-]{0,15}") {
            let result = LocationRequest::from_json(&json!({"zip": zip}));
            let len = zip.chars().count();
            prop_assert_eq!(result.is_ok(), (5..=10).contains(&len));
        }

        #[test]
        fn address_accepted_iff_length_in_bounds(address in "[a-zA-Z0-9 ,]{0,260}") {
            let result = LocationRequest::from_json(&json!({"address": address}));
            let len = address.chars().count();
            prop_assert_eq!(result.is_ok(), len <= 200);
        }

        #[test]
        fn any_finite_coordinates_are_actionable(lat in -90.0f64..90.0, lon in -180.0f64..180.0) {
            let request = LocationRequest::from_json(&json!({"lat": lat, "lon": lon})).unwrap();
            prop_assert!(request.has_location());
        }
    }
}
