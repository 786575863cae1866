//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Request body is not valid JSON or violates the location schema
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Request carries neither coordinates, a ZIP code nor an address
    #[error("Location is required")]
    LocationRequired,

    /// Latitude or longitude is not a finite number
    #[error("Invalid coordinates: latitude and longitude must be finite numbers")]
    InvalidCoordinates,

    /// Invalid email address format
    #[error("Invalid email address: {0}")]
    InvalidEmailAddress(String),
}

impl DomainError {
    /// Create an invalid input error
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }
}
