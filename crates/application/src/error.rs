//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// No resolution strategy produced coordinates
    #[error("Unable to resolve location")]
    LocationUnresolved,

    /// Weather metadata endpoint answered with a non-success status
    #[error("weather metadata lookup failed ({status})")]
    MetadataLookupFailed {
        /// Upstream HTTP status code
        status: u16,
    },

    /// Metadata carried no usable forecast URL
    #[error("no forecast available")]
    NoForecastAvailable,

    /// Forecast endpoint answered with a non-success status
    #[error("forecast fetch failed ({status})")]
    ForecastFetchFailed {
        /// Upstream HTTP status code
        status: u16,
    },

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Cache store error
    #[error("Cache error: {0}")]
    Cache(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Whether the error reports a specific upstream weather failure
    pub const fn is_upstream_failure(&self) -> bool {
        matches!(
            self,
            Self::MetadataLookupFailed { .. }
                | Self::NoForecastAvailable
                | Self::ForecastFetchFailed { .. }
        )
    }
}
