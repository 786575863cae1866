//! API error handling
//!
//! Client and upstream errors carry a fixed, descriptive message. Internal
//! errors always return a generic message; the detail is logged only.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::DomainError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Message returned for every internal failure
pub const INTERNAL_ERROR_MESSAGE: &str = "unexpected error fetching forecast";

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Bad gateway: {0}")]
    BadGateway(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
            Self::Internal(detail) => {
                error!(error = %detail, "Request failed unexpectedly");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            },
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::LocationRequired => Self::BadRequest(err.to_string()),
            DomainError::InvalidInput(_)
            | DomainError::InvalidCoordinates
            | DomainError::InvalidEmailAddress(_) => Self::BadRequest("Invalid input".to_string()),
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(e) => e.into(),
            ApplicationError::LocationUnresolved => Self::BadRequest(err.to_string()),
            ApplicationError::MetadataLookupFailed { .. }
            | ApplicationError::NoForecastAvailable
            | ApplicationError::ForecastFetchFailed { .. } => Self::BadGateway(err.to_string()),
            ApplicationError::ExternalService(msg)
            | ApplicationError::Cache(msg)
            | ApplicationError::Configuration(msg)
            | ApplicationError::Internal(msg) => Self::Internal(msg),
        }
    }
}
