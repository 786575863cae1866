//! Geocoding client trait and shared HTTP plumbing

use std::time::Duration;

use async_trait::async_trait;
use domain::Coordinates;
use reqwest::{Client, Response};

use crate::{GeocodingConfig, GeocodingError};

const USER_AGENT: &str = "Simple-Weather (https://github.com/tgenz1213/Simple-Weather)";

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Resolve a query (ZIP code or address) to coordinates
    async fn geocode(&self, query: &str) -> Result<Coordinates, GeocodingError>;
}

pub(crate) fn http_client(config: &GeocodingConfig) -> Result<Client, GeocodingError> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))
}

/// Fail on any non-success status, reporting 404 as no match
pub(crate) fn check_status(response: Response, query: &str) -> Result<Response, GeocodingError> {
    let status = response.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        Err(GeocodingError::NotFound(query.to_string()))
    } else if !status.is_success() {
        Err(GeocodingError::RequestFailed {
            status: status.as_u16(),
        })
    } else {
        Ok(response)
    }
}

pub(crate) fn coordinates(lat: f64, lon: f64) -> Result<Coordinates, GeocodingError> {
    Coordinates::new(lat, lon).map_err(|e| GeocodingError::ParseError(e.to_string()))
}
