//! weather.gov forecast client
//!
//! HTTP client for the two-stage NWS forecast lookup.

use std::time::Duration;

use async_trait::async_trait;
use domain::Coordinates;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::headers::{DEFAULT_USER_AGENT, build_weather_headers};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Points endpoint answered with a non-success status
    #[error("weather metadata lookup failed ({status})")]
    MetadataLookupFailed {
        /// Upstream HTTP status code
        status: u16,
    },

    /// Points metadata had no string `properties.forecast`
    #[error("no forecast available")]
    NoForecastAvailable,

    /// Forecast endpoint answered with a non-success status
    #[error("forecast fetch failed ({status})")]
    ForecastFetchFailed {
        /// Upstream HTTP status code
        status: u16,
    },

    /// Request to the weather service could not be completed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse a response from the weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The client could not be built from its configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// NWS API base URL (default: <https://api.weather.gov>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Identifying `User-Agent` sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.weather.gov".to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout(),
        }
    }
}

impl WeatherConfig {
    /// Configuration pointing at a mock server
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            timeout_secs: 5,
            ..Self::default()
        }
    }
}

/// Weather client trait for fetching forecasts
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Fetch the raw forecast document for a coordinate pair
    ///
    /// `contact` is forwarded as the contact header when it is a valid email.
    async fn fetch_forecast(
        &self,
        coordinates: Coordinates,
        contact: Option<&str>,
    ) -> Result<serde_json::Value, WeatherError>;
}

/// Pull the forecast URL out of a points response
///
/// Returns `None` unless `properties.forecast` is a string.
pub fn extract_forecast_url(metadata: &serde_json::Value) -> Option<String> {
    metadata
        .get("properties")?
        .get("forecast")?
        .as_str()
        .map(ToString::to_string)
}

/// weather.gov HTTP client implementation
#[derive(Debug)]
pub struct NwsClient {
    client: Client,
    config: WeatherConfig,
}

impl NwsClient {
    /// Create a new NWS client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::Configuration(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, WeatherError> {
        Self::new(WeatherConfig::default())
    }

    /// Points URL for a coordinate pair
    fn points_url(&self, coordinates: Coordinates) -> String {
        format!(
            "{}/points/{},{}",
            self.config.base_url.trim_end_matches('/'),
            coordinates.lat(),
            coordinates.lon()
        )
    }

    async fn get(&self, url: &str, contact: Option<&str>) -> Result<Response, WeatherError> {
        self.client
            .get(url)
            .headers(build_weather_headers(&self.config.user_agent, contact))
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))
    }

    async fn json_body(response: Response) -> Result<serde_json::Value, WeatherError> {
        response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))
    }
}

fn failed_status(response: &Response) -> Option<StatusCode> {
    let status = response.status();
    (!status.is_success()).then_some(status)
}

#[async_trait]
impl WeatherClient for NwsClient {
    #[instrument(skip(self, coordinates, contact), fields(lat = %coordinates.lat(), lon = %coordinates.lon()))]
    async fn fetch_forecast(
        &self,
        coordinates: Coordinates,
        contact: Option<&str>,
    ) -> Result<serde_json::Value, WeatherError> {
        let points_url = self.points_url(coordinates);
        debug!(url = %points_url, "Fetching forecast metadata");

        let response = self.get(&points_url, contact).await?;
        if let Some(status) = failed_status(&response) {
            return Err(WeatherError::MetadataLookupFailed {
                status: status.as_u16(),
            });
        }

        let metadata = Self::json_body(response).await?;
        let forecast_url =
            extract_forecast_url(&metadata).ok_or(WeatherError::NoForecastAvailable)?;
        debug!(url = %forecast_url, "Fetching forecast");

        let response = self.get(&forecast_url, contact).await?;
        if let Some(status) = failed_status(&response) {
            return Err(WeatherError::ForecastFetchFailed {
                status: status.as_u16(),
            });
        }

        Self::json_body(response).await
    }
}
