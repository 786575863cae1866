//! Weather adapter - Implements ForecastPort using integration_weather

use application::{error::ApplicationError, ports::ForecastPort};
use async_trait::async_trait;
use domain::{Coordinates, ForecastDocument};
use integration_weather::{NwsClient, WeatherClient, WeatherConfig, WeatherError};
use tracing::{debug, instrument};

/// Adapter for the weather.gov forecast API
pub struct NwsForecastAdapter {
    client: Box<dyn WeatherClient>,
}

impl std::fmt::Debug for NwsForecastAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NwsForecastAdapter")
            .field("client", &"WeatherClient")
            .finish()
    }
}

impl NwsForecastAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        Self::with_config(WeatherConfig::default())
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client =
            NwsClient::new(config).map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::with_client(Box::new(client)))
    }

    /// Wrap an existing client
    pub fn with_client(client: Box<dyn WeatherClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ForecastPort for NwsForecastAdapter {
    #[instrument(skip(self, contact), fields(coordinates = %coordinates))]
    async fn fetch_forecast(
        &self,
        coordinates: Coordinates,
        contact: Option<&str>,
    ) -> Result<ForecastDocument, ApplicationError> {
        let value = self
            .client
            .fetch_forecast(coordinates, contact)
            .await
            .map_err(map_weather_error)?;

        debug!("Forecast received");
        Ok(ForecastDocument::new(value))
    }
}

fn map_weather_error(e: WeatherError) -> ApplicationError {
    match e {
        WeatherError::MetadataLookupFailed { status } => {
            ApplicationError::MetadataLookupFailed { status }
        },
        WeatherError::NoForecastAvailable => ApplicationError::NoForecastAvailable,
        WeatherError::ForecastFetchFailed { status } => {
            ApplicationError::ForecastFetchFailed { status }
        },
        other @ (WeatherError::RequestFailed(_)
        | WeatherError::ParseError(_)
        | WeatherError::Configuration(_)) => {
            ApplicationError::ExternalService(format!("weather service: {other}"))
        },
    }
}
