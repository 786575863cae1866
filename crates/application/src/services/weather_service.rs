//! Forecast lookup orchestration
//!
//! Runs one lookup end to end: presence check, cache read, coordinate
//! resolution, upstream fetch and cache write.

use std::{fmt, sync::Arc};

use domain::{CacheKey, ForecastDocument, LocationRequest};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

use crate::{
    error::ApplicationError,
    ports::ForecastPort,
    services::{CoordinateResolver, ForecastCache},
};

/// Where a returned forecast came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForecastSource {
    /// Served from the cache store
    Cache,
    /// Fetched from the weather service during this request
    Remote,
}

impl fmt::Display for ForecastSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Cache => "cache",
            Self::Remote => "remote",
        })
    }
}

/// Successful lookup result, serialised as `{source, data}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherLookup {
    /// Origin of the forecast
    pub source: ForecastSource,
    /// The forecast document, exactly as returned upstream
    pub data: ForecastDocument,
}

/// Orchestrates a forecast lookup for a validated request
pub struct WeatherService {
    resolver: CoordinateResolver,
    forecasts: Arc<dyn ForecastPort>,
    cache: ForecastCache,
}

impl fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherService")
            .field("resolver", &self.resolver)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

impl WeatherService {
    /// Create a new weather service
    pub fn new(
        resolver: CoordinateResolver,
        forecasts: Arc<dyn ForecastPort>,
        cache: ForecastCache,
    ) -> Self {
        Self {
            resolver,
            forecasts,
            cache,
        }
    }

    /// Look up the forecast for `request`
    ///
    /// `contact` is the optional caller contact email forwarded upstream.
    ///
    /// # Errors
    ///
    /// - `Domain(LocationRequired)` if the request names no location
    /// - `LocationUnresolved` if no strategy produced coordinates
    /// - `MetadataLookupFailed`, `NoForecastAvailable`, `ForecastFetchFailed`
    ///   for stage-specific upstream failures
    /// - `ExternalService` / `Internal` for anything unexpected
    #[instrument(skip(self, request, contact))]
    pub async fn lookup(
        &self,
        request: &LocationRequest,
        contact: Option<&str>,
    ) -> Result<WeatherLookup, ApplicationError> {
        request.ensure_actionable()?;

        let key = CacheKey::derive(request);
        if let Some(data) = self.cache.get(&key).await {
            info!(key = %key, source = %ForecastSource::Cache, "Forecast served");
            return Ok(WeatherLookup {
                source: ForecastSource::Cache,
                data,
            });
        }

        let coordinates = self.resolver.resolve(request).await?;

        let data = self
            .forecasts
            .fetch_forecast(coordinates, contact)
            .await
            .inspect_err(|e| {
                if !e.is_upstream_failure() {
                    error!(error = %e, %coordinates, "Unexpected error fetching forecast");
                }
            })?;

        self.cache.put(&key, &data).await;

        info!(key = %key, source = %ForecastSource::Remote, "Forecast served");
        Ok(WeatherLookup {
            source: ForecastSource::Remote,
            data,
        })
    }
}
