//! Service wiring
//!
//! Builds the forecast pipeline from configuration: coordinate strategies in
//! resolution order, the weather.gov adapter and the cache store.

use std::sync::Arc;

use application::{
    error::ApplicationError,
    ports::{CoordinateStrategy, ForecastPort},
    services::{CoordinateResolver, DirectCoordinates, ForecastCache, WeatherService},
};
use tracing::info;

use crate::{
    adapters::{GeocodingStrategy, NwsForecastAdapter},
    cache::build_cache_store,
    config::AppConfig,
};

/// Coordinate strategies in resolution order
///
/// Direct coordinates first, then the ZIP lookup, then address geocoding.
///
/// # Errors
///
/// Returns an error if a geocoding HTTP client fails to initialize.
pub fn build_strategies(
    config: &AppConfig,
) -> Result<Vec<Arc<dyn CoordinateStrategy>>, ApplicationError> {
    Ok(vec![
        Arc::new(DirectCoordinates),
        Arc::new(GeocodingStrategy::zippopotam(&config.geocoding)?),
        Arc::new(GeocodingStrategy::census(&config.geocoding)?),
    ])
}

/// Build the weather service
///
/// # Errors
///
/// Returns an error if an HTTP client fails to initialize.
pub fn build_weather_service(config: &AppConfig) -> Result<WeatherService, ApplicationError> {
    let resolver = CoordinateResolver::new(build_strategies(config)?);
    let forecasts: Arc<dyn ForecastPort> =
        Arc::new(NwsForecastAdapter::with_config(config.weather.clone())?);
    let cache = ForecastCache::from_store(build_cache_store(&config.cache)?)
        .with_ttl(config.cache.ttl());

    info!(
        strategies = ?resolver.strategy_names(),
        cache_enabled = cache.is_enabled(),
        weather_base_url = %config.weather.base_url,
        "Weather service ready"
    );

    Ok(WeatherService::new(resolver, forecasts, cache))
}
