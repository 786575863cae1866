//! Application state shared across handlers

use std::sync::Arc;

use application::WeatherService;
use infrastructure::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Forecast lookup pipeline
    pub weather_service: Arc<WeatherService>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Create state from a service and its configuration
    pub fn new(weather_service: WeatherService, config: AppConfig) -> Self {
        Self {
            weather_service: Arc::new(weather_service),
            config: Arc::new(config),
        }
    }
}
