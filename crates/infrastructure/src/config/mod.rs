//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server and logging settings
//! - `cache`: Forecast cache store selection and TTL
//!
//! The weather and geocoding sections reuse the integration crates' own
//! configuration types.

mod cache;
mod server;

use integration_geocoding::GeocodingConfig;
use integration_weather::WeatherConfig;
use serde::{Deserialize, Serialize};

pub use cache::{CacheBackend, CacheConfig, UPSTASH_TOKEN_ENV, UPSTASH_URL_ENV};
pub use server::ServerConfig;

use crate::telemetry::LogFormat;

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "SIMPLE_WEATHER";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// weather.gov configuration
    #[serde(default)]
    pub weather: WeatherConfig,

    /// ZIP and address geocoder configuration
    #[serde(default)]
    pub geocoding: GeocodingConfig,

    /// Forecast cache configuration
    #[serde(default)]
    pub cache: CacheConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// Sources, lowest precedence first: built-in defaults, `config.toml` in
    /// the working directory, `SIMPLE_WEATHER_*` variables, then the bare
    /// Upstash variables for any cache credential still unset.
    pub fn load() -> Result<Self, config::ConfigError> {
        let mut config = Self::from_sources(
            config::File::with_name("config").required(false),
            Self::environment(),
        )?;
        config
            .cache
            .apply_upstash_fallback(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Environment source, e.g. `SIMPLE_WEATHER_SERVER__PORT=8080`
    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn from_sources<F>(file: F, env: config::Environment) -> Result<Self, config::ConfigError>
    where
        F: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize()
    }

    /// Reject settings the service cannot run with
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        let mut problems = Vec::new();

        for (name, value) in [
            ("weather.base_url", &self.weather.base_url),
            ("weather.user_agent", &self.weather.user_agent),
            ("geocoding.zip_base_url", &self.geocoding.zip_base_url),
            ("geocoding.census_base_url", &self.geocoding.census_base_url),
        ] {
            if value.trim().is_empty() {
                problems.push(format!("{name} must not be empty"));
            }
        }

        for (name, value) in [
            ("weather.timeout_secs", self.weather.timeout_secs),
            ("geocoding.timeout_secs", self.geocoding.timeout_secs),
            ("cache.ttl_secs", self.cache.ttl_secs),
            ("cache.timeout_secs", self.cache.timeout_secs),
        ] {
            if value == 0 {
                problems.push(format!("{name} must be greater than zero"));
            }
        }

        if LogFormat::parse(&self.server.log_format).is_none() {
            problems.push(format!(
                "server.log_format must be \"text\" or \"json\", got \"{}\"",
                self.server.log_format
            ));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(config::ConfigError::Message(problems.join("; ")))
        }
    }
}
