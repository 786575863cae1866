//! Infrastructure layer - Adapters, configuration and wiring
//!
//! Implements the application ports against the geocoding services,
//! weather.gov and the cache stores, and loads the runtime configuration.

pub mod adapters;
pub mod bootstrap;
pub mod cache;
pub mod config;
pub mod telemetry;

pub use adapters::{GeocodingStrategy, NwsForecastAdapter};
pub use bootstrap::{build_strategies, build_weather_service};
pub use cache::{MokaCache, MokaCacheConfig, UpstashRedisCache, build_cache_store};
pub use config::{AppConfig, CacheConfig, ServerConfig};
pub use telemetry::{LogConfig, LogFormat, init_logging};
