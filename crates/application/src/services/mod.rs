//! Application services - Use case implementations

mod coordinate_resolver;
mod forecast_cache;
mod weather_service;

pub use coordinate_resolver::{CoordinateResolver, DirectCoordinates};
pub use forecast_cache::ForecastCache;
pub use weather_service::{ForecastSource, WeatherLookup, WeatherService};
