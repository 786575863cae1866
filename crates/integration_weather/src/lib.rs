//! weather.gov forecast integration
//!
//! Client for the National Weather Service API (<https://www.weather.gov/documentation/services-web-api>).
//! A forecast takes two calls: `/points/{lat},{lon}` yields grid metadata
//! holding the forecast URL, which is then fetched as-is.

pub mod client;
mod headers;

pub use client::{NwsClient, WeatherClient, WeatherConfig, WeatherError, extract_forecast_url};
pub use headers::{ACCEPT_VALUE, CONTACT_HEADER, DEFAULT_USER_AGENT, build_weather_headers};
