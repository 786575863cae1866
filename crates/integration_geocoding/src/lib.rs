//! US geocoding integration for Simple Weather
//!
//! Resolves ZIP codes through [Zippopotam.us](https://api.zippopotam.us) and
//! free-text addresses through the
//! [US Census geocoder](https://geocoding.geo.census.gov).
//!
//! # Architecture
//!
//! [`GeocodingClient`] is the shared interface, implemented by
//! [`ZippopotamClient`] and [`CensusGeocodingClient`]. Both take their base URL
//! from [`GeocodingConfig`] so tests can point them at a mock server.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_geocoding::{GeocodingClient, GeocodingConfig, ZippopotamClient};
//!
//! let client = ZippopotamClient::new(&GeocodingConfig::default())?;
//! let coordinates = client.geocode("90210").await?;
//! ```

mod census;
mod client;
mod config;
mod error;
mod zippopotam;

pub use census::CensusGeocodingClient;
pub use client::GeocodingClient;
pub use config::GeocodingConfig;
pub use error::GeocodingError;
pub use zippopotam::ZippopotamClient;
