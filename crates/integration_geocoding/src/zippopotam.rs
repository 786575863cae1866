//! Zippopotam.us ZIP code lookup
//!
//! `GET {base}/us/{zip}` answers with the places sharing that ZIP code.
//! The first place's latitude/longitude strings are used.

use async_trait::async_trait;
use domain::Coordinates;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};
use url::Url;

use crate::{
    GeocodingConfig, GeocodingError,
    client::{GeocodingClient, check_status, coordinates, http_client},
};

/// Zippopotam.us ZIP code client
#[derive(Debug)]
pub struct ZippopotamClient {
    client: Client,
    base_url: String,
}

impl ZippopotamClient {
    /// Create a new Zippopotam client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &GeocodingConfig) -> Result<Self, GeocodingError> {
        Ok(Self {
            client: http_client(config)?,
            base_url: config.zip_base_url.clone(),
        })
    }

    /// Lookup URL with the ZIP code as a single encoded path segment
    fn lookup_url(&self, zip: &str) -> Result<Url, GeocodingError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| GeocodingError::InvalidQuery(format!("bad base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| GeocodingError::InvalidQuery("base URL cannot hold a path".to_string()))?
            .pop_if_empty()
            .push("us")
            .push(zip);
        Ok(url)
    }
}

#[async_trait]
impl GeocodingClient for ZippopotamClient {
    #[instrument(skip(self))]
    async fn geocode(&self, query: &str) -> Result<Coordinates, GeocodingError> {
        let zip = query.trim();
        if zip.is_empty() {
            return Err(GeocodingError::InvalidQuery(
                "ZIP code must not be empty".to_string(),
            ));
        }

        let url = self.lookup_url(zip)?;
        debug!(%url, "Looking up ZIP code");

        let response = self.client.get(url).send().await?;
        let response = check_status(response, zip)?;

        let body: ZipLookupResponse = response
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let place = body
            .places
            .into_iter()
            .next()
            .ok_or_else(|| GeocodingError::NotFound(zip.to_string()))?;

        let lat = parse_degrees(place.latitude.as_deref(), "latitude")?;
        let lon = parse_degrees(place.longitude.as_deref(), "longitude")?;

        debug!(%zip, %lat, %lon, "Resolved ZIP code");
        coordinates(lat, lon)
    }
}

/// Parse a degree string, rejecting blanks and non-finite values
fn parse_degrees(raw: Option<&str>, field: &str) -> Result<f64, GeocodingError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| GeocodingError::ParseError(format!("missing {field}")))?;

    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| GeocodingError::ParseError(format!("invalid {field}: {raw}")))
}

/// Raw Zippopotam response
#[derive(Debug, Deserialize)]
struct ZipLookupResponse {
    #[serde(default)]
    places: Vec<ZipPlace>,
}

#[derive(Debug, Deserialize)]
struct ZipPlace {
    latitude: Option<String>,
    longitude: Option<String>,
}
