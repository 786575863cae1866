//! US Census one-line address geocoder
//!
//! `GET {base}/geocoder/locations/onelineaddress?address=..&benchmark=..&format=json`.
//! The first address match's `x` (longitude) and `y` (latitude) are used.

use async_trait::async_trait;
use domain::Coordinates;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{
    GeocodingConfig, GeocodingError,
    client::{GeocodingClient, check_status, coordinates, http_client},
};

/// Census geocoder client
#[derive(Debug)]
pub struct CensusGeocodingClient {
    client: Client,
    base_url: String,
    benchmark: String,
}

impl CensusGeocodingClient {
    /// Create a new Census geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &GeocodingConfig) -> Result<Self, GeocodingError> {
        Ok(Self {
            client: http_client(config)?,
            base_url: config.census_base_url.trim_end_matches('/').to_string(),
            benchmark: config.census_benchmark.clone(),
        })
    }
}

#[async_trait]
impl GeocodingClient for CensusGeocodingClient {
    #[instrument(skip(self))]
    async fn geocode(&self, query: &str) -> Result<Coordinates, GeocodingError> {
        let address = query.trim();
        if address.is_empty() {
            return Err(GeocodingError::InvalidQuery(
                "Address must not be empty".to_string(),
            ));
        }

        let url = format!("{}/geocoder/locations/onelineaddress", self.base_url);
        let params = [
            ("address", address),
            ("benchmark", self.benchmark.as_str()),
            ("format", "json"),
        ];

        debug!(%address, "Geocoding address");

        let response = self.client.get(&url).query(&params).send().await?;
        let response = check_status(response, address)?;

        let body: CensusResponse = response
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let point = body
            .result
            .and_then(|r| r.address_matches.into_iter().next())
            .and_then(|m| m.coordinates)
            .ok_or_else(|| GeocodingError::NotFound(address.to_string()))?;

        let (Some(lon), Some(lat)) = (point.x, point.y) else {
            return Err(GeocodingError::ParseError(
                "address match without coordinates".to_string(),
            ));
        };

        debug!(%address, %lat, %lon, "Geocoded address");
        coordinates(lat, lon)
    }
}

/// Raw Census geocoder response
#[derive(Debug, Deserialize)]
struct CensusResponse {
    result: Option<CensusResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CensusResult {
    #[serde(default)]
    address_matches: Vec<AddressMatch>,
}

#[derive(Debug, Deserialize)]
struct AddressMatch {
    coordinates: Option<MatchPoint>,
}

#[derive(Debug, Deserialize)]
struct MatchPoint {
    x: Option<f64>,
    y: Option<f64>,
}
