//! Geocoding service configuration

use serde::{Deserialize, Serialize};

/// Configuration for the ZIP and address geocoders
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Base URL for the Zippopotam.us API
    #[serde(default = "default_zip_base_url")]
    pub zip_base_url: String,

    /// Base URL for the Census geocoder
    #[serde(default = "default_census_base_url")]
    pub census_base_url: String,

    /// Census address benchmark
    #[serde(default = "default_census_benchmark")]
    pub census_benchmark: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_zip_base_url() -> String {
    "https://api.zippopotam.us".to_string()
}

fn default_census_base_url() -> String {
    "https://geocoding.geo.census.gov".to_string()
}

fn default_census_benchmark() -> String {
    "Public_AR_Current".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            zip_base_url: default_zip_base_url(),
            census_base_url: default_census_base_url(),
            census_benchmark: default_census_benchmark(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GeocodingConfig {
    /// Configuration pointing both geocoders at one mock server
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            zip_base_url: base_url.to_string(),
            census_base_url: base_url.to_string(),
            timeout_secs: 5,
            ..Self::default()
        }
    }
}
