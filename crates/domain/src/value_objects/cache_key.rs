//! Cache key derivation for forecast lookups

use std::fmt;

use serde::{Deserialize, Serialize};

use super::LocationRequest;

/// Prefix shared by every forecast cache key
pub const CACHE_KEY_PREFIX: &str = "weather";

/// Deterministic identity of a request's cached forecast
///
/// Precedence is ZIP code, then address, then the `lat,lon` pair. This is
/// independent of resolution order: a request carrying both a ZIP code and
/// coordinates is keyed by the ZIP code but resolved by the coordinates.
/// Blank zip and address values are skipped.
///
/// # Examples
///
/// ```
/// use domain::{CacheKey, LocationRequest};
///
/// assert_eq!(CacheKey::derive(&LocationRequest::for_zip("12345")).as_str(), "weather:12345");
/// assert_eq!(CacheKey::derive(&LocationRequest::for_coordinates(1.0, 2.0)).as_str(), "weather:1,2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CacheKey(String);

impl CacheKey {
    /// Derive the key for a validated request
    ///
    /// A request without zip, address or coordinates yields a degenerate
    /// `weather:undefined,undefined` key. Such requests are refused earlier
    /// by [`LocationRequest::ensure_actionable`].
    pub fn derive(request: &LocationRequest) -> Self {
        let locator = if let Some(zip) = request.zip.as_deref().filter(|z| !z.trim().is_empty()) {
            zip.to_string()
        } else if let Some(address) = request
            .address
            .as_deref()
            .filter(|a| !a.trim().is_empty())
        {
            address.to_string()
        } else {
            format!(
                "{},{}",
                render_component(request.lat),
                render_component(request.lon)
            )
        };

        Self(format!("{CACHE_KEY_PREFIX}:{locator}"))
    }

    /// Get the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn render_component(value: Option<f64>) -> String {
    value.map_or_else(|| "undefined".to_string(), |v| v.to_string())
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
