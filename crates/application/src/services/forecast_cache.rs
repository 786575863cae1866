//! Fail-open forecast cache
//!
//! Wraps an optional cache store. Every store failure is logged and turned
//! into a miss on read or a no-op on write, so the lookup pipeline never
//! sees a cache error.

use std::{fmt, sync::Arc, time::Duration};

use domain::{CacheKey, ForecastDocument};
use tracing::{debug, instrument, warn};

use crate::ports::{CachePort, CachePortExt, ttl};

/// Read-through/write-through gateway in front of the forecast cache store
#[derive(Clone)]
pub struct ForecastCache {
    store: Option<Arc<dyn CachePort>>,
    ttl: Duration,
}

impl fmt::Debug for ForecastCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForecastCache")
            .field("enabled", &self.is_enabled())
            .field("ttl_secs", &self.ttl.as_secs())
            .finish()
    }
}

impl Default for ForecastCache {
    fn default() -> Self {
        Self::disabled()
    }
}

impl ForecastCache {
    /// Cache backed by `store` with the standard forecast TTL
    pub fn new(store: Arc<dyn CachePort>) -> Self {
        Self {
            store: Some(store),
            ttl: ttl::FORECAST,
        }
    }

    /// Cache without a store: every read misses, every write is dropped
    pub const fn disabled() -> Self {
        Self {
            store: None,
            ttl: ttl::FORECAST,
        }
    }

    /// Cache over an optional store
    pub fn from_store(store: Option<Arc<dyn CachePort>>) -> Self {
        store.map_or_else(Self::disabled, Self::new)
    }

    /// Override the entry lifetime
    #[must_use]
    pub const fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Whether a store is configured
    pub const fn is_enabled(&self) -> bool {
        self.store.is_some()
    }

    /// Entry lifetime used on writes
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Look up a cached forecast
    ///
    /// Missing, `null` and undecodable entries are misses, as are store errors.
    #[instrument(skip(self, key), fields(key = %key))]
    pub async fn get(&self, key: &CacheKey) -> Option<ForecastDocument> {
        let store = self.store.as_ref()?;

        match store.get::<serde_json::Value>(key.as_str()).await {
            Ok(Some(value)) if is_present(&value) => {
                debug!("Cache hit for forecast");
                Some(ForecastDocument::new(value))
            },
            Ok(_) => {
                debug!("Cache miss for forecast");
                None
            },
            Err(e) => {
                warn!(error = %e, "Cache read error");
                None
            },
        }
    }

    /// Store a forecast, ignoring any store failure
    #[instrument(skip(self, key, document), fields(key = %key))]
    pub async fn put(&self, key: &CacheKey, document: &ForecastDocument) {
        let Some(store) = self.store.as_ref() else {
            return;
        };

        if let Err(e) = store.set(key.as_str(), document, self.ttl).await {
            warn!(error = %e, "Cache write error");
        } else {
            debug!(ttl_secs = self.ttl.as_secs(), "Cached forecast");
        }
    }
}

/// Stored values that count as a hit
fn is_present(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null | serde_json::Value::Bool(false) => false,
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        serde_json::Value::Bool(true)
        | serde_json::Value::Array(_)
        | serde_json::Value::Object(_) => true,
    }
}
