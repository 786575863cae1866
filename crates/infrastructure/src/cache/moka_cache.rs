//! Moka in-memory cache implementation
//!
//! Thread-safe in-process cache with TTL support. Intended for local
//! development where no Upstash database is configured.

use std::time::Duration;

use application::{error::ApplicationError, ports::CachePort};
use async_trait::async_trait;
use moka::future::Cache;
use tracing::{debug, instrument};

/// Configuration for Moka cache
#[derive(Debug, Clone, Copy)]
pub struct MokaCacheConfig {
    /// Maximum number of entries
    pub max_entries: u64,
    /// Lifetime of every entry
    pub ttl: Duration,
}

impl Default for MokaCacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 10_000,
            ttl: Duration::from_secs(3600), // 1 hour
        }
    }
}

/// Moka-based in-memory cache
///
/// Note: Moka 0.12 uses a global TTL configured at build time. The TTL passed
/// to `set_bytes` is ignored in favour of the cache-level TTL, which is built
/// from the same configured forecast TTL.
pub struct MokaCache {
    cache: Cache<String, Vec<u8>>,
}

impl std::fmt::Debug for MokaCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaCache")
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}

impl MokaCache {
    /// Create a new Moka cache with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(MokaCacheConfig::default())
    }

    /// Create a new Moka cache with custom configuration
    #[must_use]
    pub fn with_config(config: MokaCacheConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_entries)
            .time_to_live(config.ttl)
            .build();

        Self { cache }
    }

    /// Approximate number of live entries
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }
}

impl Default for MokaCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CachePort for MokaCache {
    #[instrument(skip(self), level = "debug")]
    async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, ApplicationError> {
        let value = self.cache.get(key).await;
        debug!(key = %key, hit = value.is_some(), "Cache lookup");
        Ok(value)
    }

    #[instrument(skip(self, value), level = "debug")]
    async fn set_bytes(
        &self,
        key: &str,
        value: Vec<u8>,
        _ttl: Duration,
    ) -> Result<(), ApplicationError> {
        self.cache.insert(key.to_string(), value).await;
        debug!(key = %key, "Cache set");
        Ok(())
    }
}
