//! Cache implementations
//!
//! Provides cache stores for the forecast cache:
//! - `UpstashRedisCache`: Upstash Redis through its REST interface
//! - `MokaCache`: In-process cache with TTL support

mod moka_cache;
mod upstash_cache;

use std::sync::Arc;

use application::{error::ApplicationError, ports::CachePort};
use tracing::info;

pub use moka_cache::{MokaCache, MokaCacheConfig};
pub use upstash_cache::UpstashRedisCache;

use crate::config::{CacheBackend, CacheConfig};

/// Build the cache store selected by the configuration
///
/// Returns `None` when caching is disabled.
///
/// # Errors
///
/// Returns an error if the Upstash HTTP client cannot be initialized.
pub fn build_cache_store(
    config: &CacheConfig,
) -> Result<Option<Arc<dyn CachePort>>, ApplicationError> {
    let backend = config.backend();
    let store: Option<Arc<dyn CachePort>> = match backend {
        CacheBackend::Upstash => match config.upstash_credentials() {
            Some((url, token)) => Some(Arc::new(UpstashRedisCache::new(
                url,
                token.clone(),
                std::time::Duration::from_secs(config.timeout_secs),
            )?)),
            None => None,
        },
        CacheBackend::InMemory => Some(Arc::new(MokaCache::with_config(MokaCacheConfig {
            max_entries: config.memory_max_entries,
            ttl: config.ttl(),
        }))),
        CacheBackend::Disabled => None,
    };

    info!(backend = ?backend, ttl_secs = config.ttl_secs, "Forecast cache configured");
    Ok(store)
}
