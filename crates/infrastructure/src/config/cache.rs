//! Forecast cache configuration.

use std::fmt;

use application::ports::ttl;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Environment variable holding the Upstash REST URL
pub const UPSTASH_URL_ENV: &str = "UPSTASH_REDIS_REST_URL";
/// Environment variable holding the Upstash REST token
pub const UPSTASH_TOKEN_ENV: &str = "UPSTASH_REDIS_REST_TOKEN";

/// Which cache store to run with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheBackend {
    /// Upstash Redis over its REST interface
    Upstash,
    /// In-process Moka cache
    InMemory,
    /// No cache store
    Disabled,
}

/// Cache configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Upstash Redis REST endpoint
    #[serde(default)]
    pub upstash_url: Option<String>,

    /// Upstash Redis REST token (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub upstash_token: Option<SecretString>,

    /// Forecast TTL in seconds (default: 1 hour)
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,

    /// Use an in-process cache when Upstash is not configured
    #[serde(default)]
    pub in_memory: bool,

    /// Maximum number of entries in the in-process cache
    #[serde(default = "default_memory_max_entries")]
    pub memory_max_entries: u64,

    /// Upstash request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

const fn default_ttl_secs() -> u64 {
    ttl::FORECAST.as_secs()
}

const fn default_memory_max_entries() -> u64 {
    10_000
}

const fn default_timeout_secs() -> u64 {
    5
}

impl fmt::Debug for CacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheConfig")
            .field("upstash_url", &self.upstash_url)
            .field(
                "upstash_token",
                &if self.upstash_token.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("ttl_secs", &self.ttl_secs)
            .field("in_memory", &self.in_memory)
            .field("memory_max_entries", &self.memory_max_entries)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            upstash_url: None,
            upstash_token: None,
            ttl_secs: default_ttl_secs(),
            in_memory: false,
            memory_max_entries: default_memory_max_entries(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl CacheConfig {
    /// In-process cache configuration for tests and local runs
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            in_memory: true,
            ..Self::default()
        }
    }

    /// Forecast TTL as a Duration
    #[must_use]
    pub const fn ttl(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.ttl_secs)
    }

    /// Upstash credentials, when both are present and non-empty
    #[must_use]
    pub fn upstash_credentials(&self) -> Option<(&str, &SecretString)> {
        let url = self.upstash_url.as_deref().filter(|u| !u.trim().is_empty())?;
        let token = self
            .upstash_token
            .as_ref()
            .filter(|t| !t.expose_secret().trim().is_empty())?;
        Some((url, token))
    }

    /// Store selected by this configuration
    #[must_use]
    pub fn backend(&self) -> CacheBackend {
        if self.upstash_credentials().is_some() {
            CacheBackend::Upstash
        } else if self.in_memory {
            CacheBackend::InMemory
        } else {
            CacheBackend::Disabled
        }
    }

    /// Fill missing Upstash credentials from the bare Upstash variables
    pub fn apply_upstash_fallback<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if self.upstash_url.is_none() {
            self.upstash_url = lookup(UPSTASH_URL_ENV).filter(|v| !v.is_empty());
        }
        if self.upstash_token.is_none() {
            self.upstash_token = lookup(UPSTASH_TOKEN_ENV)
                .filter(|v| !v.is_empty())
                .map(SecretString::from);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_upstash(url: &str, token: &str) -> CacheConfig {
        CacheConfig {
            upstash_url: Some(url.to_string()),
            upstash_token: Some(SecretString::from(token.to_string())),
            ..CacheConfig::default()
        }
    }

    #[test]
    fn default_is_disabled_with_one_hour_ttl() {
        let config = CacheConfig::default();
        assert_eq!(config.backend(), CacheBackend::Disabled);
        assert_eq!(config.ttl(), ttl::FORECAST);
    }

    #[test]
    fn upstash_wins_over_in_memory() {
        let mut config = with_upstash("https://eu1.upstash.io", "token");
        config.in_memory = true;
        assert_eq!(config.backend(), CacheBackend::Upstash);
    }

    #[test]
    fn incomplete_upstash_credentials_are_ignored() {
        let mut config = CacheConfig::in_memory();
        config.upstash_url = Some("https://eu1.upstash.io".to_string());
        assert_eq!(config.backend(), CacheBackend::InMemory);

        let config = with_upstash("https://eu1.upstash.io", "   ");
        assert_eq!(config.backend(), CacheBackend::Disabled);
    }

    #[test]
    fn fallback_fills_only_missing_values() {
        let mut config = CacheConfig {
            upstash_url: Some("https://configured.upstash.io".to_string()),
            ..CacheConfig::default()
        };
        config.apply_upstash_fallback(|name| match name {
            UPSTASH_URL_ENV => Some("https://env.upstash.io".to_string()),
            UPSTASH_TOKEN_ENV => Some("env-token".to_string()),
            _ => None,
        });

        assert_eq!(
            config.upstash_url.as_deref(),
            Some("https://configured.upstash.io")
        );
        assert_eq!(
            config.upstash_token.as_ref().map(ExposeSecret::expose_secret),
            Some("env-token")
        );
    }

    #[test]
    fn fallback_ignores_empty_variables() {
        let mut config = CacheConfig::default();
        config.apply_upstash_fallback(|_| Some(String::new()));
        assert!(config.upstash_url.is_none());
        assert!(config.upstash_token.is_none());
    }

    #[test]
    fn debug_redacts_token() {
        let config = with_upstash("https://eu1.upstash.io", "super-secret");
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn token_is_never_serialized() {
        let config = with_upstash("https://eu1.upstash.io", "super-secret");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("super-secret"));
        assert!(!json.contains("upstash_token"));
    }
}
