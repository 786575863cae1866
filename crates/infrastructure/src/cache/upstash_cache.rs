//! Upstash Redis cache over the REST interface
//!
//! Every command is a `POST` of a JSON array such as `["GET", key]` to the
//! database URL, authenticated with a bearer token. Replies are
//! `{"result": ...}` on success and `{"error": "..."}` on failure.

use std::time::Duration;

use application::{error::ApplicationError, ports::CachePort};
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::{debug, instrument};

/// Upstash Redis REST client implementing the cache port
pub struct UpstashRedisCache {
    client: Client,
    url: String,
    token: SecretString,
}

impl std::fmt::Debug for UpstashRedisCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstashRedisCache")
            .field("url", &self.url)
            .field("token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

/// Reply envelope of the REST interface
#[derive(Debug, Deserialize)]
struct UpstashReply {
    #[serde(default)]
    result: serde_json::Value,
    error: Option<String>,
}

impl UpstashRedisCache {
    /// Create a new Upstash client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(
        url: impl Into<String>,
        token: SecretString,
        timeout: Duration,
    ) -> Result<Self, ApplicationError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
            token,
        })
    }

    /// Run one Redis command and return its `result`
    async fn command(&self, args: &[&str]) -> Result<serde_json::Value, ApplicationError> {
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(self.token.expose_secret())
            .json(args)
            .send()
            .await
            .map_err(|e| ApplicationError::Cache(format!("Upstash request failed: {e}")))?;

        let status = response.status();
        let reply: Result<UpstashReply, _> = response.json().await;

        match reply {
            Ok(UpstashReply {
                error: Some(error), ..
            }) => Err(ApplicationError::Cache(format!(
                "Upstash error ({status}): {error}"
            ))),
            Ok(reply) if status.is_success() => Ok(reply.result),
            Ok(_) => Err(ApplicationError::Cache(format!("Upstash HTTP {status}"))),
            Err(e) => Err(ApplicationError::Cache(format!(
                "Upstash reply unreadable ({status}): {e}"
            ))),
        }
    }
}

#[async_trait]
impl CachePort for UpstashRedisCache {
    #[instrument(skip(self), level = "debug")]
    async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, ApplicationError> {
        match self.command(&["GET", key]).await? {
            serde_json::Value::Null => {
                debug!(key = %key, "Upstash miss");
                Ok(None)
            },
            serde_json::Value::String(value) => {
                debug!(key = %key, "Upstash hit");
                Ok(Some(value.into_bytes()))
            },
            other => Err(ApplicationError::Cache(format!(
                "unexpected GET result: {other}"
            ))),
        }
    }

    #[instrument(skip(self, value), level = "debug")]
    async fn set_bytes(
        &self,
        key: &str,
        value: Vec<u8>,
        ttl: Duration,
    ) -> Result<(), ApplicationError> {
        let value = String::from_utf8(value)
            .map_err(|e| ApplicationError::Cache(format!("value is not UTF-8: {e}")))?;
        let seconds = ttl.as_secs().max(1).to_string();

        self.command(&["SET", key, &value, "EX", &seconds]).await?;
        debug!(key = %key, ttl_secs = %seconds, "Upstash set");
        Ok(())
    }
}
