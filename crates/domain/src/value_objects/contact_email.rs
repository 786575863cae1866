//! Caller-supplied contact email
//!
//! weather.gov asks callers to identify themselves. A contact email is
//! optional and is only forwarded when it passes a strict format check.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::DomainError;

/// A validated contact email address
///
/// Unlike a mailbox identity, the value is kept exactly as supplied so the
/// forwarded header matches what the caller sent.
///
/// # Examples
///
/// ```
/// use domain::ContactEmail;
///
/// let email = ContactEmail::new("dev@example.com").unwrap();
/// assert_eq!(email.as_str(), "dev@example.com");
///
/// assert!(ContactEmail::new("not-an-email").is_err());
/// assert!(ContactEmail::from_optional(Some("")).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(transparent)]
pub struct ContactEmail {
    #[validate(email)]
    value: String,
}

impl ContactEmail {
    /// Create a contact email, validating the format
    ///
    /// # Errors
    ///
    /// Returns an error if the email format is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, DomainError> {
        let candidate = Self {
            value: email.into(),
        };
        candidate
            .validate()
            .map_err(|e| DomainError::InvalidEmailAddress(e.to_string()))?;

        Ok(candidate)
    }

    /// Validate an optional raw header value, dropping anything invalid
    pub fn from_optional(raw: Option<&str>) -> Option<Self> {
        raw.filter(|s| !s.is_empty())
            .and_then(|s| Self::new(s).ok())
    }

    /// Get the email address as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ContactEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
