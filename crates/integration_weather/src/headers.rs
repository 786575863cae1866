//! Outbound request headers for weather.gov
//!
//! The NWS usage policy asks every client to identify itself with a
//! `User-Agent`. A caller-supplied contact email is added when valid.

use domain::ContactEmail;
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use tracing::debug;

/// Identifying user agent sent when none is configured
pub const DEFAULT_USER_AGENT: &str = "Simple-Weather (https://github.com/tgenz1213/Simple-Weather)";

/// Accepted response media types
pub const ACCEPT_VALUE: &str = "application/geo+json,application/json";

/// Header carrying the caller's contact email
pub const CONTACT_HEADER: &str = "x-user-email";

/// Build the headers for a weather.gov request
///
/// An invalid or empty `contact` is dropped without error. A `user_agent`
/// that is not a legal header value falls back to [`DEFAULT_USER_AGENT`].
///
/// # Examples
///
/// ```
/// use integration_weather::{DEFAULT_USER_AGENT, build_weather_headers};
///
/// let headers = build_weather_headers(DEFAULT_USER_AGENT, Some("dev@example.com"));
/// assert_eq!(headers["x-user-email"], "dev@example.com");
///
/// let headers = build_weather_headers(DEFAULT_USER_AGENT, Some("not-an-email"));
/// assert!(!headers.contains_key("x-user-email"));
/// ```
pub fn build_weather_headers(user_agent: &str, contact: Option<&str>) -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(3);

    let agent = HeaderValue::from_str(user_agent)
        .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_USER_AGENT));
    headers.insert(USER_AGENT, agent);
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));

    if let Some(email) = ContactEmail::from_optional(contact) {
        match HeaderValue::from_str(email.as_str()) {
            Ok(value) => {
                headers.insert(HeaderName::from_static(CONTACT_HEADER), value);
            },
            Err(_) => debug!("Contact email is not a valid header value, dropping it"),
        }
    }

    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_headers_always_present() {
        let headers = build_weather_headers(DEFAULT_USER_AGENT, None);
        assert_eq!(headers[USER_AGENT], DEFAULT_USER_AGENT);
        assert_eq!(headers[ACCEPT], ACCEPT_VALUE);
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn valid_email_is_forwarded_verbatim() {
        let headers = build_weather_headers(DEFAULT_USER_AGENT, Some("Dev@Example.com"));
        assert_eq!(headers[CONTACT_HEADER], "Dev@Example.com");
    }

    #[test]
    fn invalid_email_is_dropped() {
        let headers = build_weather_headers(DEFAULT_USER_AGENT, Some("not-an-email"));
        assert!(!headers.contains_key(CONTACT_HEADER));
    }

    #[test]
    fn empty_email_is_dropped() {
        let headers = build_weather_headers(DEFAULT_USER_AGENT, Some(""));
        assert!(!headers.contains_key(CONTACT_HEADER));
    }

    #[test]
    fn custom_user_agent() {
        let headers = build_weather_headers("my-app (ops@example.com)", None);
        assert_eq!(headers[USER_AGENT], "my-app (ops@example.com)");
    }

    #[test]
    fn illegal_user_agent_falls_back_to_default() {
        let headers = build_weather_headers("bad\nagent", None);
        assert_eq!(headers[USER_AGENT], DEFAULT_USER_AGENT);
    }
}
