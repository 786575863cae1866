//! Forecast lookup against a running server

use application::WeatherLookup;
use domain::{ForecastPeriod, select_periods};
use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, instrument};

/// Header carrying the caller's contact email
pub const USER_EMAIL_HEADER: &str = "X-User-Email";

/// Body sent to `POST /api/weather`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LookupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
}

/// Lookup failures as shown to the user
#[derive(Debug, Error)]
pub enum LookupError {
    /// The server answered with a non-success status
    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response: {0}")]
    InvalidResponse(String),
}

impl LookupError {
    fn from_status(status: StatusCode, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("error")?.as_str().map(str::to_string))
            .unwrap_or_else(|| format!("Request failed ({})", status.as_u16()));

        Self::Server {
            status: status.as_u16(),
            message,
        }
    }
}

/// `POST {base_url}/api/weather` and decode the `{source, data}` envelope
#[instrument(skip(client, request, email))]
pub async fn fetch(
    client: &reqwest::Client,
    base_url: &str,
    request: &LookupRequest,
    email: Option<&str>,
) -> Result<WeatherLookup, LookupError> {
    let url = format!("{}/api/weather", base_url.trim_end_matches('/'));
    let mut builder = client.post(&url).json(request);
    if let Some(email) = email.map(str::trim).filter(|e| !e.is_empty()) {
        builder = builder.header(USER_EMAIL_HEADER, email);
    }

    let response = builder
        .send()
        .await
        .map_err(|e| LookupError::Network(e.to_string()))?;
    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|e| LookupError::Network(e.to_string()))?;

    debug!(status = status.as_u16(), bytes = body.len(), "Response received");

    if !status.is_success() {
        return Err(LookupError::from_status(status, &body));
    }

    serde_json::from_slice(&body).map_err(|e| LookupError::InvalidResponse(e.to_string()))
}

/// Render the short forecast, one line per period
pub fn render(lookup: &WeatherLookup) -> String {
    let periods = select_periods(&lookup.data);
    if periods.is_empty() {
        return format!("No forecast periods available (source: {})", lookup.source);
    }

    let mut out = String::new();
    for period in &periods {
        out.push_str(&render_period(period));
        out.push('\n');
    }
    out.push_str(&format!("(source: {})", lookup.source));
    out
}

fn render_period(period: &ForecastPeriod) -> String {
    let temperature = period.temperature.map_or_else(
        || "-".to_string(),
        |t| format!("{t}°{}", period.temperature_unit),
    );

    let wind = [period.wind_speed.as_deref(), period.wind_direction.as_deref()]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "{:<10} {:<16} {:>6}  {}  wind: {}",
        format_date(&period.start_time),
        period.name,
        temperature,
        period.short_forecast,
        if wind.is_empty() { "-" } else { wind.as_str() }
    )
}

fn format_date(start_time: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(start_time).map_or_else(
        |_| start_time.to_string(),
        |dt| dt.format("%a %b %-d").to_string(),
    )
}
