//! Forecast lookup endpoint

use application::WeatherLookup;
use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::HeaderMap,
};
use domain::{DomainError, LocationRequest};
use tracing::{debug, instrument};

use crate::{error::ApiError, state::AppState};

/// Request header carrying the caller's contact email
pub const USER_EMAIL_HEADER: &str = "x-user-email";

/// Look up the forecast for a location
///
/// The body is parsed as JSON regardless of its declared content type.
#[instrument(skip(state, headers, body), fields(body_len = body.len()))]
pub async fn lookup_weather(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<WeatherLookup>, ApiError> {
    let request = LocationRequest::parse(&body).inspect_err(|e| {
        if let DomainError::InvalidInput(detail) = e {
            debug!(%detail, "Rejected request body");
        }
    })?;

    let contact = headers
        .get(USER_EMAIL_HEADER)
        .and_then(|value| value.to_str().ok());

    let lookup = state.weather_service.lookup(&request, contact).await?;
    Ok(Json(lookup))
}
