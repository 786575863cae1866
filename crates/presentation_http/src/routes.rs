//! Route definitions

use axum::{Router, http::StatusCode, routing::post};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::{handlers, middleware::RequestIdLayer, state::AppState};

/// Path of the forecast endpoint
pub const WEATHER_PATH: &str = "/api/weather";

/// Create the router
///
/// Only `POST /api/weather` is served. Every other method or path gets an
/// empty 404.
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.config.server.max_body_size_bytes;

    Router::new()
        .route(
            WEATHER_PATH,
            post(handlers::weather::lookup_weather).fallback(not_found),
        )
        .fallback(not_found)
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(RequestIdLayer::new())
        .with_state(state)
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
