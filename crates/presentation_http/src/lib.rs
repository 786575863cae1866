//! Simple Weather HTTP presentation layer
//!
//! This crate provides the `POST /api/weather` endpoint.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use middleware::{REQUEST_ID_HEADER, RequestId, RequestIdLayer};
pub use routes::create_router;
pub use server::{ShutdownOutcome, serve};
pub use state::AppState;
