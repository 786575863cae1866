//! Domain layer for Simple Weather
//!
//! Contains the location request schema, resolved coordinates, cache keys and
//! the opaque forecast document. This layer performs no I/O.

pub mod errors;
pub mod forecast;
pub mod value_objects;

pub use errors::DomainError;
pub use forecast::{ForecastDocument, ForecastPeriod, select_periods};
pub use value_objects::*;
