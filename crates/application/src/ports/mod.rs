//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod cache_port;
mod coordinate_strategy;
mod forecast_port;

pub use cache_port::{CachePort, CachePortExt, ttl};
#[cfg(test)]
pub use coordinate_strategy::MockCoordinateStrategy;
pub use coordinate_strategy::CoordinateStrategy;
pub use forecast_port::ForecastPort;
