//! Coordinate resolution
//!
//! Tries each configured strategy in order and stops at the first one that
//! yields coordinates. Failing strategies fall through silently; only a total
//! failure reaches the caller.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use domain::{Coordinates, LocationRequest};
use tracing::{debug, instrument};

use crate::{error::ApplicationError, ports::CoordinateStrategy};

/// Use the request's own coordinates when both components are present
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectCoordinates;

#[async_trait]
impl CoordinateStrategy for DirectCoordinates {
    fn name(&self) -> &'static str {
        "coordinates"
    }

    async fn resolve(
        &self,
        request: &LocationRequest,
    ) -> Result<Option<Coordinates>, ApplicationError> {
        Ok(request.coordinates())
    }
}

/// Ordered chain of coordinate strategies
pub struct CoordinateResolver {
    strategies: Vec<Arc<dyn CoordinateStrategy>>,
}

impl fmt::Debug for CoordinateResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.strategies.iter().map(|s| s.name()).collect();
        f.debug_struct("CoordinateResolver")
            .field("strategies", &names)
            .finish()
    }
}

impl CoordinateResolver {
    /// Create a resolver trying `strategies` in the given order
    pub fn new(strategies: Vec<Arc<dyn CoordinateStrategy>>) -> Self {
        Self { strategies }
    }

    /// Names of the configured strategies, in order
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Resolve a request to coordinates
    ///
    /// # Errors
    ///
    /// Returns `LocationUnresolved` when no strategy produced coordinates.
    #[instrument(skip(self, request))]
    pub async fn resolve(&self, request: &LocationRequest) -> Result<Coordinates, ApplicationError> {
        for strategy in &self.strategies {
            match strategy.resolve(request).await {
                Ok(Some(coordinates)) => {
                    debug!(strategy = strategy.name(), %coordinates, "Location resolved");
                    return Ok(coordinates);
                },
                Ok(None) => {
                    debug!(strategy = strategy.name(), "Strategy produced no match");
                },
                Err(e) => {
                    debug!(strategy = strategy.name(), error = %e, "Strategy failed");
                },
            }
        }

        Err(ApplicationError::LocationUnresolved)
    }
}
