//! Coordinate resolution strategy port
//!
//! A strategy turns a location request into coordinates in one specific way
//! (explicit coordinates, ZIP lookup, address geocoding). Strategies are
//! tried in order by the coordinate resolver.

use async_trait::async_trait;
use domain::{Coordinates, LocationRequest};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// One way of resolving a request to coordinates
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CoordinateStrategy: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Try to resolve the request
    ///
    /// Returns `Ok(None)` when the strategy does not apply to the request or
    /// finds no match. Errors are treated the same way by the resolver.
    async fn resolve(
        &self,
        request: &LocationRequest,
    ) -> Result<Option<Coordinates>, ApplicationError>;
}
