//! Forecast retrieval port

use async_trait::async_trait;
use domain::{Coordinates, ForecastDocument};

use crate::error::ApplicationError;

/// Port for fetching a forecast for a coordinate pair
///
/// Implementations report upstream failures with the stage-specific
/// variants: `MetadataLookupFailed`, `NoForecastAvailable` and
/// `ForecastFetchFailed`. Transport and decoding problems are
/// `ExternalService` errors.
#[async_trait]
pub trait ForecastPort: Send + Sync {
    /// Fetch the forecast document
    ///
    /// `contact` is the caller-supplied contact email, forwarded upstream
    /// when it is a valid address.
    async fn fetch_forecast(
        &self,
        coordinates: Coordinates,
        contact: Option<&str>,
    ) -> Result<ForecastDocument, ApplicationError>;
}
