//! Geocoding adapter - Implements CoordinateStrategy using integration_geocoding

use std::sync::Arc;

use application::{error::ApplicationError, ports::CoordinateStrategy};
use async_trait::async_trait;
use domain::{Coordinates, LocationRequest};
use integration_geocoding::{
    CensusGeocodingClient, GeocodingClient, GeocodingConfig, GeocodingError, ZippopotamClient,
};
use tracing::{debug, instrument};

/// Which request field a geocoding strategy reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QueryField {
    Zip,
    Address,
}

/// Coordinate strategy backed by a geocoding client
pub struct GeocodingStrategy {
    name: &'static str,
    field: QueryField,
    client: Arc<dyn GeocodingClient>,
}

impl std::fmt::Debug for GeocodingStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodingStrategy")
            .field("name", &self.name)
            .field("field", &self.field)
            .finish_non_exhaustive()
    }
}

impl GeocodingStrategy {
    /// Strategy resolving the request's ZIP code
    pub fn zip(client: Arc<dyn GeocodingClient>) -> Self {
        Self {
            name: "zip",
            field: QueryField::Zip,
            client,
        }
    }

    /// Strategy resolving the request's free-text address
    pub fn address(client: Arc<dyn GeocodingClient>) -> Self {
        Self {
            name: "address",
            field: QueryField::Address,
            client,
        }
    }

    /// ZIP strategy talking to Zippopotam
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn zippopotam(config: &GeocodingConfig) -> Result<Self, ApplicationError> {
        let client = ZippopotamClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::zip(Arc::new(client)))
    }

    /// Address strategy talking to the Census geocoder
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn census(config: &GeocodingConfig) -> Result<Self, ApplicationError> {
        let client = CensusGeocodingClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::address(Arc::new(client)))
    }

    fn query<'a>(&self, request: &'a LocationRequest) -> Option<&'a str> {
        match self.field {
            QueryField::Zip => request.zip_query(),
            QueryField::Address => request.address_query(),
        }
    }
}

#[async_trait]
impl CoordinateStrategy for GeocodingStrategy {
    fn name(&self) -> &'static str {
        self.name
    }

    #[instrument(skip(self, request), fields(strategy = self.name))]
    async fn resolve(
        &self,
        request: &LocationRequest,
    ) -> Result<Option<Coordinates>, ApplicationError> {
        let Some(query) = self.query(request) else {
            return Ok(None);
        };

        match self.client.geocode(query).await {
            Ok(coordinates) => {
                debug!(%coordinates, "Geocoded location");
                Ok(Some(coordinates))
            },
            Err(e) if e.is_not_found() => {
                debug!(error = %e, "No geocoding match");
                Ok(None)
            },
            Err(e) => Err(map_geocoding_error(e)),
        }
    }
}

fn map_geocoding_error(e: GeocodingError) -> ApplicationError {
    ApplicationError::ExternalService(format!("geocoding failed: {e}"))
}
