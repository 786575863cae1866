//! Value Objects - Immutable, identity-less domain primitives

mod cache_key;
mod contact_email;
mod coordinates;
mod location_request;

pub use cache_key::CacheKey;
pub use contact_email::ContactEmail;
pub use coordinates::Coordinates;
pub use location_request::LocationRequest;
