//! # Catalog API
//!
//! The request-to-store mapping layer: one action per (entity, operation)
//! pair, plus the shared validation and error contracts. The HTTP layer
//! binds routes to these actions; the actions perform exactly one store
//! call each and map the outcome to a response.

mod actions;
mod errors;
mod request;
mod response;

pub use actions::CatalogApi;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use request::{DeleteQuery, UpdateQuery};
pub use response::Ack;
