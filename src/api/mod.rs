//! REST API with Swagger documentation

pub mod common;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod router;

pub use router::{create_api_router, ApiDoc};
