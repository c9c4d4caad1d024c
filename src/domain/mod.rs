//! Core business entities, types and traits

pub mod error;
pub mod movie;

pub use error::{DomainError, DomainResult};
pub use movie::{Movie, MovieRepository};
