//! Business logic and use cases

pub mod catalog;

pub use catalog::{CatalogService, MoviePage};
