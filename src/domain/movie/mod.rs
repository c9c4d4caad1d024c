//! Movie entity and repository interface

pub mod model;
pub mod repository;

pub use model::Movie;
pub use repository::MovieRepository;
