//! # Movie Catalog Service
//!
//! Paginated read-only HTTP service over a catalog of movie records.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: the `Movie` entity, the `MovieRepository` store interface
//!   and domain errors
//! - **application**: catalog use cases (paginated listing, id lookup)
//! - **infrastructure**: SeaORM persistence (entity, migrations, repository)
//!   and the in-memory store used by tests
//! - **api**: REST API with Swagger documentation

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmMovieRepository};

// Re-export API router
pub use api::create_api_router;
