//! External concerns: database access and alternative stores

pub mod database;
pub mod memory;

pub use database::{init_database, DatabaseConfig, SeaOrmMovieRepository};
pub use memory::InMemoryMovieRepository;
