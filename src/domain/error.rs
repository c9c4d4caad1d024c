use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Errors produced by the catalog core.
///
/// The two not-found variants carry the exact messages the HTTP layer
/// must surface, so `Display` is the single source of truth for them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// The catalog is empty or the requested page is past the last one.
    #[error("No movies found.")]
    NoMoviesFound,

    /// Lookup by identifier matched nothing.
    #[error("Movie with the given ID was not found.")]
    MovieNotFound,

    /// A record-store failure. Not recovered here; the request fails.
    #[error("Database error: {0}")]
    Database(String),
}
