//! Movie repository interface

use async_trait::async_trait;

use super::model::Movie;
use crate::domain::DomainResult;

/// Read-only record store for movies.
///
/// Implementations must return pages in a stable order, identifier
/// ascending, so that offset slicing is deterministic.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Total number of movies in the catalog.
    async fn count_all(&self) -> DomainResult<u64>;

    /// Fetch at most `limit` movies starting at `offset`, id ascending.
    async fn fetch_page(&self, offset: u64, limit: u64) -> DomainResult<Vec<Movie>>;

    /// Fetch a single movie by identifier.
    async fn fetch_by_id(&self, id: i32) -> DomainResult<Option<Movie>>;
}
