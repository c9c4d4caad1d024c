//! In-memory MovieRepository, used by the test suite and local demos.

use async_trait::async_trait;

use crate::domain::{DomainResult, Movie, MovieRepository};

/// A fixed catalog held in a `Vec`, sorted by id on construction so that
/// offset slicing matches the store-order contract.
pub struct InMemoryMovieRepository {
    movies: Vec<Movie>,
}

impl InMemoryMovieRepository {
    pub fn new(mut movies: Vec<Movie>) -> Self {
        movies.sort_by_key(|m| m.id);
        Self { movies }
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn count_all(&self) -> DomainResult<u64> {
        Ok(self.movies.len() as u64)
    }

    async fn fetch_page(&self, offset: u64, limit: u64) -> DomainResult<Vec<Movie>> {
        Ok(self
            .movies
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn fetch_by_id(&self, id: i32) -> DomainResult<Option<Movie>> {
        Ok(self.movies.iter().find(|m| m.id == id).cloned())
    }
}

// ── Tests ──────────────────────────────────────────────────────
