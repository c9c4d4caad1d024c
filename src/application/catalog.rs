//! Catalog use cases: paginated listing and id lookup.
//!
//! All pagination arithmetic and boundary checks live here, behind the
//! `MovieRepository` trait, so the HTTP layer stays a thin mapping.

use std::sync::Arc;

use crate::domain::{DomainError, DomainResult, Movie, MovieRepository};

/// One page of the catalog, shaped for the listing response.
#[derive(Debug)]
pub struct MoviePage {
    /// Movies on this page, store order (id ascending)
    pub movies: Vec<Movie>,
    /// Path to the previous page, present iff `page > 1`
    pub prev_page: Option<String>,
    /// Path to the next page, present iff `page < total_pages`
    pub next_page: Option<String>,
    pub total_pages: u32,
    pub total_items: u64,
}

/// Read-only catalog service over an abstract movie store.
#[derive(Clone)]
pub struct CatalogService {
    repo: Arc<dyn MovieRepository>,
}

impl CatalogService {
    pub fn new(repo: Arc<dyn MovieRepository>) -> Self {
        Self { repo }
    }

    /// Produce one page of the catalog.
    ///
    /// Callers must guarantee `page >= 1` and `1 <= per_page <= 20`;
    /// the HTTP layer rejects anything else before this runs.
    ///
    /// An empty catalog fails with `NoMoviesFound` regardless of the
    /// requested page, and that check precedes the page-range check.
    /// A `page` past the last page also fails with `NoMoviesFound`.
    pub async fn list_movies(&self, page: u32, per_page: u32) -> DomainResult<MoviePage> {
        let total_items = self.repo.count_all().await?;
        if total_items == 0 {
            return Err(DomainError::NoMoviesFound);
        }

        let total_pages = total_items.div_ceil(per_page as u64) as u32;
        if page > total_pages {
            return Err(DomainError::NoMoviesFound);
        }

        let offset = (page as u64 - 1) * per_page as u64;
        let movies = self.repo.fetch_page(offset, per_page as u64).await?;

        // Navigation links echo the caller's per_page.
        let prev_page =
            (page > 1).then(|| format!("/theater/movies/?page={}&per_page={}", page - 1, per_page));
        let next_page = (page < total_pages)
            .then(|| format!("/theater/movies/?page={}&per_page={}", page + 1, per_page));

        Ok(MoviePage {
            movies,
            prev_page,
            next_page,
            total_pages,
            total_items,
        })
    }

    /// Resolve a single movie by identifier.
    pub async fn get_movie(&self, id: i32) -> DomainResult<Movie> {
        self.repo
            .fetch_by_id(id)
            .await?
            .ok_or(DomainError::MovieNotFound)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemoryMovieRepository;
    use chrono::NaiveDate;

    fn sample_movie(id: i32) -> Movie {
        Movie {
            id,
            name: format!("Movie {}", id),
            date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            score: 72.5,
            genre: "Drama".into(),
            overview: "A film.".into(),
            crew: "Jane Doe, Lead".into(),
            orig_title: format!("Movie {}", id),
            status: "Released".into(),
            orig_lang: "English".into(),
            budget: 1_000_000.0,
            revenue: 2_000_000.0,
            country: "AU".into(),
        }
    }

    fn catalog_with(n: i32) -> CatalogService {
        let movies = (1..=n).map(sample_movie).collect();
        CatalogService::new(Arc::new(InMemoryMovieRepository::new(movies)))
    }

    #[tokio::test]
    async fn empty_catalog_fails_even_for_page_one() {
        let svc = catalog_with(0);
        assert_eq!(
            svc.list_movies(1, 10).await.unwrap_err(),
            DomainError::NoMoviesFound
        );
        assert_eq!(
            svc.list_movies(7, 20).await.unwrap_err(),
            DomainError::NoMoviesFound
        );
    }

    #[tokio::test]
    async fn page_beyond_total_pages_fails() {
        let svc = catalog_with(25);
        // 25 items / 10 per page -> 3 pages
        assert_eq!(
            svc.list_movies(4, 10).await.unwrap_err(),
            DomainError::NoMoviesFound
        );
    }

    #[tokio::test]
    async fn first_page_of_25() {
        let svc = catalog_with(25);
        let page = svc.list_movies(1, 10).await.unwrap();
        assert_eq!(page.movies.len(), 10);
        assert_eq!(page.movies[0].id, 1);
        assert_eq!(page.movies[9].id, 10);
        assert_eq!(page.prev_page, None);
        assert_eq!(
            page.next_page.as_deref(),
            Some("/theater/movies/?page=2&per_page=10")
        );
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_items, 25);
    }

    #[tokio::test]
    async fn last_page_of_25_is_partial() {
        let svc = catalog_with(25);
        let page = svc.list_movies(3, 10).await.unwrap();
        assert_eq!(page.movies.len(), 5);
        assert_eq!(page.movies[0].id, 21);
        assert_eq!(page.next_page, None);
        assert_eq!(
            page.prev_page.as_deref(),
            Some("/theater/movies/?page=2&per_page=10")
        );
    }

    #[tokio::test]
    async fn middle_page_has_both_links() {
        let svc = catalog_with(25);
        let page = svc.list_movies(2, 10).await.unwrap();
        assert_eq!(page.movies.len(), 10);
        assert_eq!(
            page.prev_page.as_deref(),
            Some("/theater/movies/?page=1&per_page=10")
        );
        assert_eq!(
            page.next_page.as_deref(),
            Some("/theater/movies/?page=3&per_page=10")
        );
    }

    #[tokio::test]
    async fn even_division_has_no_remainder_page() {
        // 20 items / 5 per page -> exactly 4 pages
        let svc = catalog_with(20);
        let page = svc.list_movies(4, 5).await.unwrap();
        assert_eq!(page.movies.len(), 5);
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.next_page, None);

        assert_eq!(
            svc.list_movies(5, 5).await.unwrap_err(),
            DomainError::NoMoviesFound
        );
    }

    #[tokio::test]
    async fn single_page_catalog_has_no_links() {
        let svc = catalog_with(3);
        let page = svc.list_movies(1, 10).await.unwrap();
        assert_eq!(page.movies.len(), 3);
        assert_eq!(page.prev_page, None);
        assert_eq!(page.next_page, None);
        assert_eq!(page.total_pages, 1);
    }

    #[tokio::test]
    async fn links_echo_requested_per_page() {
        let svc = catalog_with(25);
        let page = svc.list_movies(2, 7).await.unwrap();
        assert_eq!(
            page.prev_page.as_deref(),
            Some("/theater/movies/?page=1&per_page=7")
        );
        assert_eq!(
            page.next_page.as_deref(),
            Some("/theater/movies/?page=3&per_page=7")
        );
        assert_eq!(page.total_pages, 4); // ceil(25 / 7)
    }

    #[tokio::test]
    async fn lookup_hit_returns_record_unmodified() {
        let svc = catalog_with(5);
        let movie = svc.get_movie(3).await.unwrap();
        assert_eq!(movie, sample_movie(3));
    }

    #[tokio::test]
    async fn lookup_miss_fails() {
        let svc = catalog_with(5);
        assert_eq!(
            svc.get_movie(42).await.unwrap_err(),
            DomainError::MovieNotFound
        );
    }
}
