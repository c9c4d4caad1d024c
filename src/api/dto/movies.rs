//! Movie DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::application::MoviePage;
use crate::domain::Movie;

/// A single movie, exactly as stored.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MovieDetailResponse {
    pub id: i32,
    pub name: String,
    /// ISO-8601 date (`YYYY-MM-DD`)
    pub date: NaiveDate,
    pub score: f64,
    pub genre: String,
    pub overview: String,
    pub crew: String,
    pub orig_title: String,
    pub status: String,
    pub orig_lang: String,
    pub budget: f64,
    pub revenue: f64,
    pub country: String,
}

impl From<Movie> for MovieDetailResponse {
    fn from(m: Movie) -> Self {
        Self {
            id: m.id,
            name: m.name,
            date: m.date,
            score: m.score,
            genre: m.genre,
            overview: m.overview,
            crew: m.crew,
            orig_title: m.orig_title,
            status: m.status,
            orig_lang: m.orig_lang,
            budget: m.budget,
            revenue: m.revenue,
            country: m.country,
        }
    }
}

/// One page of the catalog with navigation metadata.
///
/// `prev_page`/`next_page` serialize as `null` when absent, never omitted.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MovieListResponse {
    pub movies: Vec<MovieDetailResponse>,
    pub prev_page: Option<String>,
    pub next_page: Option<String>,
    pub total_pages: u32,
    pub total_items: u64,
}

impl From<MoviePage> for MovieListResponse {
    fn from(page: MoviePage) -> Self {
        Self {
            movies: page.movies.into_iter().map(Into::into).collect(),
            prev_page: page.prev_page,
            next_page: page.next_page,
            total_pages: page.total_pages,
            total_items: page.total_items,
        }
    }
}

/// Pagination query parameters for the listing endpoint
#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct MovieListQuery {
    /// The actual page number (starting from 1). Default: 1
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "page must be greater than or equal to 1"))]
    pub page: u32,
    /// Count of movies per page (1-20). Default: 10
    #[serde(default = "default_per_page")]
    #[validate(range(min = 1, max = 20, message = "per_page must be between 1 and 20"))]
    pub per_page: u32,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    10
}

// ── Tests ──────────────────────────────────────────────────────
