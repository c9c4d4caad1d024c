//! API DTOs

pub mod movies;

pub use movies::{MovieDetailResponse, MovieListQuery, MovieListResponse};
