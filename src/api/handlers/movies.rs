//! Movie REST API handlers

use axum::extract::{Path, State};
use axum::Json;

use crate::api::common::ValidatedQuery;
use crate::api::dto::{MovieDetailResponse, MovieListQuery, MovieListResponse};
use crate::api::error::{ApiError, ErrorDetail};
use crate::application::CatalogService;

#[utoipa::path(
    get,
    path = "/theater/movies/",
    tag = "Movies",
    params(MovieListQuery),
    responses(
        (status = 200, description = "One page of the catalog", body = MovieListResponse),
        (status = 404, description = "Empty catalog or page out of range", body = ErrorDetail),
        (status = 422, description = "page or per_page out of bounds", body = ErrorDetail)
    )
)]
pub async fn list_movies(
    State(catalog): State<CatalogService>,
    ValidatedQuery(query): ValidatedQuery<MovieListQuery>,
) -> Result<Json<MovieListResponse>, ApiError> {
    let page = catalog.list_movies(query.page, query.per_page).await?;
    Ok(Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/theater/movies/{movie_id}/",
    tag = "Movies",
    params(("movie_id" = i32, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "Movie details", body = MovieDetailResponse),
        (status = 404, description = "No movie with this ID", body = ErrorDetail)
    )
)]
pub async fn get_movie(
    State(catalog): State<CatalogService>,
    Path(movie_id): Path<i32>,
) -> Result<Json<MovieDetailResponse>, ApiError> {
    let movie = catalog.get_movie(movie_id).await?;
    Ok(Json(movie.into()))
}
