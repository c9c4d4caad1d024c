//! API Router with Swagger UI

use axum::{middleware, routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::dto::{MovieDetailResponse, MovieListResponse};
use crate::api::error::ErrorDetail;
use crate::api::handlers::{health, movies};
use crate::api::metrics::http_metrics_middleware;
use crate::application::CatalogService;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Movies
        movies::list_movies,
        movies::get_movie,
    ),
    components(
        schemas(
            MovieDetailResponse,
            MovieListResponse,
            ErrorDetail,
            health::HealthResponse,
        )
    ),
    tags(
        (name = "Health", description = "Service liveness probe, for uptime monitoring."),
        (name = "Movies", description = "Read-only movie catalog: paginated listing with `page` (from 1) and `per_page` (1-20, default 10) query parameters, and detail lookup by ID. Listing order is stable, ID ascending."),
    ),
    info(
        title = "Movie Catalog API",
        version = "1.0.0",
        description = "Paginated read-only movie catalog.

## Endpoints

- `GET /theater/movies/?page={n}&per_page={n}` — one page of movies with \
`prev_page`/`next_page` navigation links and totals
- `GET /theater/movies/{movie_id}/` — a single movie by ID

## Errors

Failures carry a `{\"detail\": \"...\"}` body: 404 when the catalog is empty, \
the page is out of range or the ID is unknown; 422 when `page` or `per_page` \
is out of bounds.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(catalog: CatalogService, prometheus: PrometheusHandle) -> Router {
    // Trailing slashes are part of the public contract; the routes keep them.
    let movie_routes = Router::new()
        .route("/movies/", get(movies::list_movies))
        .route("/movies/{movie_id}/", get(movies::get_movie))
        .with_state(catalog);

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/theater", movie_routes)
        .route("/health", get(health::health_check))
        .route(
            "/metrics",
            get(move || std::future::ready(prometheus.render())),
        )
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::NaiveDate;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::Value;

    use crate::domain::Movie;
    use crate::infrastructure::memory::InMemoryMovieRepository;

    fn sample_movie(id: i32) -> Movie {
        Movie {
            id,
            name: format!("Movie {}", id),
            date: NaiveDate::from_ymd_opt(2021, 3, 5).unwrap(),
            score: 64.0,
            genre: "Comedy".into(),
            overview: "Ensemble piece.".into(),
            crew: "Sam Lee, Director".into(),
            orig_title: format!("Movie {}", id),
            status: "Released".into(),
            orig_lang: "English".into(),
            budget: 5_000_000.0,
            revenue: 9_000_000.0,
            country: "GB".into(),
        }
    }

    fn app(n: i32) -> Router {
        let movies: Vec<Movie> = (1..=n).map(sample_movie).collect();
        let catalog = CatalogService::new(Arc::new(InMemoryMovieRepository::new(movies)));
        // A local recorder handle; nothing is installed globally.
        let prometheus = PrometheusBuilder::new().build_recorder().handle();
        create_api_router(catalog, prometheus)
    }

    async fn send(router: Router, uri: &str) -> (StatusCode, Value) {
        use tower::Service;
        let mut svc = router.into_service();
        let req = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let resp = svc.call(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    #[tokio::test]
    async fn list_first_page_with_defaults() {
        let (status, body) = send(app(25), "/theater/movies/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["movies"].as_array().unwrap().len(), 10);
        assert!(body["prev_page"].is_null());
        assert_eq!(body["next_page"], "/theater/movies/?page=2&per_page=10");
        assert_eq!(body["total_pages"], 3);
        assert_eq!(body["total_items"], 25);
    }

    #[tokio::test]
    async fn list_last_partial_page() {
        let (status, body) = send(app(25), "/theater/movies/?page=3&per_page=10").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["movies"].as_array().unwrap().len(), 5);
        assert_eq!(body["prev_page"], "/theater/movies/?page=2&per_page=10");
        assert!(body["next_page"].is_null());
    }

    #[tokio::test]
    async fn exact_division_boundary() {
        // 20 movies, per_page=5: page 4 is the valid last page
        let (status, body) = send(app(20), "/theater/movies/?page=4&per_page=5").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["movies"].as_array().unwrap().len(), 5);
        assert_eq!(body["total_pages"], 4);
        assert!(body["next_page"].is_null());

        let (status, body) = send(app(20), "/theater/movies/?page=5&per_page=5").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "No movies found.");
    }

    #[tokio::test]
    async fn empty_catalog_returns_404() {
        let (status, body) = send(app(0), "/theater/movies/?page=1").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "No movies found.");
    }

    #[tokio::test]
    async fn page_out_of_range_returns_404() {
        let (status, body) = send(app(25), "/theater/movies/?page=4&per_page=10").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "No movies found.");
    }

    #[tokio::test]
    async fn invalid_pagination_returns_422() {
        let (status, _) = send(app(25), "/theater/movies/?page=0").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = send(app(25), "/theater/movies/?per_page=0").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = send(app(25), "/theater/movies/?per_page=21").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = send(app(25), "/theater/movies/?page=abc").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn get_movie_returns_stored_fields() {
        let (status, body) = send(app(5), "/theater/movies/3/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 3);
        assert_eq!(body["name"], "Movie 3");
        assert_eq!(body["date"], "2021-03-05");
        assert_eq!(body["status"], "Released");
        assert_eq!(body["country"], "GB");
    }

    #[tokio::test]
    async fn get_missing_movie_returns_404() {
        let (status, body) = send(app(5), "/theater/movies/42/").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Movie with the given ID was not found.");
    }

    #[tokio::test]
    async fn health_endpoint_is_up() {
        let (status, body) = send(app(0), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }
}
