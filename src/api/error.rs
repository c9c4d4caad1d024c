//! Domain error to HTTP response mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::DomainError;

/// Error body shape shared by every failing endpoint:
/// `{"detail": "human readable message"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Newtype so handlers can return `Result<_, ApiError>` and use `?`
/// on domain calls.
#[derive(Debug)]
pub struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self.0 {
            DomainError::NoMoviesFound | DomainError::MovieNotFound => {
                (StatusCode::NOT_FOUND, self.0.to_string())
            }
            // Store failures are not recovered; log the cause, hide it
            // from the client.
            DomainError::Database(cause) => {
                error!("record store failure: {}", cause);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error.".to_string(),
                )
            }
        };
        (status, Json(ErrorDetail::new(detail))).into_response()
    }
}

// ── Tests ──────────────────────────────────────────────────────
