//! Validated query-string extractor for Axum
//!
//! `ValidatedQuery<T>` works like `axum::extract::Query<T>`, but additionally
//! runs `validator::Validate::validate()` on the deserialized value. Both a
//! malformed query string and an out-of-bounds value produce a 422 response
//! with a `{"detail": ...}` body, so callers see one validation surface.

use axum::extract::rejection::QueryRejection;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::api::error::ErrorDetail;

/// An extractor that deserializes the query string and validates it.
///
/// # Usage
///
/// ```ignore
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct Paging {
///     #[validate(range(min = 1))]
///     page: u32,
/// }
///
/// async fn handler(ValidatedQuery(paging): ValidatedQuery<Paging>) {
///     // `paging` is guaranteed to pass validation
/// }
/// ```
pub struct ValidatedQuery<T>(pub T);

/// Error type for `ValidatedQuery` extraction failures.
pub enum ValidatedQueryRejection {
    /// Query-string parsing failed (e.g. non-integer where one is expected).
    QueryError(QueryRejection),
    /// Validation failed.
    ValidationError(validator::ValidationErrors),
}

impl IntoResponse for ValidatedQueryRejection {
    fn into_response(self) -> Response {
        let detail = match self {
            Self::QueryError(rejection) => format!("Invalid query parameters: {}", rejection),
            Self::ValidationError(errors) => {
                let field_errors: Vec<String> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errs)| {
                        errs.iter().map(move |e| {
                            let msg = e
                                .message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| format!("{:?}", e.code));
                            format!("{}: {}", field, msg)
                        })
                    })
                    .collect();

                if field_errors.is_empty() {
                    "Validation failed".to_string()
                } else {
                    field_errors.join("; ")
                }
            }
        };

        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorDetail::new(detail)),
        )
            .into_response()
    }
}

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedQueryRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(ValidatedQueryRejection::QueryError)?;

        value
            .validate()
            .map_err(ValidatedQueryRejection::ValidationError)?;

        Ok(ValidatedQuery(value))
    }
}

// ── Tests ──────────────────────────────────────────────────────
