//! API error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// A failure surfaced to an HTTP caller as a JSON body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{context}")]
    Internal {
        context: &'static str,
        details: String,
    },
}

impl ApiError {
    /// Map a storage failure onto the API taxonomy, keeping the operation
    /// name for the caller. Missing rows surface as a distinct not-found;
    /// everything else is logged and reported generically.
    pub fn db(context: &'static str) -> impl FnOnce(sqlx::Error) -> ApiError {
        move |source| match source {
            sqlx::Error::RowNotFound => ApiError::NotFound("mission"),
            other => {
                error!("{}: {}", context, other);
                ApiError::Internal {
                    context,
                    details: other.to_string(),
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, json!({ "error": message }))
            }
            ApiError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, json!({ "error": "Unauthorized" }))
            }
            ApiError::NotFound(what) => (
                StatusCode::NOT_FOUND,
                json!({ "error": format!("{what} not found") }),
            ),
            ApiError::Internal { context, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": context, "details": details }),
            ),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err = ApiError::db("Failed to update mission")(sqlx::Error::RowNotFound);
        assert!(matches!(err, ApiError::NotFound("mission")));
    }

    #[test]
    fn test_other_db_errors_keep_operation_context() {
        let err = ApiError::db("Failed to fetch missions")(sqlx::Error::PoolClosed);
        match err {
            ApiError::Internal { context, .. } => assert_eq!(context, "Failed to fetch missions"),
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
