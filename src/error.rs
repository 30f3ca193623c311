//! Application error type and its HTTP mapping.
//!
//! [`AppError`] is shared by the entity adapter, the services and the HTTP
//! handlers. Metadata surfaces never expose [`AppError::NotFound`] or
//! [`AppError::Upstream`] to clients; they downgrade both to the Not-Found
//! metadata record (see [`crate::application::services::PageService`]).

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::application::sitemap_entry::SitemapEntryError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Error payload returned in JSON error responses.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed input, e.g. a sitemap entry with an out-of-range priority.
    #[error("{message}")]
    Validation { message: String, details: Value },
    /// Missing or rejected bearer token on a cache-control endpoint.
    #[error("{message}")]
    Unauthorized { message: String, details: Value },
    /// The requested entity does not exist.
    #[error("{message}")]
    NotFound { message: String, details: Value },
    /// The entity data adapter failed.
    #[error("{message}")]
    Upstream { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn upstream(message: impl Into<String>, details: Value) -> Self {
        Self::Upstream {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Machine-readable error code used in response bodies and logs.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::Unauthorized { .. } => "unauthorized",
            AppError::NotFound { .. } => "not_found",
            AppError::Upstream { .. } => "upstream_error",
            AppError::Internal { .. } => "internal_error",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound { .. })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();
        let (status, message, details) = match self {
            AppError::Validation { message, details } => {
                (StatusCode::BAD_REQUEST, message, details)
            }
            AppError::Unauthorized { message, details } => {
                (StatusCode::UNAUTHORIZED, message, details)
            }
            AppError::NotFound { message, details } => (StatusCode::NOT_FOUND, message, details),
            AppError::Upstream { message, details } => (StatusCode::BAD_GATEWAY, message, details),
            AppError::Internal { message, details } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message, details)
            }
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        let mut response = (status, Json(body)).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                header::HeaderValue::from_static("Bearer"),
            );
        }
        response
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => AppError::not_found("Record not found", json!({})),
            other => {
                tracing::error!("Database error: {}", other);
                AppError::upstream("Database error", json!({}))
            }
        }
    }
}

impl From<SitemapEntryError> for AppError {
    fn from(e: SitemapEntryError) -> Self {
        AppError::bad_request(e.to_string(), json!({ "field": e.field() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_other_sqlx_errors_map_to_upstream() {
        let err: AppError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, AppError::Upstream { .. }));
        assert_eq!(err.code(), "upstream_error");
    }

    #[test]
    fn test_sitemap_entry_error_maps_to_validation() {
        let err: AppError = SitemapEntryError::PriorityOutOfRange(1.5).into();
        match err {
            AppError::Validation { details, .. } => assert_eq!(details["field"], "priority"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::bad_request("x", json!({})), StatusCode::BAD_REQUEST),
            (AppError::unauthorized("x", json!({})), StatusCode::UNAUTHORIZED),
            (AppError::not_found("x", json!({})), StatusCode::NOT_FOUND),
            (AppError::upstream("x", json!({})), StatusCode::BAD_GATEWAY),
            (
                AppError::internal("x", json!({})),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_unauthorized_sets_challenge_header() {
        let response = AppError::unauthorized("Unauthorized", json!({})).into_response();
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }
}
