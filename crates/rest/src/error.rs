//! Error types for the intake HTTP API.
//!
//! Storage errors are mapped to HTTP status codes without collapsing the
//! error kind: an identifier that does not resolve is a 404, a malformed
//! identifier is a 400, and a backend failure is a 500. Every error body is
//! a JSON envelope of the form:
//!
//! ```json
//! { "error": { "code": "not-found", "message": "patient not found: ..." } }
//! ```
//!
//! # Error Mapping
//!
//! | Storage Error | HTTP Status | Code |
//! |--------------|-------------|------|
//! | NotFound | 404 | not-found |
//! | InvalidId | 400 | invalid-id |
//! | Backend | 500 | internal |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use intake_store::error::{RecordKind, StorageError};
use intake_store::id::InvalidIdError;
use thiserror::Error;
use tracing::error;

/// The primary error type for API operations.
#[derive(Debug, Error)]
pub enum RestError {
    /// Record not found (HTTP 404).
    #[error("{kind} not found: {id}")]
    NotFound {
        /// The kind of record that was looked up.
        kind: RecordKind,
        /// The identifier that did not resolve.
        id: String,
    },

    /// Malformed record identifier (HTTP 400).
    #[error("invalid identifier: {value}")]
    InvalidId {
        /// The malformed identifier value.
        value: String,
    },

    /// Bad request (HTTP 400).
    #[error("{message}")]
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Internal server error (HTTP 500).
    #[error("{message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

/// Result type alias for API operations.
pub type RestResult<T> = Result<T, RestError>;

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { kind, id } => RestError::NotFound { kind, id },
            StorageError::InvalidId(e) => e.into(),
            StorageError::Backend(e) => {
                // The backend detail stays in the logs, not the response body
                error!(error = %e, "storage backend error");
                RestError::Internal {
                    message: "internal storage error".to_string(),
                }
            }
        }
    }
}

impl From<InvalidIdError> for RestError {
    fn from(err: InvalidIdError) -> Self {
        RestError::InvalidId { value: err.value }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            RestError::NotFound { .. } => (StatusCode::NOT_FOUND, "not-found"),
            RestError::InvalidId { .. } => (StatusCode::BAD_REQUEST, "invalid-id"),
            RestError::BadRequest { .. } => (StatusCode::BAD_REQUEST, "invalid"),
            RestError::Internal { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
        };

        let body = serde_json::json!({
            "error": {
                "code": code,
                "message": self.to_string(),
            }
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake_store::RecordId;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = RestError::NotFound {
            kind: RecordKind::Patient,
            id: "000000000000000000000000".to_string(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_id_maps_to_400() {
        let parse_err = RecordId::parse("not-an-id-format").unwrap_err();
        let err: RestError = parse_err.into();
        assert!(matches!(err, RestError::InvalidId { .. }));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_storage_not_found_preserves_kind() {
        let storage_err = StorageError::NotFound {
            kind: RecordKind::Encounter,
            id: "abc".to_string(),
        };
        let err: RestError = storage_err.into();
        match err {
            RestError::NotFound { kind, .. } => assert_eq!(kind, RecordKind::Encounter),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_backend_error_hides_detail() {
        let storage_err = StorageError::Backend(intake_store::BackendError::QueryError {
            message: "no such table: patients".to_string(),
        });
        let err: RestError = storage_err.into();
        match err {
            RestError::Internal { message } => assert!(!message.contains("patients")),
            other => panic!("expected Internal, got {:?}", other),
        }
    }

    #[test]
    fn test_internal_maps_to_500() {
        let err = RestError::Internal {
            message: "boom".to_string(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
