//! HTTP error types and mappings.
//!
//! Maps domain errors to status codes and response bodies. Bodies carry only
//! client-safe messages; details stay in the logs.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::error::StorageError;
use crate::error::handlers::error_to_public_message;

/// Protocol-level error returned by endpoints without a structured payload.
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<StorageError> for HttpError {
    fn from(err: StorageError) -> Self {
        let message = error_to_public_message(&err).to_string();
        match err {
            StorageError::InvalidPath(_) | StorageError::OutsideRoot(_) => {
                HttpError::BadRequest(message)
            }
            StorageError::NotFound(_) => HttpError::NotFound(message),
            StorageError::ResolutionFailure { .. } | StorageError::IoFailure { .. } => {
                HttpError::Internal(message)
            }
        }
    }
}

/// `{ "error": ..., "details": ... }` body used by the messages and uptime
/// endpoints.
#[derive(Serialize)]
struct DetailedErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

pub fn detailed_error(status: StatusCode, error: &str, details: Option<String>) -> Response {
    (status, Json(DetailedErrorBody { error, details })).into_response()
}
