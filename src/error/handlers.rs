//! Error handlers
//!
//! Maps storage errors onto HTTP status codes and client-safe messages.

use axum::http::StatusCode;
use log::{error, warn};

use crate::error::types::{FileOperation, StorageError};

/// Log a storage error with full detail.
///
/// Caller mistakes are logged at warn, server-side failures at error.
pub fn handle_error(err: &StorageError) {
    if err.is_rejection() {
        warn!("Storage request rejected: {}", err);
    } else {
        error!("Storage Error: {}", err);
    }
}

/// Convert error to HTTP status code
pub fn error_to_status(err: &StorageError) -> StatusCode {
    match err {
        StorageError::InvalidPath(_) => StatusCode::BAD_REQUEST,
        StorageError::OutsideRoot(_) => StatusCode::BAD_REQUEST,
        StorageError::ResolutionFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        StorageError::NotFound(_) => StatusCode::NOT_FOUND,
        StorageError::IoFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Message safe to return to the caller. Never contains OS error text.
pub fn error_to_public_message(err: &StorageError) -> &'static str {
    match err {
        StorageError::InvalidPath(_) => {
            "invalid path: contains forbidden characters or directory traversal"
        }
        StorageError::OutsideRoot(_) => "path is outside of storage directory",
        StorageError::ResolutionFailure { .. } => "internal server error",
        StorageError::NotFound(_) => "file not found",
        StorageError::IoFailure {
            operation: FileOperation::Read,
            ..
        } => "failed to read file",
        StorageError::IoFailure { .. } => "failed to save file",
    }
}
