//! Storage handlers - read and write files under the storage root.
//!
//! Both endpoints resolve the logical path exactly once through
//! [`resolve`] before touching the filesystem.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use log::warn;

use crate::error::StorageError;
use crate::error::handlers::{error_to_public_message, error_to_status, handle_error};
use crate::http::dto::{StorageRequest, StorageResponse};
use crate::http::error::HttpError;
use crate::http::state::AppState;
use crate::messages::{StorageAction, StorageNotification, spawn_notification};
use crate::storage::{ResolvedPath, read_file, resolve, write_file};

const PATH_REQUIRED: &str = "path is required";
const NOTIFY_EMPTY: &str =
    "notify field cannot be empty - either omit it or provide at least one recipient";
const RAW_WRITE_NOT_ALLOWED: &str =
    "method not allowed - use POST /api/storage with JSON payload for file creation";

/// `GET|POST /api/storage` with a JSON payload.
///
/// GET returns the file inside a structured response, POST writes
/// `content`. An empty body is treated as an empty request.
pub async fn handle_storage(State(state): State<AppState>, method: Method, body: Bytes) -> Response {
    let request = match parse_request(&body) {
        Ok(request) => request,
        Err(e) => {
            warn!("Failed to parse request body: {}", e);
            return StorageResponse::failure(StatusCode::BAD_REQUEST, "invalid request body")
                .into_response();
        }
    };

    if is_empty_logical_path(&request.path) {
        return StorageResponse::failure(StatusCode::BAD_REQUEST, PATH_REQUIRED).into_response();
    }

    if matches!(request.notify.as_deref(), Some([])) {
        return StorageResponse::failure(StatusCode::BAD_REQUEST, NOTIFY_EMPTY).into_response();
    }

    let resolved = match resolve(&request.path, &state.storage_root) {
        Ok(resolved) => resolved,
        Err(e) => {
            handle_error(&e);
            return storage_failure(&e).into_response();
        }
    };

    let notify = request.notify.unwrap_or_default();

    match method {
        Method::GET => read_structured(&state, &resolved, notify).await,
        Method::POST => write_structured(&state, &resolved, request.content, notify).await,
        _ => StorageResponse::failure(StatusCode::METHOD_NOT_ALLOWED, "method not allowed")
            .into_response(),
    }
}

/// `GET /api/storage/{*path}`: returns the raw file content.
pub async fn handle_storage_with_path(
    State(state): State<AppState>,
    Path(raw_path): Path<String>,
) -> Result<Response, HttpError> {
    // Routing drops the leading slash; put exactly one back.
    let path = format!("/{}", raw_path.strip_prefix('/').unwrap_or(&raw_path));

    if is_empty_logical_path(&path) {
        return Err(HttpError::BadRequest(PATH_REQUIRED.into()));
    }

    let resolved = resolve(&path, &state.storage_root).inspect_err(handle_error)?;
    let content = read_file(&resolved).await?;

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        content,
    )
        .into_response())
}

/// `POST /api/storage/{*path}`: writes only go through the JSON endpoint.
pub async fn reject_raw_write() -> Response {
    StorageResponse::failure(StatusCode::METHOD_NOT_ALLOWED, RAW_WRITE_NOT_ALLOWED)
        .into_response()
}

fn parse_request(body: &[u8]) -> Result<StorageRequest, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(StorageRequest::default());
    }
    serde_json::from_slice(body)
}

/// A path with no content besides slashes names the storage root itself,
/// which is never a valid file target.
fn is_empty_logical_path(path: &str) -> bool {
    path.chars().all(|c| c == '/')
}

fn storage_failure(err: &StorageError) -> (StatusCode, Json<StorageResponse>) {
    StorageResponse::failure(error_to_status(err), error_to_public_message(err))
}

/// Short description of what went wrong, used in failure notifications.
fn failure_detail(err: &StorageError) -> String {
    match err {
        StorageError::NotFound(_) => "find file".to_string(),
        StorageError::IoFailure { operation, .. } => operation.to_string(),
        other => error_to_public_message(other).to_string(),
    }
}

fn notify(
    state: &AppState,
    recipients: Vec<String>,
    action: StorageAction,
    path: &ResolvedPath,
    outcome: Result<&str, &StorageError>,
) {
    if recipients.is_empty() {
        return;
    }

    let notification = match outcome {
        Ok(detail) => StorageNotification::success(action, path.file_name(), detail),
        Err(err) => StorageNotification::failure(action, path.file_name(), failure_detail(err)),
    };

    // Detached: the response does not wait for delivery.
    spawn_notification(&state.messenger, recipients, notification);
}

async fn read_structured(state: &AppState, path: &ResolvedPath, recipients: Vec<String>) -> Response {
    match read_file(path).await {
        Ok(content) => {
            notify(
                state,
                recipients,
                StorageAction::Read,
                path,
                Ok("retrieved successfully"),
            );
            StorageResponse::ok(String::from_utf8_lossy(&content)).into_response()
        }
        Err(e) => {
            notify(state, recipients, StorageAction::Read, path, Err(&e));
            storage_failure(&e).into_response()
        }
    }
}

async fn write_structured(
    state: &AppState,
    path: &ResolvedPath,
    content: String,
    recipients: Vec<String>,
) -> Response {
    match write_file(path, content.as_bytes()).await {
        Ok(()) => {
            notify(
                state,
                recipients,
                StorageAction::Write,
                path,
                Ok("saved successfully"),
            );
            StorageResponse::ok("File saved successfully").into_response()
        }
        Err(e) => {
            notify(state, recipients, StorageAction::Write, path, Err(&e));
            storage_failure(&e).into_response()
        }
    }
}
