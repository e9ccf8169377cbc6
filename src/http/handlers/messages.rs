//! Message handlers - send chat messages to one or more recipients.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::http::dto::{MessageRequest, MessageResponse};
use crate::http::error::detailed_error;
use crate::http::state::AppState;

/// `POST /api/messages`
///
/// Per-recipient failures are reported in the results; the request itself
/// only fails on malformed input.
pub async fn send_messages(
    State(state): State<AppState>,
    payload: Result<Json<MessageRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            return detailed_error(
                StatusCode::BAD_REQUEST,
                "Invalid request format",
                Some(rejection.body_text()),
            );
        }
    };

    if request.to.is_empty() {
        return detailed_error(
            StatusCode::BAD_REQUEST,
            "At least one recipient is required",
            None,
        );
    }

    if request.message.is_empty() {
        return detailed_error(StatusCode::BAD_REQUEST, "Message content is required", None);
    }

    let recipients = state.messenger.expand(&request.to);
    let results = state
        .messenger
        .send_messages(&recipients, &request.message)
        .await;

    (StatusCode::OK, Json(MessageResponse { results })).into_response()
}
