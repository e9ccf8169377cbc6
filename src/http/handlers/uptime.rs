//! Uptime handler.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;

use crate::http::error::detailed_error;
use crate::uptime;

/// `GET /api/uptime`
pub async fn get_uptime() -> Response {
    match uptime::get_uptime().await {
        Ok(report) => Json(report).into_response(),
        Err(e) => {
            error!("Failed to get uptime: {}", e);
            detailed_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to get uptime",
                Some(e.to_string()),
            )
        }
    }
}
