//! Request and response bodies.

use axum::Json;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::messages::MessageResult;

/// Body of `GET|POST /api/storage`.
#[derive(Debug, Default, Deserialize)]
pub struct StorageRequest {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub content: String,
    /// Recipients (numbers or group names) to notify about the outcome.
    #[serde(default)]
    pub notify: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StorageResponse {
    pub fn ok(content: impl Into<String>) -> (StatusCode, Json<Self>) {
        (
            StatusCode::OK,
            Json(Self {
                success: true,
                content: Some(content.into()),
                error: None,
            }),
        )
    }

    pub fn failure(status: StatusCode, error: impl Into<String>) -> (StatusCode, Json<Self>) {
        (
            status,
            Json(Self {
                success: false,
                content: None,
                error: Some(error.into()),
            }),
        )
    }
}

/// Body of `POST /api/messages`.
#[derive(Debug, Default, Deserialize)]
pub struct MessageRequest {
    #[serde(default)]
    pub to: Vec<String>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub results: Vec<MessageResult>,
}
