//! Messaging result types

use serde::{Deserialize, Serialize};

/// Outcome of sending a message to one recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResult {
    pub recipient: String,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MessageResult {
    pub fn delivered(recipient: &str) -> Self {
        Self {
            recipient: recipient.to_string(),
            success: true,
            error: None,
        }
    }

    pub fn failed(recipient: &str, error: impl ToString) -> Self {
        Self {
            recipient: recipient.to_string(),
            success: false,
            error: Some(error.to_string()),
        }
    }
}
