//! Storage notifications
//!
//! Best-effort messages about storage outcomes. Each notification runs on its
//! own detached task; the HTTP response never waits for it and never sees its
//! failures.

use log::{info, warn};
use std::fmt;
use tokio::task::JoinHandle;

use crate::messages::operations::Messenger;

/// The storage action a notification reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageAction {
    Read,
    Write,
}

impl fmt::Display for StorageAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageAction::Read => write!(f, "GET"),
            StorageAction::Write => write!(f, "POST"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StorageNotification {
    pub action: StorageAction,
    pub file_name: String,
    pub success: bool,
    pub detail: String,
}

impl StorageNotification {
    pub fn success(action: StorageAction, file_name: String, detail: impl Into<String>) -> Self {
        Self {
            action,
            file_name,
            success: true,
            detail: detail.into(),
        }
    }

    pub fn failure(action: StorageAction, file_name: String, detail: impl Into<String>) -> Self {
        Self {
            action,
            file_name,
            success: false,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for StorageNotification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.success {
            write!(f, "{} {}", self.file_name, self.detail)
        } else {
            write!(
                f,
                "Failed to {} {}: {}",
                self.action, self.file_name, self.detail
            )
        }
    }
}

/// Spawn a detached task that expands groups and sends the notification.
pub fn spawn_notification(
    messenger: &Messenger,
    recipients: Vec<String>,
    notification: StorageNotification,
) -> JoinHandle<()> {
    let messenger = messenger.clone();

    tokio::spawn(async move {
        if recipients.is_empty() {
            return;
        }

        let expanded = messenger.expand(&recipients);
        let text = notification.to_string();

        for result in messenger.send_messages(&expanded, &text).await {
            if result.success {
                info!(
                    "Storage notification sent successfully to {}",
                    result.recipient
                );
            } else {
                warn!(
                    "Failed to send storage notification to {}: {}",
                    result.recipient,
                    result.error.as_deref().unwrap_or("unknown error")
                );
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MessageError;
    use crate::messages::sender::MessageSender;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::mpsc;

    struct ChannelSender(mpsc::UnboundedSender<(String, String)>);

    #[async_trait]
    impl MessageSender for ChannelSender {
        async fn send(&self, recipient: &str, message: &str) -> Result<(), MessageError> {
            let _ = self.0.send((recipient.to_string(), message.to_string()));
            Ok(())
        }
    }

    #[test]
    fn formats_success_and_failure() {
        let ok = StorageNotification::success(
            StorageAction::Write,
            "notes.txt".into(),
            "saved successfully",
        );
        let failed =
            StorageNotification::failure(StorageAction::Read, "notes.txt".into(), "find file");

        assert_eq!(ok.to_string(), "notes.txt saved successfully");
        assert_eq!(failed.to_string(), "Failed to GET notes.txt: find file");
    }

    #[tokio::test]
    async fn sends_to_expanded_group() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut groups = HashMap::new();
        groups.insert(
            "team".to_string(),
            vec!["+15555550100".to_string(), "+15555550101".to_string()],
        );
        let messenger = Messenger::new(Arc::new(ChannelSender(tx)), groups);

        spawn_notification(
            &messenger,
            vec!["team".to_string()],
            StorageNotification::success(
                StorageAction::Read,
                "a.txt".into(),
                "retrieved successfully",
            ),
        )
        .await
        .unwrap();

        let first = rx.recv().await.unwrap();
        let second = rx.recv().await.unwrap();
        assert_eq!(first.0, "+15555550100");
        assert_eq!(second.0, "+15555550101");
        assert_eq!(first.1, "a.txt retrieved successfully");
    }
}
