//! Message delivery
//!
//! Delivery goes through the `MessageSender` trait so the HTTP layer does not
//! depend on `osascript` being present.

use async_trait::async_trait;
use log::{error, info};
use tokio::process::Command;

use crate::error::MessageError;

/// Delivers a single chat message to a single recipient.
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send(&self, recipient: &str, message: &str) -> Result<(), MessageError>;
}

/// Sends iMessages by driving the Messages app through `osascript`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AppleScriptSender;

impl AppleScriptSender {
    pub fn new() -> Self {
        Self
    }

    /// Build the AppleScript that sends `message` to `recipient`.
    pub fn build_script(recipient: &str, message: &str) -> String {
        format!(
            r#"
tell application "Messages"
    set targetService to 1st service whose service type = iMessage
    set myBuddy to buddy "{}" of targetService
    send "{}" to myBuddy
end tell
"#,
            escape_applescript(recipient),
            escape_applescript(message)
        )
    }
}

/// Escape text for use inside an AppleScript string literal.
pub fn escape_applescript(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

#[async_trait]
impl MessageSender for AppleScriptSender {
    async fn send(&self, recipient: &str, message: &str) -> Result<(), MessageError> {
        let script = Self::build_script(recipient, message);

        let output = Command::new("osascript")
            .arg("-e")
            .arg(&script)
            .output()
            .await
            .map_err(|e| {
                error!("Failed to launch osascript: {}", e);
                MessageError::Launch(e)
            })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            error!("AppleScript failed with status {}", output.status);
            error!("AppleScript output: {}", combined.trim());
            error!("Failed script: {}", script);
            return Err(MessageError::AppleScript(combined.trim().to_string()));
        }

        if !combined.trim().is_empty() {
            info!("AppleScript output: {}", combined.trim());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_quotes_and_backslashes() {
        assert_eq!(escape_applescript(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_applescript(r"C:\temp"), r"C:\\temp");
        assert_eq!(escape_applescript(r#"\""#), r#"\\\""#);
    }

    #[test]
    fn script_embeds_escaped_values() {
        let script = AppleScriptSender::build_script("+15555550100", r#"he said "go""#);

        assert!(script.contains(r#"buddy "+15555550100" of targetService"#));
        assert!(script.contains(r#"send "he said \"go\"" to myBuddy"#));
        assert!(script.contains("service type = iMessage"));
    }
}
