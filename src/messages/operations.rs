//! Messaging operations
//!
//! Validates recipients, expands configured groups and sends messages one
//! recipient at a time.

use log::info;
use regex::Regex;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use crate::error::MessageError;
use crate::messages::results::MessageResult;
use crate::messages::sender::MessageSender;

const MIN_PHONE_DIGITS: usize = 10;

static DIGITS_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("digits pattern is valid"));

/// Validates phone number format: `+` followed by at least ten digits.
/// Spaces are ignored.
pub fn validate_phone_number(phone_number: &str) -> Result<(), MessageError> {
    let clean_number = phone_number.replace(' ', "");

    let digits_only = clean_number
        .strip_prefix('+')
        .ok_or(MessageError::MissingCountryPrefix)?;

    if !DIGITS_ONLY.is_match(digits_only) {
        return Err(MessageError::NonDigit);
    }

    if digits_only.len() < MIN_PHONE_DIGITS {
        return Err(MessageError::TooShort);
    }

    Ok(())
}

/// Replaces group names with their members; other recipients pass through.
pub fn expand_groups(groups: &HashMap<String, Vec<String>>, recipients: &[String]) -> Vec<String> {
    let mut expanded = Vec::with_capacity(recipients.len());

    for recipient in recipients {
        match groups.get(recipient) {
            Some(members) => {
                info!(
                    "Expanded group '{}' to {} recipients",
                    recipient,
                    members.len()
                );
                expanded.extend(members.iter().cloned());
            }
            None => expanded.push(recipient.clone()),
        }
    }

    expanded
}

/// Sends messages through a [`MessageSender`] using the configured groups.
#[derive(Clone)]
pub struct Messenger {
    sender: Arc<dyn MessageSender>,
    groups: Arc<HashMap<String, Vec<String>>>,
}

impl Messenger {
    pub fn new(sender: Arc<dyn MessageSender>, groups: HashMap<String, Vec<String>>) -> Self {
        Self {
            sender,
            groups: Arc::new(groups),
        }
    }

    pub fn expand(&self, recipients: &[String]) -> Vec<String> {
        expand_groups(&self.groups, recipients)
    }

    /// Sends `message` to every recipient in order. Invalid numbers and
    /// delivery failures are reported per recipient, never as a whole.
    pub async fn send_messages(&self, recipients: &[String], message: &str) -> Vec<MessageResult> {
        let mut results = Vec::with_capacity(recipients.len());

        for recipient in recipients {
            if let Err(e) = validate_phone_number(recipient) {
                results.push(MessageResult::failed(recipient, e));
                continue;
            }

            match self.sender.send(recipient, message).await {
                Ok(()) => results.push(MessageResult::delivered(recipient)),
                Err(e) => results.push(MessageResult::failed(recipient, e)),
            }
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSender {
        sent: Mutex<Vec<(String, String)>>,
        fail_for: Option<String>,
    }

    #[async_trait]
    impl MessageSender for RecordingSender {
        async fn send(&self, recipient: &str, message: &str) -> Result<(), MessageError> {
            if self.fail_for.as_deref() == Some(recipient) {
                return Err(MessageError::AppleScript("buddy not found".into()));
            }
            self.sent
                .lock()
                .unwrap()
                .push((recipient.to_string(), message.to_string()));
            Ok(())
        }
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn accepts_well_formed_numbers() {
        assert!(validate_phone_number("+1234567890").is_ok());
        assert!(validate_phone_number("+1 555 555 0100").is_ok());
        assert!(validate_phone_number("+447911123456").is_ok());
    }

    #[test]
    fn rejects_malformed_numbers() {
        assert!(matches!(
            validate_phone_number("1234567890"),
            Err(MessageError::MissingCountryPrefix)
        ));
        assert!(matches!(
            validate_phone_number("+1-555-555-0100"),
            Err(MessageError::NonDigit)
        ));
        assert!(matches!(
            validate_phone_number("+"),
            Err(MessageError::NonDigit)
        ));
        assert!(matches!(
            validate_phone_number("+123456789"),
            Err(MessageError::TooShort)
        ));
    }

    #[test]
    fn expands_known_groups_only() {
        let mut groups = HashMap::new();
        groups.insert("family".to_string(), strings(&["+15555550100", "+15555550101"]));

        let expanded = expand_groups(&groups, &strings(&["family", "+15555550199", "friends"]));

        assert_eq!(
            expanded,
            strings(&["+15555550100", "+15555550101", "+15555550199", "friends"])
        );
    }

    #[tokio::test]
    async fn reports_each_recipient() {
        let sender = Arc::new(RecordingSender {
            fail_for: Some("+15555550102".into()),
            ..Default::default()
        });
        let messenger = Messenger::new(sender.clone(), HashMap::new());

        let results = messenger
            .send_messages(&strings(&["+15555550100", "555", "+15555550102"]), "hi")
            .await;

        assert_eq!(results.len(), 3);
        assert_eq!(results[0], MessageResult::delivered("+15555550100"));
        assert_eq!(
            results[1].error.as_deref(),
            Some("phone number must start with +")
        );
        assert!(!results[2].success);
        assert_eq!(
            results[2].error.as_deref(),
            Some("AppleScript error: buddy not found")
        );
        assert_eq!(
            *sender.sent.lock().unwrap(),
            vec![("+15555550100".to_string(), "hi".to_string())]
        );
    }
}
