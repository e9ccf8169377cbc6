//! Messaging
//!
//! Sends chat messages through the native Messages app, expands configured
//! recipient groups and dispatches storage notifications.

pub mod notify;
pub mod operations;
pub mod results;
pub mod sender;

pub use notify::{StorageAction, StorageNotification, spawn_notification};
pub use operations::{Messenger, expand_groups, validate_phone_number};
pub use results::MessageResult;
pub use sender::{AppleScriptSender, MessageSender};
