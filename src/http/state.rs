//! Shared application state type.

use std::sync::Arc;

use crate::messages::Messenger;
use crate::storage::StorageRoot;

/// Everything a handler needs. Built once at startup and never mutated.
pub struct AppContext {
    pub storage_root: StorageRoot,
    pub messenger: Messenger,
}

impl AppContext {
    pub fn new(storage_root: StorageRoot, messenger: Messenger) -> Self {
        Self {
            storage_root,
            messenger,
        }
    }
}

/// Application state shared across all handlers.
pub type AppState = Arc<AppContext>;
