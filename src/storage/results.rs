//! Storage result types
//!
//! Defines result structures returned by storage operations.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// A path that has passed resolution and lies inside the storage root.
///
/// Only [`resolve`](crate::storage::resolve) can build one, so file
/// operations cannot be handed an unchecked path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath(PathBuf);

impl ResolvedPath {
    pub(super) fn new(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Final component, used when describing the file to people.
    pub fn file_name(&self) -> String {
        self.0
            .file_name()
            .map(OsStr::to_string_lossy)
            .map(|name| name.into_owned())
            .unwrap_or_default()
    }
}

impl AsRef<Path> for ResolvedPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}
