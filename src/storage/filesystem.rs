//! Storage root
//!
//! Holds the configured storage directory in both its configured and
//! canonical form. Built once at startup and shared read-only.

use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StorageError;

/// The single directory under which all file operations are confined.
#[derive(Debug, Clone)]
pub struct StorageRoot {
    configured: PathBuf,
    canonical: PathBuf,
}

impl StorageRoot {
    /// Canonicalize an existing directory as the storage root.
    ///
    /// A root that cannot be resolved is an internal failure, not a caller
    /// error.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let configured = dir.as_ref().to_path_buf();
        let canonical =
            fs::canonicalize(&configured).map_err(|source| StorageError::ResolutionFailure {
                path: configured.clone(),
                source,
            })?;

        Ok(Self {
            configured,
            canonical,
        })
    }

    /// Create the directory if needed, then open it.
    pub fn create(dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let dir = dir.as_ref();
        if let Err(e) = fs::create_dir_all(dir) {
            warn!("Failed to create storage directory {}: {}", dir.display(), e);
        }

        let root = Self::open(dir)?;
        info!(
            "Storage directory: {} ({})",
            root.configured.display(),
            root.canonical.display()
        );
        Ok(root)
    }

    /// The directory as given in configuration.
    pub fn configured(&self) -> &Path {
        &self.configured
    }

    /// The absolute, symlink-free form of the root.
    pub fn canonical(&self) -> &Path {
        &self.canonical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_canonicalizes_relative_components() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("store")).unwrap();

        let root = StorageRoot::open(dir.path().join("store/./")).unwrap();

        assert!(root.canonical().is_absolute());
        assert_eq!(
            root.canonical(),
            fs::canonicalize(dir.path().join("store")).unwrap()
        );
    }

    #[test]
    fn open_missing_directory_is_resolution_failure() {
        let dir = tempfile::tempdir().unwrap();

        let err = StorageRoot::open(dir.path().join("does-not-exist")).unwrap_err();

        assert!(matches!(err, StorageError::ResolutionFailure { .. }));
    }

    #[test]
    fn create_makes_nested_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b/storage");

        let root = StorageRoot::create(&nested).unwrap();

        assert!(nested.is_dir());
        assert_eq!(root.configured(), nested.as_path());
    }
}
