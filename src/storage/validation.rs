//! Path validation
//!
//! Turns an untrusted logical path into a [`ResolvedPath`] confined to the
//! storage root, or rejects it. This is the only place in the crate that
//! builds filesystem paths from caller input.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{InvalidPathReason, StorageError};
use crate::storage::filesystem::StorageRoot;
use crate::storage::results::ResolvedPath;

/// Syntactic check run before any filesystem access.
///
/// Any occurrence of `..` is rejected, including inside file names such as
/// `my..file.txt`.
pub fn validate_logical_path(path: &str) -> Result<(), InvalidPathReason> {
    if path.contains("..") {
        return Err(InvalidPathReason::Traversal);
    }

    if !path.starts_with('/') {
        return Err(InvalidPathReason::NotAbsolute);
    }

    Ok(())
}

/// Validate the path and resolve it to an absolute path within the storage
/// directory.
///
/// Symlinks are followed. Containment is checked component-wise, so a
/// sibling such as `<root>-evil` is outside the root even though it shares a
/// string prefix.
pub fn resolve(logical_path: &str, root: &StorageRoot) -> Result<ResolvedPath, StorageError> {
    validate_logical_path(logical_path).map_err(StorageError::InvalidPath)?;

    // Joining an absolute path would replace the root entirely.
    let candidate = root
        .configured()
        .join(logical_path.trim_start_matches('/'));

    let resolved = canonicalize_candidate(&candidate)?;

    if !resolved.starts_with(root.canonical()) {
        return Err(StorageError::OutsideRoot(resolved));
    }

    Ok(ResolvedPath::new(resolved))
}

/// Canonicalize a path that may not exist yet.
///
/// The deepest existing ancestor is canonicalized and the missing tail is
/// appended unchanged. The tail holds no `..` components because those were
/// rejected earlier.
fn canonicalize_candidate(candidate: &Path) -> Result<PathBuf, StorageError> {
    let mut missing: Vec<&OsStr> = Vec::new();
    let mut current = candidate;

    loop {
        match fs::canonicalize(current) {
            Ok(mut resolved) => {
                resolved.extend(missing.iter().rev());
                return Ok(resolved);
            }
            // A file used as a directory is left for the file operation to
            // report, like any other missing tail.
            Err(e)
                if matches!(
                    e.kind(),
                    io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
                ) =>
            {
                // Present but unresolvable: a dangling symlink whose target
                // cannot be checked.
                if fs::symlink_metadata(current).is_ok() {
                    return Err(StorageError::OutsideRoot(candidate.to_path_buf()));
                }

                match (current.parent(), current.file_name()) {
                    (Some(parent), Some(name)) => {
                        missing.push(name);
                        current = parent;
                    }
                    _ => {
                        return Err(StorageError::ResolutionFailure {
                            path: candidate.to_path_buf(),
                            source: e,
                        });
                    }
                }
            }
            Err(e) if e.kind() == io::ErrorKind::InvalidInput => {
                return Err(StorageError::InvalidPath(
                    InvalidPathReason::Unrepresentable,
                ));
            }
            Err(source) => {
                return Err(StorageError::ResolutionFailure {
                    path: candidate.to_path_buf(),
                    source,
                });
            }
        }
    }
}
