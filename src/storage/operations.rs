//! Storage operations
//!
//! Reads and writes files at already resolved paths. These functions trust
//! the path completely; confinement is enforced by
//! [`resolve`](crate::storage::resolve).

use log::{error, info};
use std::io;
use tokio::fs;

use crate::error::{FileOperation, StorageError};
use crate::storage::results::ResolvedPath;

/// Reads the whole file.
pub async fn read_file(path: &ResolvedPath) -> Result<Vec<u8>, StorageError> {
    match fs::read(path).await {
        Ok(content) => {
            info!(
                "Read {} bytes from {}",
                content.len(),
                path.as_path().display()
            );
            Ok(content)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(StorageError::NotFound(path.as_path().to_path_buf()))
        }
        Err(e) => {
            error!("Failed to read file {}: {}", path.as_path().display(), e);
            Err(StorageError::IoFailure {
                operation: FileOperation::Read,
                path: path.as_path().to_path_buf(),
                source: e,
            })
        }
    }
}

/// Creates any missing parent directories, then writes or overwrites the
/// file.
pub async fn write_file(path: &ResolvedPath, content: &[u8]) -> Result<(), StorageError> {
    if let Some(parent) = path.as_path().parent() {
        if let Err(e) = fs::create_dir_all(parent).await {
            error!("Failed to create directory {}: {}", parent.display(), e);
            return Err(StorageError::IoFailure {
                operation: FileOperation::CreateDirectory,
                path: parent.to_path_buf(),
                source: e,
            });
        }
    }

    if let Err(e) = fs::write(path, content).await {
        error!("Failed to write file {}: {}", path.as_path().display(), e);
        return Err(StorageError::IoFailure {
            operation: FileOperation::Write,
            path: path.as_path().to_path_buf(),
            source: e,
        });
    }

    info!(
        "Wrote {} bytes to {}",
        content.len(),
        path.as_path().display()
    );
    Ok(())
}
