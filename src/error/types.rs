//! Error types
//!
//! Defines domain-specific error types for each module of the server.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a logical path was rejected before touching the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidPathReason {
    /// The path contains the `..` token somewhere.
    Traversal,
    /// The path does not start with `/`.
    NotAbsolute,
    /// The path cannot be represented on this platform (e.g. embedded NUL).
    Unrepresentable,
}

impl fmt::Display for InvalidPathReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidPathReason::Traversal => write!(f, "contains directory traversal"),
            InvalidPathReason::NotAbsolute => write!(f, "must start with '/'"),
            InvalidPathReason::Unrepresentable => write!(f, "contains forbidden characters"),
        }
    }
}

/// File operation that failed on an already validated path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOperation {
    Read,
    CreateDirectory,
    Write,
}

impl fmt::Display for FileOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileOperation::Read => write!(f, "read file"),
            FileOperation::CreateDirectory => write!(f, "create directory"),
            FileOperation::Write => write!(f, "write file"),
        }
    }
}

/// Storage module errors
///
/// `InvalidPath`, `OutsideRoot` and `ResolutionFailure` come from path
/// resolution; `NotFound` and `IoFailure` come from the file operations that
/// run on a resolved path.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Invalid path: {0}")]
    InvalidPath(InvalidPathReason),

    #[error("Path resolves outside of storage directory: {}", .0.display())]
    OutsideRoot(PathBuf),

    #[error("Failed to resolve {}: {source}", .path.display())]
    ResolutionFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to {operation} {}: {source}", .path.display())]
    IoFailure {
        operation: FileOperation,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StorageError {
    /// True for outcomes caused by the caller's input rather than the server.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            StorageError::InvalidPath(_) | StorageError::OutsideRoot(_) | StorageError::NotFound(_)
        )
    }
}

/// Messaging module errors
#[derive(Debug, Error)]
pub enum MessageError {
    #[error("phone number must start with +")]
    MissingCountryPrefix,

    #[error("phone number can only contain digits after the +")]
    NonDigit,

    #[error("phone number must be at least 10 digits")]
    TooShort,

    #[error("failed to launch osascript: {0}")]
    Launch(#[source] io::Error),

    #[error("AppleScript error: {0}")]
    AppleScript(String),
}

/// Uptime module errors
#[derive(Debug, Error)]
pub enum UptimeError {
    #[error("native uptime unavailable: {0}")]
    Native(String),

    #[error("failed to execute uptime command: {0}")]
    Command(#[source] io::Error),

    #[error("uptime command exited with {0}")]
    CommandStatus(std::process::ExitStatus),

    #[error("could not parse uptime output: {0}")]
    Parse(String),
}

/// Errors that stop the server from starting or serving.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
