//! File system storage management
//!
//! Handles path validation and confinement plus the file operations run on
//! validated paths.

pub mod filesystem;
pub mod operations;
pub mod results;
pub mod validation;

pub use filesystem::StorageRoot;
pub use operations::{read_file, write_file};
pub use results::ResolvedPath;
pub use validation::{resolve, validate_logical_path};
