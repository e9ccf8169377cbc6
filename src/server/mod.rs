//! Server core functionality
//!
//! Binds the listener and serves the HTTP router.

pub mod core;

pub use self::core::Server;
