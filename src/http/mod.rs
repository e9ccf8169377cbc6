//! HTTP API
//!
//! Axum router, handlers, request/response bodies and error mapping.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::HttpError;
pub use routes::create_router;
pub use state::{AppContext, AppState};
