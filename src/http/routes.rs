//! Route definitions and router construction.

use axum::Router;
use axum::http::{Method, header};
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use crate::http::handlers;
use crate::http::state::AppState;
use crate::middleware::log_request;

/// Permissive CORS for a localhost tool.
fn build_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ])
}

/// API routes without the `/api` prefix.
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/messages", post(handlers::messages::send_messages))
        .route("/uptime", get(handlers::uptime::get_uptime))
        .route(
            "/storage",
            get(handlers::storage::handle_storage).post(handlers::storage::handle_storage),
        )
        .route(
            "/storage/{*path}",
            get(handlers::storage::handle_storage_with_path)
                .post(handlers::storage::reject_raw_write),
        )
}

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health::health))
        .nest("/api", api_routes())
        .layer(middleware::from_fn(log_request))
        .layer(build_cors_layer())
        .with_state(state)
}
