//! Logging middleware
//!
//! Provides request logging functionality.

use axum::extract::{ConnectInfo, Request};
use axum::middleware::Next;
use axum::response::Response;
use log::info;
use std::net::SocketAddr;
use std::time::Instant;

/// Log one line per request: `status | latency | remote ip | method uri`.
pub async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    // Absent when the router is driven without a socket (tests).
    let remote = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "-".to_string());

    let started = Instant::now();
    let response = next.run(request).await;

    info!(
        "{} | {:?} | {} | {} {}",
        response.status().as_u16(),
        started.elapsed(),
        remote,
        method,
        uri
    );

    response
}
