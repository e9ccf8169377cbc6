//! Health check.

pub const BANNER: &str = "Mowa API is running! 🚀

Available endpoints:
- POST /api/messages
- GET /api/uptime
- GET/POST /api/storage (JSON payload: returns structured response with file content)
- GET /api/storage/* (URL path: returns raw file content)";

/// `GET /`
pub async fn health() -> &'static str {
    BANNER
}
