pub mod config;
pub mod error;
pub mod http;
pub mod messages;
pub mod middleware;
pub mod server;
pub mod storage;
pub mod uptime;

pub use server::Server;
