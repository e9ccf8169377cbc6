//! HTTP request handlers.
//!
//! Handlers stay thin: they parse input, call into the domain modules and
//! translate typed outcomes into responses.

pub mod health;
pub mod messages;
pub mod storage;
pub mod uptime;
