//! System uptime

pub mod operations;
pub mod results;

pub use operations::{get_uptime, parse_uptime_output};
pub use results::{UptimeReport, format_uptime};
