//! Uptime result types

use serde::{Deserialize, Serialize};

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

/// System uptime as returned by `GET /api/uptime`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UptimeReport {
    pub uptime: String,
    pub uptime_seconds: f64,
    pub formatted: String,
}

impl UptimeReport {
    pub fn from_seconds(uptime_seconds: f64) -> Self {
        let formatted = format_uptime(uptime_seconds);
        Self {
            uptime: formatted.clone(),
            uptime_seconds,
            formatted,
        }
    }
}

/// Formats seconds as `"2 days, 3 hours, 1 minute"`, leaving out zero parts.
pub fn format_uptime(uptime_seconds: f64) -> String {
    let total = uptime_seconds.max(0.0) as u64;
    let days = total / SECONDS_PER_DAY;
    let hours = (total % SECONDS_PER_DAY) / SECONDS_PER_HOUR;
    let minutes = (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;

    [(days, "day"), (hours, "hour"), (minutes, "minute")]
        .into_iter()
        .filter(|(count, _)| *count > 0)
        .map(|(count, unit)| pluralize(count, unit))
        .collect::<Vec<_>>()
        .join(", ")
}

fn pluralize(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}
