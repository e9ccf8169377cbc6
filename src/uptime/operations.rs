//! Uptime operations
//!
//! Reads uptime from `/proc/uptime` where available and falls back to
//! parsing the output of the `uptime` command.

use log::debug;
use regex::Regex;
use std::sync::LazyLock;
use tokio::process::Command;

use crate::error::UptimeError;
use crate::uptime::results::UptimeReport;

const PROC_UPTIME: &str = "/proc/uptime";

static UP_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bup\s+(.*)").expect("up clause pattern is valid"));
static DAYS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s+days?").expect("days pattern is valid"));
static CLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+):(\d+)").expect("clock pattern is valid"));
static HOURS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s+(?:hours?|hrs?)\b").expect("hours pattern is valid"));
static MINUTES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s+(?:minutes?|mins?)\b").expect("minutes pattern is valid")
});
static SECONDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s+(?:seconds?|secs?)\b").expect("seconds pattern is valid")
});

/// Gets system uptime, trying the native source before the shell command.
pub async fn get_uptime() -> Result<UptimeReport, UptimeError> {
    let seconds = match native_uptime().await {
        Ok(seconds) => seconds,
        Err(e) => {
            debug!("{}; falling back to uptime command", e);
            shell_uptime().await?
        }
    };

    Ok(UptimeReport::from_seconds(seconds))
}

async fn native_uptime() -> Result<f64, UptimeError> {
    let contents = tokio::fs::read_to_string(PROC_UPTIME)
        .await
        .map_err(|e| UptimeError::Native(format!("{PROC_UPTIME}: {e}")))?;

    parse_proc_uptime(&contents)
}

/// Parses the first field of `/proc/uptime` (seconds since boot).
pub fn parse_proc_uptime(contents: &str) -> Result<f64, UptimeError> {
    contents
        .split_whitespace()
        .next()
        .and_then(|field| field.parse::<f64>().ok())
        .ok_or_else(|| UptimeError::Native(format!("unexpected {PROC_UPTIME} contents")))
}

async fn shell_uptime() -> Result<f64, UptimeError> {
    let output = Command::new("uptime")
        .output()
        .await
        .map_err(UptimeError::Command)?;

    if !output.status.success() {
        return Err(UptimeError::CommandStatus(output.status));
    }

    parse_uptime_output(&String::from_utf8_lossy(&output.stdout))
}

/// Parses `uptime` output such as
/// `" 12:34:56 up 2 days,  3:45,  2 users,  load average: 1.23, 1.45, 1.67"`.
pub fn parse_uptime_output(output: &str) -> Result<f64, UptimeError> {
    let after_up = UP_CLAUSE
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| UptimeError::Parse(output.trim().to_string()))?;

    // The duration runs until the user count or the load averages.
    let clause = after_up
        .split(',')
        .take_while(|part| !part.contains("user") && !part.contains("load"))
        .collect::<Vec<_>>()
        .join(",");

    parse_uptime_clause(&clause).ok_or_else(|| UptimeError::Parse(output.trim().to_string()))
}

/// Parses the duration part, e.g. `"2 days, 3:45"`, `"5 min"` or
/// `"1 day, 20 hrs"`. Returns `None` when nothing recognisable is present.
pub fn parse_uptime_clause(clause: &str) -> Option<f64> {
    let mut total: u64 = 0;
    let mut matched = false;

    for (re, scale) in [
        (&*DAYS, 24 * 60 * 60),
        (&*HOURS, 60 * 60),
        (&*MINUTES, 60),
        (&*SECONDS, 1),
    ] {
        if let Some(caps) = re.captures(clause) {
            let value = caps[1].parse::<u64>().ok()?;
            total = total.checked_add(value.checked_mul(scale)?)?;
            matched = true;
        }
    }

    if let Some(caps) = CLOCK.captures(clause) {
        let hours = caps[1].parse::<u64>().ok()?;
        let minutes = caps[2].parse::<u64>().ok()?;
        let seconds = hours
            .checked_mul(60 * 60)?
            .checked_add(minutes.checked_mul(60)?)?;
        total = total.checked_add(seconds)?;
        matched = true;
    }

    matched.then_some(total as f64)
}
