//! Formatting utilities used for CLI and porcelain outputs.

use regex::Regex;
use std::sync::LazyLock;

static HR_DURATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(-?)(\d+)h(\d{2})m$").expect("valid duration regex"));

/// Format minutes as `HHhMMm` (e.g. `07h24m`). Negative values get a leading `-`.
pub fn minutes_to_hr(minutes: i64) -> String {
    let sign = if minutes < 0 { "-" } else { "" };
    let m = minutes.abs();
    format!("{}{:02}h{:02}m", sign, m / 60, m % 60)
}

/// Inverse of [`minutes_to_hr`]: returns `(hours, minutes)` of a non-negative duration.
pub fn parse_hr(s: &str) -> Option<(i64, i64)> {
    let caps = HR_DURATION.captures(s.trim())?;
    if !caps[1].is_empty() {
        return None;
    }
    let hours = caps[2].parse().ok()?;
    let minutes: i64 = caps[3].parse().ok()?;
    (minutes < 60).then_some((hours, minutes))
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}
