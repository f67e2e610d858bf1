//! Time utilities: parsing `HHhMM` fields, minute arithmetic, formatting.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};
use regex::Regex;
use std::sync::LazyLock;

/// Accepts `HH`, `HHh` and `HHhMM`.
static TIME_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})(?:h(\d{2})?)?$").expect("valid time regex"));

pub const TIME_FORMAT: &str = "%Hh%M";

/// Parse a textual time field. An empty field is an absent time, not an error.
pub fn parse_time_field(field: &str) -> AppResult<Option<NaiveTime>> {
    let field = field.trim();
    if field.is_empty() {
        return Ok(None);
    }

    let caps = TIME_FIELD
        .captures(field)
        .ok_or_else(|| AppError::InvalidTime(field.to_string()))?;

    let hour: u32 = caps[1]
        .parse()
        .map_err(|_| AppError::InvalidTime(field.to_string()))?;
    let minute: u32 = match caps.get(2) {
        Some(m) => m
            .as_str()
            .parse()
            .map_err(|_| AppError::InvalidTime(field.to_string()))?,
        None => 0,
    };

    NaiveTime::from_hms_opt(hour, minute, 0)
        .map(Some)
        .ok_or_else(|| AppError::InvalidTime(field.to_string()))
}

pub fn format_time(t: NaiveTime) -> String {
    t.format(TIME_FORMAT).to_string()
}

/// Drop seconds and sub-seconds: entries are stored at minute precision.
pub fn truncate_to_minute(t: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(t.hour(), t.minute(), 0).unwrap_or(t)
}

pub fn minutes_of_day(t: NaiveTime) -> i64 {
    (t.hour() * 60 + t.minute()) as i64
}

/// Signed difference in whole minutes; negative when `end` precedes `start`.
pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    minutes_of_day(end) - minutes_of_day(start)
}
