use crate::core::clock::Clock;
use crate::errors::{AppError, AppResult};
use crate::utils::date::{format_date, parse_date};
use crate::utils::time::{format_time, minutes_between, parse_time_field};
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use std::fmt;

/// One work session: a day, an arrival time and, once the user quits, a departure time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub day: NaiveDate,         // ⇔ column 1 "yy/mm/dd"
    pub start: NaiveTime,       // ⇔ column 2 "HHhMM"
    pub end: Option<NaiveTime>, // ⇔ column 3 "HHhMM", empty while unfinished
}

impl Entry {
    pub fn new(day: NaiveDate, start: NaiveTime, end: Option<NaiveTime>) -> Self {
        Self { day, start, end }
    }

    /// A fresh unfinished entry starting at the clock's current instant.
    pub fn arrived_now(clock: &dyn Clock) -> Self {
        Self::new(clock.today(), clock.time_of_day(), None)
    }

    /// Build an entry from the three textual fields of a timefile row.
    /// An empty `end` means the session is still open.
    pub fn from_fields(date: &str, start: &str, end: &str) -> AppResult<Self> {
        let day = parse_date(date)?;
        let start = parse_time_field(start)?
            .ok_or_else(|| AppError::InvalidTime("missing start time".to_string()))?;
        let end = parse_time_field(end)?;
        Ok(Self::new(day, start, end))
    }

    /// `[date, start, end-or-empty]`, shared by display and serialization.
    pub fn format_as_row(&self) -> [String; 3] {
        [
            format_date(self.day),
            format_time(self.start),
            self.end.map(format_time).unwrap_or_default(),
        ]
    }

    pub fn is_unfinished(&self) -> bool {
        self.end.is_none()
    }

    pub fn is_today(&self, clock: &dyn Clock) -> bool {
        self.day == clock.today()
    }

    /// Worked minutes. Open sessions are measured against the clock's time of day.
    /// Negative values (end before start) are returned as-is.
    pub fn duration_minutes(&self, clock: &dyn Clock) -> i64 {
        let end = self.end.unwrap_or_else(|| clock.time_of_day());
        minutes_between(self.start, end)
    }

    pub fn set_finish_now(&mut self, clock: &dyn Clock) -> AppResult<()> {
        self.ensure_unfinished()?;
        self.end = Some(clock.time_of_day());
        Ok(())
    }

    pub fn set_start_now(&mut self, clock: &dyn Clock) -> AppResult<()> {
        self.ensure_unfinished()?;
        self.start = clock.time_of_day();
        Ok(())
    }

    /// Correction path: replace the departure time even if one is recorded.
    pub fn overwrite_finish_now(&mut self, clock: &dyn Clock) {
        self.end = Some(clock.time_of_day());
    }

    fn ensure_unfinished(&self) -> AppResult<()> {
        if self.is_unfinished() {
            Ok(())
        } else {
            Err(AppError::FinishedEntryMutation(self.to_string()))
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_as_row().join(" "))
    }
}
