//! Clock source: the only thing separating a test run from real time.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::utils::time::truncate_to_minute;

/// Provides the current local date and time of day.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }

    /// Current time of day at minute precision.
    fn time_of_day(&self) -> NaiveTime {
        truncate_to_minute(self.now().time())
    }
}

/// Local wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock pinned to one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    pub fn at(day: NaiveDate, time: NaiveTime) -> Self {
        Self(day.and_time(time))
    }

    /// Parse `YYYY-MM-DD HH:MM`, the format of the hidden `--now` flag.
    pub fn parse(s: &str) -> Option<Self> {
        NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%d %H:%M")
            .ok()
            .map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
