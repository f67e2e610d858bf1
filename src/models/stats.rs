use chrono::NaiveDate;
use serde::Serialize;

/// Aggregate statistics over a log. Computed fresh, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsRecord {
    pub worked_days_count: usize,
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
    pub total_worked_minutes: i64,
    /// Sum of per-day deviations from the target; `None` without a target.
    pub total_deviation_minutes: Option<i64>,
    pub average_minutes_per_day: i64,
    pub include_today: bool,
}
