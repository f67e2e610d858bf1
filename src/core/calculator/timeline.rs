use crate::core::clock::Clock;
use crate::models::entry::Entry;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Worked minutes of a run of entries, in total and grouped by day.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Timeline {
    pub total_worked_minutes: i64,
    /// Only days that have at least one entry appear here.
    pub per_day: BTreeMap<NaiveDate, i64>,
}

impl Timeline {
    pub fn worked_days(&self) -> usize {
        self.per_day.len()
    }
}

pub fn build_timeline(entries: &[Entry], clock: &dyn Clock) -> Timeline {
    let mut timeline = Timeline::default();

    for entry in entries {
        let worked = entry.duration_minutes(clock);
        timeline.total_worked_minutes += worked;
        *timeline.per_day.entry(entry.day).or_insert(0) += worked;
    }

    timeline
}
