use crate::core::calculator::{expected, surplus, timeline};
use crate::core::clock::Clock;
use crate::errors::{AppError, AppResult};
use crate::models::{entry::Entry, log::Log, stats::StatsRecord};
use tracing::debug;

/// Parameters of a `stats` computation.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsOptions {
    pub include_today: bool,
    pub hours_per_day: Option<f64>,
}

pub struct Core;

impl Core {
    /// Pure read over the log: no mutation, and the log itself is never returned.
    pub fn build_stats(log: &Log, clock: &dyn Clock, opts: StatsOptions) -> AppResult<StatsRecord> {
        let last = log.last().ok_or(AppError::EmptyLog)?;
        if let Some(max_day) = log.max_day()
            && max_day != last.day
        {
            return Err(AppError::CorruptLogOrder {
                max_day,
                last_day: last.day,
            });
        }

        let entries = if opts.include_today {
            log.entries()
        } else {
            without_today(log.entries(), clock)
        };

        let (first, last) = match (entries.first(), entries.last()) {
            (Some(f), Some(l)) => (f, l),
            _ => return Err(AppError::EmptyLog),
        };

        let timeline = timeline::build_timeline(entries, clock);
        let worked_days = timeline.worked_days();

        let total_deviation_minutes = expected::calculate_expected(opts.hours_per_day)
            .map(|target| surplus::calculate_surplus(&timeline, target));

        let average = timeline.total_worked_minutes as f64 / worked_days as f64;

        debug!(
            entries = entries.len(),
            worked_days,
            total = timeline.total_worked_minutes,
            deviation = ?total_deviation_minutes,
            "computed stats"
        );

        Ok(StatsRecord {
            worked_days_count: worked_days,
            first_day: first.day,
            last_day: last.day,
            total_worked_minutes: timeline.total_worked_minutes,
            total_deviation_minutes,
            average_minutes_per_day: average.round_ties_even() as i64,
            include_today: opts.include_today,
        })
    }
}

/// Drop trailing entries dated today, open or not.
fn without_today<'a>(entries: &'a [Entry], clock: &dyn Clock) -> &'a [Entry] {
    let mut end = entries.len();
    while end > 0 && entries[end - 1].is_today(clock) {
        end -= 1;
    }
    &entries[..end]
}
