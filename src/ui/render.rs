//! Presentation of engine results: summary lines, porcelain pairs, entry tables.

use crate::core::clock::Clock;
use crate::models::entry::Entry;
use crate::models::stats::StatsRecord;
use crate::utils::date::format_date;
use crate::utils::formatting::minutes_to_hr;
use crate::utils::table::{Column, Table};
use ansi_term::Colour;

/// Narrative summary of a stats record.
pub fn stats_summary_lines(stats: &StatsRecord) -> Vec<String> {
    let scope = if stats.include_today { "in" } else { "ex" };
    let first = format_date(stats.first_day);

    let mut lines = vec![
        format!(
            "Statistics on {} worked days ({}cluding today), from {} to {}",
            stats.worked_days_count,
            scope,
            first,
            format_date(stats.last_day)
        ),
        format!(
            "You worked a total of {}.",
            minutes_to_hr(stats.total_worked_minutes)
        ),
    ];

    if let Some(dev) = stats.total_deviation_minutes {
        lines.push(if dev > 0 {
            format!(
                "You worked {} too much since {}.",
                Colour::Green.paint(minutes_to_hr(dev)),
                first
            )
        } else if dev < 0 {
            format!(
                "You have to work {} more.",
                Colour::Red.paint(minutes_to_hr(-dev))
            )
        } else {
            format!("You are exactly on target since {}.", first)
        });
    }

    lines.push(format!(
        "You are working an average of {} per day.",
        minutes_to_hr(stats.average_minutes_per_day)
    ));

    lines
}

/// `key value` pairs, one per line; the deviation only appears when computed.
pub fn porcelain_lines(stats: &StatsRecord) -> Vec<String> {
    let mut out = vec![
        format!("worked_days_count {}", stats.worked_days_count),
        format!("first_day {}", format_date(stats.first_day)),
        format!("last_day {}", format_date(stats.last_day)),
        format!("total_worked_minutes {}", stats.total_worked_minutes),
    ];
    if let Some(dev) = stats.total_deviation_minutes {
        out.push(format!("total_deviation_minutes {}", dev));
    }
    out.push(format!(
        "average_minutes_per_day {}",
        stats.average_minutes_per_day
    ));
    out
}

/// Table of entries; `first_index` is the 1-based position of `entries[0]` in the log.
pub fn entries_table(entries: &[Entry], first_index: usize, clock: &dyn Clock) -> String {
    let mut table = Table::new(vec![
        Column::new("#", 4),
        Column::new("DATE", 8),
        Column::new("ARRIVE", 6),
        Column::new("QUIT", 6),
        Column::new("WORKED", 7),
    ]);

    for (offset, entry) in entries.iter().enumerate() {
        let [date, start, end] = entry.format_as_row();
        let end = if end.is_empty() { "--".to_string() } else { end };
        let worked = minutes_to_hr(entry.duration_minutes(clock));
        let worked = if entry.is_unfinished() {
            format!("{worked}*")
        } else {
            worked
        };

        table.add_row(vec![
            (first_index + offset).to_string(),
            date,
            start,
            end,
            worked,
        ]);
    }

    table.render()
}
