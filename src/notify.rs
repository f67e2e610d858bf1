//! Desktop notification when the cumulated deviation drifts too far from the target.

use crate::models::stats::StatsRecord;
use crate::utils::formatting::minutes_to_hr;
use std::fmt;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

pub const DEFAULT_THRESHOLD_MINUTES: i64 = 10;
pub const DEFAULT_NOTIFY_COMMAND: &str = "notify-send";

/// Magnitudes are always non-negative minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    Overwork(i64),
    WorkNeeded(i64),
}

impl Notification {
    /// `None` when there is no deviation, or when it stays under `threshold_minutes`.
    /// A deviation of exactly zero never notifies.
    pub fn from_stats(stats: &StatsRecord, threshold_minutes: i64) -> Option<Self> {
        let deviation = stats.total_deviation_minutes?;
        let threshold = threshold_minutes.max(0);

        if deviation > 0 && deviation >= threshold {
            Some(Notification::Overwork(deviation))
        } else if deviation < 0 && -deviation >= threshold {
            Some(Notification::WorkNeeded(-deviation))
        } else {
            None
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notification::Overwork(m) => write!(f, "OVERWORK: {}", minutes_to_hr(*m)),
            Notification::WorkNeeded(m) => write!(f, "WORK NEEDED: {}", minutes_to_hr(*m)),
        }
    }
}

pub trait Notifier {
    /// Fire and forget: failures must not reach the caller.
    fn dispatch(&self, notification: &Notification);
}

/// Runs `<program> [args..] <message>` without waiting for it.
#[derive(Debug, Clone)]
pub struct CommandNotifier {
    program: String,
    args: Vec<String>,
}

impl CommandNotifier {
    /// `command` is split on whitespace: `"notify-send -u critical"`.
    pub fn new(command: &str) -> Self {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts
            .next()
            .unwrap_or_else(|| DEFAULT_NOTIFY_COMMAND.to_string());
        Self {
            program,
            args: parts.collect(),
        }
    }
}

impl Default for CommandNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFY_COMMAND)
    }
}

impl Notifier for CommandNotifier {
    fn dispatch(&self, notification: &Notification) {
        let message = notification.to_string();
        let spawned = Command::new(&self.program)
            .args(&self.args)
            .arg(&message)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(child) => debug!(program = %self.program, pid = child.id(), %message, "notification sent"),
            Err(e) => warn!(program = %self.program, error = %e, "could not send notification"),
        }
    }
}
