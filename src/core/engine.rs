//! arrive / quit: state transitions driven by the last entry of the log.

use crate::core::clock::Clock;
use crate::errors::AppResult;
use crate::models::entry::Entry;
use crate::models::log::{Log, LogState};
use crate::utils::date::describe_days_ago;
use tracing::debug;

/// Which branch of an action mutated the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A new unfinished entry was appended.
    Arrived,
    /// The open entry's start was moved to now.
    ArrivalOverwritten,
    /// The open entry was finished now.
    Quit,
    /// The last, already finished, entry's end was moved to now.
    QuitOverwritten,
}

impl Transition {
    pub fn message(&self) -> &'static str {
        match self {
            Transition::Arrived => "Added a new entry, arrival now.",
            Transition::ArrivalOverwritten => "Changed last arrival at now.",
            Transition::Quit => "Changed last entry, quitting now.",
            Transition::QuitOverwritten => "Changed last quit at now.",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Transition::Arrived => "arrived",
            Transition::ArrivalOverwritten => "arrival_overwritten",
            Transition::Quit => "quit",
            Transition::QuitOverwritten => "quit_overwritten",
        }
    }
}

/// An action that does not apply to the current state of the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conflict {
    UnfinishedEntry,
    NoOpenEntry,
}

impl Conflict {
    pub fn message(&self) -> &'static str {
        match self {
            Conflict::UnfinishedEntry => {
                "Oops! The last entry is unfinished. You either never quit, or used the wrong command."
            }
            Conflict::NoOpenEntry => {
                "Oops! No unfinished entry. You either never arrived, or used the wrong command."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Applied { transition: Transition, log: Log },
    /// Nothing changed; `log` is the input log, untouched.
    Declined { conflict: Conflict, log: Log },
}

impl ActionOutcome {
    pub fn log(&self) -> &Log {
        match self {
            ActionOutcome::Applied { log, .. } | ActionOutcome::Declined { log, .. } => log,
        }
    }
}

pub fn arrive(mut log: Log, clock: &dyn Clock, overwrite: bool) -> AppResult<ActionOutcome> {
    let state = log.state();
    debug!(state = state.as_str(), overwrite, "arrive");

    let transition = match state {
        LogState::Open if !overwrite => {
            return Ok(ActionOutcome::Declined {
                conflict: Conflict::UnfinishedEntry,
                log,
            });
        }
        LogState::Open => {
            if let Some(last) = log.last_mut() {
                last.set_start_now(clock)?;
            }
            Transition::ArrivalOverwritten
        }
        LogState::Closed => {
            log.push(Entry::arrived_now(clock));
            Transition::Arrived
        }
    };

    Ok(ActionOutcome::Applied { transition, log })
}

pub fn quit(mut log: Log, clock: &dyn Clock, overwrite: bool) -> AppResult<ActionOutcome> {
    let state = log.state();
    debug!(state = state.as_str(), overwrite, "quit");

    let transition = match state {
        LogState::Open => {
            if let Some(last) = log.last_mut() {
                last.set_finish_now(clock)?;
            }
            Transition::Quit
        }
        LogState::Closed if overwrite && !log.is_empty() => {
            if let Some(last) = log.last_mut() {
                last.overwrite_finish_now(clock);
            }
            Transition::QuitOverwritten
        }
        LogState::Closed => {
            return Ok(ActionOutcome::Declined {
                conflict: Conflict::NoOpenEntry,
                log,
            });
        }
    };

    Ok(ActionOutcome::Applied { transition, log })
}

/// "Last entry is today." / "Last entry is 3 days ago."; `None` for an empty log.
pub fn last_entry_age(log: &Log, clock: &dyn Clock) -> Option<String> {
    let last = log.last()?;
    let days = (clock.today() - last.day).num_days();
    Some(match days {
        0 => "Last entry is today.".to_string(),
        n => format!("Last entry is {}.", describe_days_ago(n)),
    })
}
