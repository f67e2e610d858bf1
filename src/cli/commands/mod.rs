pub mod arrive;
pub mod config;
pub mod init;
pub mod list;
pub mod quit;
pub mod stats;

use crate::RunStatus;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::clock::{Clock, SystemClock};
use crate::core::engine::{self, ActionOutcome, Transition};
use crate::errors::AppResult;
use crate::models::log::Log;
use crate::store::TimeFile;
use crate::ui::messages::OutputMode;
use crate::ui::render::entries_table;
use crate::utils::path::expand_tilde;
use tracing::info;

pub(crate) fn clock_for(cli: &Cli) -> Box<dyn Clock> {
    match cli.now {
        Some(fixed) => Box::new(fixed),
        None => Box::new(SystemClock),
    }
}

pub(crate) fn timefile_for(cli: &Cli, cfg: &Config) -> TimeFile {
    match &cli.timefile {
        Some(p) => TimeFile::new(expand_tilde(p)),
        None => TimeFile::new(cfg.timefile_path()),
    }
}

/// Print how old the last entry is (human mode only).
pub(crate) fn report_last_entry(log: &Log, clock: &dyn Clock, out: OutputMode) {
    match engine::last_entry_age(log, clock) {
        Some(age) => out.info(age),
        None => out.info("The timefile is empty."),
    }
}

/// Persist an applied transition (unless dry-run) and report what happened.
pub(crate) fn finish_action(
    outcome: ActionOutcome,
    store: &TimeFile,
    clock: &dyn Clock,
    cli: &Cli,
    cfg: &Config,
) -> AppResult<RunStatus> {
    let out = OutputMode::from_porcelain(cli.porcelain);

    let status = match &outcome {
        ActionOutcome::Applied { transition, log } => {
            if cli.dry_run {
                out.warning("Dry run: timefile left untouched.");
            } else {
                match (transition, log.last()) {
                    (Transition::Arrived, Some(entry)) => store.append(entry)?,
                    _ => store.replace(log)?,
                }
                info!(
                    transition = transition.as_str(),
                    path = %store.path().display(),
                    "timefile updated"
                );
            }
            out.success(transition.message());
            RunStatus::Done
        }
        ActionOutcome::Declined { conflict, .. } => {
            out.warning(conflict.message());
            RunStatus::Declined
        }
    };

    let log = outcome.log();
    let tail = log.tail(cfg.log_tail);
    if out.is_human() && !tail.is_empty() {
        let first_index = log.len() - tail.len() + 1;
        print!("{}", entries_table(tail, first_index, clock));
    }

    Ok(status)
}
