use crate::RunStatus;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::engine;
use crate::errors::AppResult;
use crate::ui::messages::OutputMode;

use super::{clock_for, finish_action, report_last_entry, timefile_for};

/// Handle the `quit` command
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<RunStatus> {
    let clock = clock_for(cli);
    let store = timefile_for(cli, cfg);
    let log = store.load()?;

    report_last_entry(&log, clock.as_ref(), OutputMode::from_porcelain(cli.porcelain));

    let outcome = engine::quit(log, clock.as_ref(), cli.overwrite)?;
    finish_action(outcome, &store, clock.as_ref(), cli, cfg)
}
