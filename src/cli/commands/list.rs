use crate::RunStatus;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::render::entries_table;

use super::{clock_for, timefile_for};

/// Handle the `list` command
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<RunStatus> {
    let last = match &cli.command {
        Commands::List { last } => *last,
        _ => None,
    };

    let clock = clock_for(cli);
    let log = timefile_for(cli, cfg).load()?;

    if log.is_empty() {
        println!("No entries.");
        return Ok(RunStatus::Done);
    }

    let shown = match last {
        Some(n) => log.tail(n),
        None => log.entries(),
    };
    let first_index = log.len() - shown.len() + 1;

    if cli.porcelain {
        for entry in shown {
            println!("{}", entry.format_as_row().join(","));
        }
    } else {
        print!("{}", entries_table(shown, first_index, clock.as_ref()));
    }

    Ok(RunStatus::Done)
}
