//! worktime library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! accounting engine used by both binaries.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod notify;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing::debug;

/// How an invocation ended, when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Done,
    /// The requested action did not apply to the current log; nothing was written.
    Declined,
}

impl RunStatus {
    /// Distinct from both success (0) and fatal errors (1), so scripts can
    /// tell a no-op from a mutation.
    pub const DECLINED_EXIT_CODE: u8 = 3;

    pub fn exit_code(&self) -> u8 {
        match self {
            RunStatus::Done => 0,
            RunStatus::Declined => Self::DECLINED_EXIT_CODE,
        }
    }
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<RunStatus> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Arrive => cli::commands::arrive::handle(cli, cfg),
        Commands::Quit => cli::commands::quit::handle(cli, cfg),
        Commands::Stats { .. } => cli::commands::stats::handle(cli, cfg),
        Commands::List { .. } => cli::commands::list::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<RunStatus> {
    let cli = Cli::parse();
    utils::logging::enable_logging(cli.verbose);

    let cfg = Config::load()?;
    debug!(?cfg, "loaded configuration");

    dispatch(&cli, &cfg)
}
