use crate::RunStatus;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<RunStatus> {
    if let Commands::Config { print_config } = &cli.command {
        if *print_config {
            println!("📄 Current configuration ({}):\n", Config::config_file().display());
            print!("{}", cfg.to_yaml()?);
        } else {
            println!("{}", Config::config_file().display());
        }
    }

    Ok(RunStatus::Done)
}
