use crate::RunStatus;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

use super::timefile_for;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and configuration file (skipped in test mode)
///  - an empty timefile, if none exists yet
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<RunStatus> {
    println!("⚙️  Initializing worktime…");

    if !cli.test {
        if cfg.write_if_missing()? {
            success(format!("Config file: {}", Config::config_file().display()));
        } else {
            info(format!(
                "Config file already present: {}",
                Config::config_file().display()
            ));
        }
    }

    let store = timefile_for(cli, cfg);
    if store.create_if_missing()? {
        success(format!("Timefile:    {}", store.path().display()));
    } else {
        info(format!("Timefile already present: {}", store.path().display()));
    }

    Ok(RunStatus::Done)
}
