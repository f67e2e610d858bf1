//! Run the stats and send a desktop notification when the cumulated
//! deviation from the daily target reaches the threshold.

use clap::Parser;
use std::process::ExitCode;
use worktime::cli::parser::NotifyCli;
use worktime::config::Config;
use worktime::core::clock::{Clock, SystemClock};
use worktime::core::logic::{Core, StatsOptions};
use worktime::errors::AppResult;
use worktime::notify::{CommandNotifier, Notification, Notifier};
use worktime::store::TimeFile;
use worktime::ui::messages::error;
use worktime::utils::logging::enable_logging;
use worktime::utils::path::expand_tilde;

fn run(cli: &NotifyCli, cfg: &Config) -> AppResult<()> {
    let clock: Box<dyn Clock> = match cli.now {
        Some(fixed) => Box::new(fixed),
        None => Box::new(SystemClock),
    };
    let store = match &cli.timefile {
        Some(p) => TimeFile::new(expand_tilde(p)),
        None => TimeFile::new(cfg.timefile_path()),
    };

    let opts = StatsOptions {
        include_today: true,
        hours_per_day: Some(cli.hours_per_day.unwrap_or(cfg.notify_hours_per_day)),
    };
    let stats = Core::build_stats(&store.load()?, clock.as_ref(), opts)?;

    let threshold = cli.threshold.unwrap_or(cfg.notify_threshold_minutes);
    if let Some(notification) = Notification::from_stats(&stats, threshold) {
        let command = cli.notifier.as_deref().unwrap_or(&cfg.notify_command);
        CommandNotifier::new(command).dispatch(&notification);
        println!("{notification}");
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = NotifyCli::parse();
    enable_logging(cli.verbose);

    let result = Config::load().and_then(|cfg| run(&cli, &cfg));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error(format!("Error: {}", e));
            ExitCode::FAILURE
        }
    }
}
