use crate::RunStatus;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::logic::{Core, StatsOptions};
use crate::errors::AppResult;
use crate::notify::{CommandNotifier, Notification, Notifier};
use crate::ui::messages::OutputMode;
use crate::ui::render::{porcelain_lines, stats_summary_lines};

use super::{clock_for, report_last_entry, timefile_for};

/// Handle the `stats` command
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<RunStatus> {
    let (notify, threshold) = match &cli.command {
        Commands::Stats { notify, threshold } => (*notify, *threshold),
        _ => (false, None),
    };

    let out = OutputMode::from_porcelain(cli.porcelain);
    let clock = clock_for(cli);
    let log = timefile_for(cli, cfg).load()?;

    report_last_entry(&log, clock.as_ref(), out);

    let opts = StatsOptions {
        include_today: !cli.not_today,
        hours_per_day: cli.hours_per_day.or(cfg.hours_per_day),
    };
    let stats = Core::build_stats(&log, clock.as_ref(), opts)?;

    let lines = match out {
        OutputMode::Human => stats_summary_lines(&stats),
        OutputMode::Porcelain => porcelain_lines(&stats),
    };
    for line in lines {
        println!("{line}");
    }

    if notify {
        let threshold = threshold.unwrap_or(cfg.notify_threshold_minutes);
        match Notification::from_stats(&stats, threshold) {
            Some(n) => {
                CommandNotifier::new(&cfg.notify_command).dispatch(&n);
                out.info(format!("Notification sent: {n}"));
            }
            None => out.info("No notification needed."),
        }
    }

    Ok(RunStatus::Done)
}
