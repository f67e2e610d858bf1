use crate::core::clock::FixedClock;
use clap::{Parser, Subcommand};

/// Command-line interface definition for worktime
#[derive(Parser)]
#[command(
    name = "worktime",
    version = env!("CARGO_PKG_VERSION"),
    about = "Save effective working hours, and compute general stats on them",
    long_about = None
)]
pub struct Cli {
    /// The file containing the times (overrides the configured one)
    #[arg(global = true, long = "timefile", short = 'f', value_name = "FILE")]
    pub timefile: Option<String>,

    /// Don't modify anything
    #[arg(global = true, long = "dry-run", short = 'd')]
    pub dry_run: bool,

    /// If data already exists, overwrite it
    #[arg(global = true, long = "overwrite", short = 'o')]
    pub overwrite: bool,

    /// Output data in a parsable way
    #[arg(global = true, long = "porcelain", short = 'p')]
    pub porcelain: bool,

    /// How many hours you should work per day to reach your total workload
    #[arg(global = true, long = "hours-per-day", value_name = "HOURS")]
    pub hours_per_day: Option<f64>,

    /// Don't consider today in stats
    #[arg(global = true, long = "not-today", short = 'n')]
    pub not_today: bool,

    /// Enable debug logging on stderr
    #[arg(global = true, long = "verbose", short = 'v')]
    pub verbose: bool,

    /// Pin the clock to "YYYY-MM-DD HH:MM"
    #[arg(global = true, long = "now", hide = true, value_parser = parse_now)]
    pub now: Option<FixedClock>,

    /// Run in test mode (no config file written by init)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file and an empty timefile
    Init,

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Record an arrival now
    Arrive,

    /// Record a departure now
    Quit,

    /// Compute statistics over the timefile
    Stats {
        #[arg(long = "notify", help = "Send a desktop notification about the deviation")]
        notify: bool,

        #[arg(
            long = "threshold",
            value_name = "MINUTES",
            requires = "notify",
            help = "Minimum absolute deviation that triggers a notification"
        )]
        threshold: Option<i64>,
    },

    /// List entries of the timefile
    List {
        #[arg(long = "last", value_name = "N", help = "Show only the last N entries")]
        last: Option<usize>,
    },
}

/// Companion tool: notify when the deviation from the target crosses a threshold
#[derive(Parser)]
#[command(
    name = "worktime-notify",
    version = env!("CARGO_PKG_VERSION"),
    about = "Run notify-send whenever the given amount of hours of work is reached",
    long_about = None
)]
pub struct NotifyCli {
    /// How many hours you should work per day to reach your total workload
    #[arg(long = "hours-per-day", value_name = "HOURS")]
    pub hours_per_day: Option<f64>,

    /// Minimum absolute deviation, in minutes, worth a notification
    #[arg(long = "threshold", value_name = "MINUTES")]
    pub threshold: Option<i64>,

    /// Notification command (default: notify-send)
    #[arg(long = "notifier", value_name = "CMD")]
    pub notifier: Option<String>,

    /// The file containing the times (overrides the configured one)
    #[arg(long = "timefile", short = 'f', value_name = "FILE")]
    pub timefile: Option<String>,

    /// Enable debug logging on stderr
    #[arg(long = "verbose", short = 'v')]
    pub verbose: bool,

    #[arg(long = "now", hide = true, value_parser = parse_now)]
    pub now: Option<FixedClock>,
}

fn parse_now(s: &str) -> Result<FixedClock, String> {
    FixedClock::parse(s).ok_or_else(|| format!("expected \"YYYY-MM-DD HH:MM\", got \"{s}\""))
}
