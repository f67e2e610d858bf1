use crate::errors::{AppError, AppResult};
use crate::notify::{DEFAULT_NOTIFY_COMMAND, DEFAULT_THRESHOLD_MINUTES};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_timefile")]
    pub timefile: String,
    /// Target used by `stats`; no deviation is computed when unset.
    #[serde(default)]
    pub hours_per_day: Option<f64>,
    #[serde(default = "default_notify_hours")]
    pub notify_hours_per_day: f64,
    #[serde(default = "default_threshold")]
    pub notify_threshold_minutes: i64,
    #[serde(default = "default_notify_command")]
    pub notify_command: String,
    /// Number of entries shown after arrive/quit.
    #[serde(default = "default_log_tail")]
    pub log_tail: usize,
}

fn default_timefile() -> String {
    "~/.worktime/temps".to_string()
}
fn default_notify_hours() -> f64 {
    7.4
}
fn default_threshold() -> i64 {
    DEFAULT_THRESHOLD_MINUTES
}
fn default_notify_command() -> String {
    DEFAULT_NOTIFY_COMMAND.to_string()
}
fn default_log_tail() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timefile: default_timefile(),
            hours_per_day: None,
            notify_hours_per_day: default_notify_hours(),
            notify_threshold_minutes: default_threshold(),
            notify_command: default_notify_command(),
            log_tail: default_log_tail(),
        }
    }
}

impl Config {
    /// `~/.worktime` on every platform.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".worktime")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("worktime.conf")
    }

    /// Load the configuration file, or the defaults if there is none.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    /// Timefile location with `~` expanded.
    pub fn timefile_path(&self) -> PathBuf {
        expand_tilde(&self.timefile)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Create the config directory and write this configuration, unless a
    /// config file is already there. Returns whether a file was written.
    pub fn write_if_missing(&self) -> AppResult<bool> {
        let path = Self::config_file();
        if path.exists() {
            return Ok(false);
        }

        fs::create_dir_all(Self::config_dir())
            .map_err(|e| AppError::Config(format!("cannot create config directory: {e}")))?;
        fs::write(&path, self.to_yaml()?)?;
        Ok(true)
    }
}
