//! Unified application error type.
//! Every layer (store, core, cli, config) returns AppError so that fatal
//! conditions bubble up to `main` unchanged.

use chrono::NaiveDate;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Timefile error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Malformed row {row} in timefile: {reason}")]
    Parse { row: usize, reason: String },

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    // ---------------------------
    // Log errors
    // ---------------------------
    #[error(
        "Timefile is not sorted: latest day is {max_day} but the last entry is from {last_day}"
    )]
    CorruptLogOrder {
        max_day: NaiveDate,
        last_day: NaiveDate,
    },

    #[error("No entries to compute statistics on")]
    EmptyLog,

    #[error("Attempted to modify a finished entry ({0})")]
    FinishedEntryMutation(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type AppResult<T> = Result<T, AppError>;
