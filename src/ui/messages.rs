use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}

/// Human narrative or machine-parsable output, decided once per invocation
/// and passed down instead of swapping the print function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Porcelain,
}

impl OutputMode {
    pub fn from_porcelain(porcelain: bool) -> Self {
        if porcelain {
            OutputMode::Porcelain
        } else {
            OutputMode::Human
        }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, OutputMode::Human)
    }

    pub fn info<T: fmt::Display>(&self, msg: T) {
        if self.is_human() {
            info(msg);
        }
    }

    pub fn success<T: fmt::Display>(&self, msg: T) {
        if self.is_human() {
            success(msg);
        }
    }

    pub fn warning<T: fmt::Display>(&self, msg: T) {
        if self.is_human() {
            warning(msg);
        }
    }
}
