//! worktime main entrypoint.

use std::process::ExitCode;
use worktime::run;
use worktime::ui::messages::error;

fn main() -> ExitCode {
    match run() {
        Ok(status) => ExitCode::from(status.exit_code()),
        Err(e) => {
            error(format!("Error: {}", e));
            ExitCode::FAILURE
        }
    }
}
