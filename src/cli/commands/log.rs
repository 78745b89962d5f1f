//! One-shot emission for shell scripts.

use crate::cli::LogArgs;
use std::process::ExitCode;

/// Handles `beaver log`.
///
/// Without `--severity` the generic call runs, so the configured level decides the severity.
#[must_use]
pub fn cmd_log(args: &LogArgs) -> ExitCode {
    let logger = match args.build_logger() {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("Error creating logger: {e}");
            return ExitCode::FAILURE;
        }
    };

    let message = args.message.join(" ");
    let written = match args.severity {
        Some(severity) => logger.try_emit(severity.into(), &message),
        None => logger.try_log(&message),
    };

    // Close even when the write failed so the handle is released before exit.
    let closed = logger.close();

    match written.and(closed) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error writing log record: {e}");
            ExitCode::FAILURE
        }
    }
}
