use crate::config::Config;
use std::path::Path;
use std::process::ExitCode;

/// Handles `beaver config <path>`: shows what the loader decoded, defaults included.
#[must_use]
pub fn cmd_config(path: &Path) -> ExitCode {
    let config = match Config::load_from(path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&config) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error encoding config: {e}");
            ExitCode::FAILURE
        }
    }
}
