//! Each subcommand lives in its own file, keeping the match arm in main thin.

mod config;
mod log;

pub use config::cmd_config;
pub use log::cmd_log;
