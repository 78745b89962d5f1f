//! `beaver` binary: writes log records from shell scripts.
//!
//! Usage:
//!   beaver log [--config FILE] [--output KIND] [--level LEVEL] [--file PATH] [--severity S] <msg>...
//!   beaver config <FILE>
//!
//! Diagnostics from the library go to stderr, filtered by `RUST_LOG` (default `warn`).

use beaver::cli::{Cli, Command, cmd_config, cmd_log};
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "beaver=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Log(args) => cmd_log(&args),
        Command::Config { path } => cmd_config(&path),
    }
}
