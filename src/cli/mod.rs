//! CLI module for beaver.
//!
//! This module provides the command-line interface using Clap.

pub mod commands;

use crate::Error;
use crate::level::Level;
use crate::logger::Logger;
use crate::output::OutputKind;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Severity for a direct call that bypasses the configured level.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Severity {
    Info,
    Warn,
    Error,
}

impl From<Severity> for Level {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Info => Self::Info,
            Severity::Warn => Self::Warn,
            Severity::Error => Self::Error,
        }
    }
}

/// beaver - Write structured log records from the command line.
#[derive(Parser)]
#[command(
    name = "beaver",
    version,
    about = "Write structured log records from the command line"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Write one message.
    Log(LogArgs),
    /// Load a config file and print the decoded record as JSON.
    Config {
        /// YAML or JSON config file
        path: PathBuf,
    },
}

/// Logger selection and the message to write.
#[derive(Debug, Args)]
pub struct LogArgs {
    /// Build the logger from a YAML/JSON config file
    #[arg(short, long, value_name = "FILE", conflicts_with_all = ["output", "level", "file"])]
    pub config: Option<PathBuf>,
    /// Output kind: file, remote, or console
    #[arg(short, long, default_value = "console")]
    pub output: String,
    /// Configured level used by the generic call
    #[arg(short, long, default_value = "info")]
    pub level: String,
    /// Log file for file output
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,
    /// Write at this severity directly instead of the configured level
    #[arg(short, long, value_enum)]
    pub severity: Option<Severity>,
    /// Log message
    #[arg(required = true)]
    pub message: Vec<String>,
}

impl LogArgs {
    /// Config file wins when given; otherwise the explicit arguments are used.
    ///
    /// # Errors
    /// Any construction error from [`Logger`].
    pub fn build_logger(&self) -> Result<Logger, Error> {
        match &self.config {
            Some(path) => Logger::from_config_file(path),
            None => Logger::new(
                OutputKind::parse(&self.output),
                self.level.clone(),
                self.file.as_deref(),
            ),
        }
    }
}

pub use commands::{cmd_config, cmd_log};
