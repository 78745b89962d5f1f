//! `beaver` - minimal structured logging.
//!
//! A [`Logger`] is bound at construction to one destination:
//! - a file, receiving one JSON object per line (`time`, `level`, `msg`)
//! - the console, receiving human-readable `key=value` lines
//!
//! It is built from explicit arguments or from a YAML/JSON config file, and
//! [`LoggingMiddleware`] wraps an HTTP handler to log method, path and
//! duration of every request.
//!
//! # Example
//!
//! ```no_run
//! use beaver::{Logger, OutputKind};
//! use std::path::Path;
//!
//! let logger = Logger::new(OutputKind::File, "warn", Some(Path::new("app.log")))?;
//! logger.info("service started");
//! logger.log("cache miss"); // written at WARN, the configured level
//! logger.close()?;
//! # Ok::<(), beaver::Error>(())
//! ```
//!
//! # Features
//!
//! - `cli` (default): builds the `beaver` command-line binary

pub mod config;
pub mod error;
pub mod level;
pub mod logger;
pub mod middleware;
pub mod output;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::{Config, ConfigFormat};
pub use error::Error;
pub use level::{Level, ParseLevelError};
pub use logger::{INVALID_LEVEL_PREFIX, Logger, LoggerBuilder};
pub use middleware::{Handler, LoggingMiddleware, logging_middleware};
pub use output::{ConsoleOutput, JsonOutput, Output, OutputKind, Record};
