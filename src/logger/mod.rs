//! The logger owns exactly one destination, chosen at construction and never
//! swapped. Emission is serialized through a mutex so records from concurrent
//! callers never interleave; closing takes the destination out for good.

mod builder;
mod from_config;

pub use builder::LoggerBuilder;

use crate::Error;
use crate::level::Level;
use crate::output::{ConsoleOutput, JsonOutput, Output, OutputKind, Record};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Prefix the generic call puts in front of messages when the configured level is unrecognized.
pub const INVALID_LEVEL_PREFIX: &str = "INVALID LOG LEVEL: ";

/// Bound encoder; `File` iff the logger's output kind is `File`.
#[derive(Debug)]
pub(crate) enum Destination {
    File(JsonOutput),
    Console(ConsoleOutput),
}

impl Destination {
    fn write(&mut self, record: &Record) -> Result<(), Error> {
        match self {
            Self::File(output) => output.write(record),
            Self::Console(output) => output.write(record),
        }
    }

    fn close(self) -> Result<(), Error> {
        match self {
            Self::File(output) => output.close(),
            Self::Console(mut output) => output.flush(),
        }
    }
}

/// Immutable after construction apart from its destination, which [`Logger::close`] releases.
///
/// Share it between request handlers through `Arc<Logger>`.
#[derive(Debug)]
pub struct Logger {
    level: String,
    output: OutputKind,
    file_path: Option<PathBuf>,
    destination: Mutex<Option<Destination>>,
}

impl Logger {
    /// Entry point for loggers with injected console writers or validated arguments.
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Writes at `INFO` regardless of the configured level.
    pub fn info(&self, message: &str) {
        self.emit(Level::Info, message);
    }

    /// Writes at `WARN` regardless of the configured level.
    pub fn warn(&self, message: &str) {
        self.emit(Level::Warn, message);
    }

    /// Writes at `ERROR` regardless of the configured level.
    pub fn error(&self, message: &str) {
        self.emit(Level::Error, message);
    }

    /// Generic emission: dispatches on the configured level.
    ///
    /// File destinations get a structured record at that severity; console
    /// destinations get a plain `SEVERITY: message` line on the logging stream.
    /// An unrecognized configured level writes at `INFO` with [`INVALID_LEVEL_PREFIX`].
    pub fn log(&self, message: &str) {
        if let Err(e) = self.try_log(message) {
            tracing::warn!(error = %e, output = %self.output, "dropped log record");
        }
    }

    /// Same as the direct severity calls, but reports the write result.
    ///
    /// # Errors
    /// [`Error::Closed`] after [`Logger::close`]; otherwise the destination's write error.
    pub fn try_emit(&self, level: Level, message: &str) -> Result<(), Error> {
        let record = Record::new(level, message);
        let mut destination = self.lock();
        destination.as_mut().ok_or(Error::Closed)?.write(&record)
    }

    /// Same as [`Logger::log`], but reports the write result.
    ///
    /// # Errors
    /// [`Error::Closed`] after [`Logger::close`]; otherwise the destination's write error.
    pub fn try_log(&self, message: &str) -> Result<(), Error> {
        let severity = self.severity();
        let mut destination = self.lock();

        match destination.as_mut().ok_or(Error::Closed)? {
            Destination::File(output) => {
                let record = match severity {
                    Some(level) => Record::new(level, message),
                    None => Record::new(Level::Info, format!("{INVALID_LEVEL_PREFIX}{message}")),
                };
                output.write(&record)
            }
            Destination::Console(output) => {
                let line = match severity {
                    Some(level) => format!("{}: {message}", level.label()),
                    None => format!("{INVALID_LEVEL_PREFIX}{message}"),
                };
                output.write_line(&line)
            }
        }
    }

    /// Releases the destination; the file handle is synced and dropped.
    ///
    /// Closing an already-closed logger is a no-op.
    ///
    /// # Errors
    /// I/O error from the final flush/sync. The handle is released regardless.
    pub fn close(&self) -> Result<(), Error> {
        let Some(destination) = self.lock().take() else {
            tracing::debug!("logger already closed");
            return Ok(());
        };
        tracing::debug!(output = %self.output, "closing logger");
        destination.close()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.lock().is_none()
    }

    /// Configured level exactly as given, including unrecognized names.
    #[must_use]
    pub fn level(&self) -> &str {
        &self.level
    }

    /// `None` unless the unrecognized-level fallback applies.
    #[must_use]
    pub fn severity(&self) -> Option<Level> {
        self.level.parse().ok()
    }

    /// Present iff the output kind is `File`.
    #[must_use]
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// The destination kind chosen at construction; fixed for the logger's lifetime.
    #[must_use]
    pub const fn output(&self) -> OutputKind {
        self.output
    }

    fn emit(&self, level: Level, message: &str) {
        if let Err(e) = self.try_emit(level, message) {
            tracing::warn!(error = %e, %level, output = %self.output, "dropped log record");
        }
    }

    /// A writer that panicked mid-record leaves nothing worth protecting; keep logging.
    fn lock(&self) -> MutexGuard<'_, Option<Destination>> {
        self.destination
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
