//! Stepwise construction so every entry point (explicit arguments, config
//! file, embedders injecting writers) funnels through one validation path.

use super::{Destination, Logger};
use crate::Error;
use crate::output::{ConsoleOutput, JsonOutput, OutputKind};
use std::path::PathBuf;
use std::sync::Mutex;

/// Collects level and destination, then opens the destination in [`LoggerBuilder::build`].
#[derive(Debug)]
pub struct LoggerBuilder {
    level: String,
    output: OutputKind,
    file_path: Option<PathBuf>,
    console: Option<ConsoleOutput>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Console at `info` until told otherwise.
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: "info".to_string(),
            output: OutputKind::Console,
            file_path: None,
            console: None,
        }
    }

    /// Stored verbatim; unrecognized names are accepted.
    #[must_use]
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    #[must_use]
    pub const fn output(mut self, output: OutputKind) -> Self {
        self.output = output;
        self
    }

    /// Destination path for `File` output.
    #[must_use]
    pub fn file_path(mut self, path: Option<PathBuf>) -> Self {
        self.file_path = path;
        self
    }

    /// Shorthand for `File` output at `path`.
    #[must_use]
    pub fn file(self, path: impl Into<PathBuf>) -> Self {
        self.output(OutputKind::File).file_path(Some(path.into()))
    }

    #[must_use]
    pub fn console(self) -> Self {
        self.output(OutputKind::Console)
    }

    /// Console output writing into caller-supplied streams instead of stdout/stderr.
    #[must_use]
    pub fn console_output(mut self, console: ConsoleOutput) -> Self {
        self.console = Some(console);
        self.output(OutputKind::Console)
    }

    #[must_use]
    pub fn remote(self) -> Self {
        self.output(OutputKind::Remote)
    }

    /// Opens the destination and binds the encoder to it.
    ///
    /// # Errors
    /// [`Error::InvalidArguments`] when a file path is missing for `File` or given
    /// for `Console`, [`Error::NotImplemented`] for `Remote`, [`Error::Io`] when
    /// the log file cannot be opened.
    pub fn build(self) -> Result<Logger, Error> {
        let (destination, file_path) = match self.output {
            OutputKind::File => {
                let path = self.file_path.ok_or_else(|| {
                    Error::InvalidArguments("file output requires a file path".to_string())
                })?;
                let output = JsonOutput::open(path.clone())?;
                (Destination::File(output), Some(path))
            }
            OutputKind::Remote => return Err(Error::NotImplemented("remote output")),
            OutputKind::Console => {
                if let Some(path) = self.file_path {
                    return Err(Error::InvalidArguments(format!(
                        "console output takes no file path (got {})",
                        path.display()
                    )));
                }
                (
                    Destination::Console(self.console.unwrap_or_default()),
                    None,
                )
            }
        };

        tracing::debug!(output = %self.output, level = %self.level, "logger ready");
        Ok(Logger {
            level: self.level,
            output: self.output,
            file_path,
            destination: Mutex::new(Some(destination)),
        })
    }
}
