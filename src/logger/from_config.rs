//! Logger construction from explicit arguments or a configuration file.

use super::Logger;
use crate::Error;
use crate::config::Config;
use crate::output::OutputKind;
use std::path::Path;

impl Logger {
    /// Builds a logger for `output` at `level`; `destination` is the log file for `File`.
    ///
    /// # Errors
    /// See [`LoggerBuilder::build`](super::LoggerBuilder::build).
    pub fn new(
        output: OutputKind,
        level: impl Into<String>,
        destination: Option<&Path>,
    ) -> Result<Self, Error> {
        Self::builder()
            .output(output)
            .level(level)
            .file_path(destination.map(Path::to_path_buf))
            .build()
    }

    /// String-argument form: `<kind> <level> [path]`.
    ///
    /// Unknown kinds mean console. `file` needs exactly three arguments, every
    /// other kind exactly two.
    ///
    /// # Errors
    /// [`Error::InvalidArguments`] on an arity mismatch, otherwise as [`Logger::new`].
    pub fn from_args(args: &[&str]) -> Result<Self, Error> {
        match *args {
            [kind, level] => Self::new(OutputKind::parse(kind), level, None),
            [kind, level, path] => Self::new(OutputKind::parse(kind), level, Some(Path::new(path))),
            _ => Err(Error::InvalidArguments(format!(
                "expected <kind> <level> [path], got {} argument(s)",
                args.len()
            ))),
        }
    }

    /// Loads the config at `path` and builds a logger from it.
    ///
    /// # Errors
    /// Anything [`Config::load_from`] or [`Logger::from_config`] returns.
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let config = Config::load_from(path)?;
        Self::from_config(&config)
    }

    /// The log file is opened only for `log_output: file`; `log_file` is ignored otherwise.
    ///
    /// # Errors
    /// [`Error::InvalidArguments`] for `file` without `log_file`,
    /// [`Error::NotImplemented`] for `remote`, [`Error::Io`] if the log file can't be opened.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let output = config.output_kind();
        tracing::debug!(%output, level = %config.level, "building logger from config");

        let mut builder = Self::builder().output(output).level(config.level.clone());
        if output == OutputKind::File {
            builder = builder.file_path(config.file_path());
        }
        builder.build()
    }
}
