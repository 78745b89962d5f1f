//! Destinations a logger can be bound to, and the encoders that write into them.

mod console;
mod json;

pub use console::ConsoleOutput;
pub use json::JsonOutput;

use crate::level::Level;
use std::fmt;

/// Where a logger sends its records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputKind {
    /// Line-delimited JSON appended to an owned file.
    File,
    /// Reserved for log shipping; cannot be constructed.
    Remote,
    /// Human-readable lines on stdout/stderr.
    #[default]
    Console,
}

impl OutputKind {
    /// Anything other than `file` or `remote` (including empty) means console.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "file" => Self::File,
            "remote" => Self::Remote,
            _ => Self::Console,
        }
    }

    /// The config spelling, so a kind round-trips through `log_output`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Remote => "remote",
            Self::Console => "console",
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One emission as handed to an encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub level: Level,
    pub message: String,
}

impl Record {
    /// Owns the message so a record can outlive the caller's borrow.
    #[must_use]
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// A structured encoder bound to one destination.
///
/// Takes `&mut self`: the logger serializes access, so implementations need no locking.
pub trait Output: Send {
    /// Encodes and writes one record.
    ///
    /// # Errors
    /// I/O or serialization errors from the underlying sink.
    fn write(&mut self, record: &Record) -> Result<(), crate::Error>;

    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&mut self) -> Result<(), crate::Error>;
}
