//! Append-only JSONL file, one object per line so `jq` and line-oriented
//! tools can read the log without a custom parser.

use super::{Output, Record};

use chrono::Local;
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize)]
struct JsonEntry<'a> {
    /// RFC 3339, local time.
    time: String,
    /// Uppercase severity tag.
    level: &'static str,
    msg: &'a str,
}

/// Structured encoder bound to an exclusively owned, append-mode file handle.
#[derive(Debug)]
pub struct JsonOutput {
    path: PathBuf,
    file: File,
}

impl JsonOutput {
    /// Opens `path` create + append + write-only.
    ///
    /// # Errors
    /// Returns the I/O error if the file cannot be opened.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, crate::Error> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        tracing::debug!(path = %path.display(), "opened log file");
        Ok(Self { path, file })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flushes and syncs, then drops the handle.
    ///
    /// # Errors
    /// Returns the I/O error from syncing; the handle is released either way.
    pub fn close(mut self) -> Result<(), crate::Error> {
        self.file.flush()?;
        self.file.sync_all()?;
        tracing::debug!(path = %self.path.display(), "closed log file");
        Ok(())
    }

    fn encode(record: &Record) -> Result<String, crate::Error> {
        let entry = JsonEntry {
            time: Local::now().to_rfc3339(),
            level: record.level.label(),
            msg: &record.message,
        };
        serde_json::to_string(&entry)
            .map_err(|e| crate::Error::Encode(format!("JSON serialization failed: {e}")))
    }
}

impl Output for JsonOutput {
    fn write(&mut self, record: &Record) -> Result<(), crate::Error> {
        let mut line = Self::encode(record)?;
        line.push('\n');

        // Single write per record keeps lines whole under O_APPEND.
        self.file.write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), crate::Error> {
        self.file.flush()?;
        Ok(())
    }
}
