//! Console destination: `key=value` lines on stdout for direct severity calls,
//! `SEVERITY: message` lines on stderr for the generic call.

use super::{Output, Record};

use chrono::Local;
use std::fmt;
use std::io::{self, Write};

/// Human-readable encoder bound to the process's standard streams.
pub struct ConsoleOutput {
    /// Receives `time=.. level=.. msg=..` records.
    out: Box<dyn Write + Send>,
    /// The standard logging stream; receives plain generic-call lines.
    plain: Box<dyn Write + Send>,
}

impl Default for ConsoleOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConsoleOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleOutput").finish_non_exhaustive()
    }
}

impl ConsoleOutput {
    /// Records on stdout, plain lines on stderr.
    #[must_use]
    pub fn new() -> Self {
        Self::with_writers(io::stdout(), io::stderr())
    }

    /// Tests and embedders capture console output by supplying their own writers.
    #[must_use]
    pub fn with_writers(
        out: impl Write + Send + 'static,
        plain: impl Write + Send + 'static,
    ) -> Self {
        Self {
            out: Box::new(out),
            plain: Box::new(plain),
        }
    }

    /// Writes one unstructured line to the logging stream.
    ///
    /// # Errors
    /// I/O errors from the underlying stream.
    pub fn write_line(&mut self, line: &str) -> Result<(), crate::Error> {
        let mut content = String::with_capacity(line.len() + 1);
        content.push_str(line);
        content.push('\n');
        self.plain.write_all(content.as_bytes())?;
        Ok(())
    }

    fn format_record(record: &Record) -> String {
        format!(
            "time={} level={} msg={}",
            Local::now().to_rfc3339(),
            record.level.label(),
            quote_value(&record.message)
        )
    }
}

/// Bare values stay bare; anything a `key=value` reader could split on gets quoted.
fn quote_value(value: &str) -> String {
    let needs_quoting = value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || c == '"' || c == '=' || c.is_control());
    if needs_quoting {
        format!("{value:?}")
    } else {
        value.to_string()
    }
}

impl Output for ConsoleOutput {
    fn write(&mut self, record: &Record) -> Result<(), crate::Error> {
        let mut content = Self::format_record(record);
        content.push('\n');
        self.out.write_all(content.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), crate::Error> {
        self.out.flush()?;
        self.plain.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;

    #[test]
    fn bare_values_are_not_quoted() {
        assert_eq!(quote_value("ready"), "ready");
    }

    #[test]
    fn values_with_separators_are_quoted() {
        assert_eq!(quote_value("two words"), "\"two words\"");
        assert_eq!(quote_value("a=b"), "\"a=b\"");
        assert_eq!(quote_value(""), "\"\"");
        assert_eq!(quote_value("say \"hi\""), r#""say \"hi\"""#);
    }

    #[test]
    fn record_line_has_time_level_msg() {
        let line = ConsoleOutput::format_record(&Record::new(Level::Warn, "disk almost full"));
        assert!(line.starts_with("time="));
        assert!(line.ends_with(" level=WARN msg=\"disk almost full\""));
    }
}
