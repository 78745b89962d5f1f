//! Flat `{log_level, log_output, log_file}` configuration loaded from YAML or JSON.
//!
//! No schema validation happens here: missing keys decode to empty strings and
//! unknown level names are preserved verbatim for the logger to deal with.

mod format;

pub use format::ConfigFormat;

use crate::Error;
use crate::output::OutputKind;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Consumed once to build a [`Logger`](crate::Logger), then discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Configured severity name; `info`, `warn`, `error` or anything else.
    #[serde(rename = "log_level", deserialize_with = "null_as_empty")]
    pub level: String,
    /// `file`, `remote`, or anything else meaning console.
    #[serde(rename = "log_output", deserialize_with = "null_as_empty")]
    pub output: String,
    /// Required only when `output` is `file`.
    #[serde(rename = "log_file", deserialize_with = "null_as_empty")]
    pub file_path: String,
}

/// An explicit `null` decodes like a missing key, so JSON agrees with a blank YAML value.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Config {
    /// Opens `path` and decodes it with the format its extension selects.
    ///
    /// # Errors
    /// [`Error::UnsupportedFormat`] for unknown extensions, [`Error::Io`] when the
    /// file cannot be opened, [`Error::Decode`] when the contents don't parse.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        tracing::debug!(path = %path.display(), %format, "loading config");

        let reader = BufReader::new(File::open(path)?);
        let config = match format {
            ConfigFormat::Yaml => Self::from_yaml_reader(reader)?,
            ConfigFormat::Json => serde_json::from_reader(reader)?,
        };

        Ok(config)
    }

    /// Decodes a YAML document; an empty document is the all-default record.
    ///
    /// # Errors
    /// [`Error::Decode`] when the text is not valid YAML for this record.
    pub fn from_yaml_str(s: &str) -> Result<Self, Error> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(s)?)
    }

    /// # Errors
    /// [`Error::Decode`] when the text is not valid JSON for this record.
    pub fn from_json_str(s: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(s)?)
    }

    fn from_yaml_reader(mut reader: impl Read) -> Result<Self, Error> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::from_yaml_str(&content)
    }

    /// Unrecognized `log_output` values mean console.
    #[must_use]
    pub fn output_kind(&self) -> OutputKind {
        OutputKind::parse(&self.output)
    }

    /// `log_file` with a leading `~` expanded; `None` when unset.
    #[must_use]
    pub fn file_path(&self) -> Option<PathBuf> {
        if self.file_path.is_empty() {
            return None;
        }
        let expanded = shellexpand::tilde(&self.file_path);
        Some(PathBuf::from(expanded.as_ref()))
    }
}
