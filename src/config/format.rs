//! Config format selection by file extension.

use crate::Error;
use std::fmt;
use std::path::Path;

/// Formats a configuration file can be decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Sniffs the last four characters of the path: `yaml` or `json`.
    ///
    /// `config.yml` and extensionless files are rejected rather than decoded as an empty record.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedFormat`] for any other suffix.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let name = path.to_string_lossy();
        let suffix = name
            .char_indices()
            .rev()
            .nth(3)
            .map_or("", |(idx, _)| &name[idx..]);

        match suffix {
            "yaml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            _ => Err(Error::UnsupportedFormat(path.to_path_buf())),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
