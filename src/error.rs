//! Unified error type for all beaver operations.

use crate::config::ConfigFormat;
use std::path::PathBuf;

/// Error type for beaver operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error opening or writing a config or log file.
    Io(std::io::Error),
    /// Config file bytes did not parse as the format its extension selected.
    Decode {
        format: ConfigFormat,
        message: String,
    },
    /// Config file extension is neither `yaml` nor `json`.
    UnsupportedFormat(PathBuf),
    /// Constructor arguments don't match the shape the output kind needs.
    InvalidArguments(String),
    /// Reserved feature that has no implementation (remote output).
    NotImplemented(&'static str),
    /// Emission attempted on a logger whose destination was already released.
    Closed,
    /// Record serialization failed.
    Encode(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Decode { format, message } => write!(f, "{format} decode error: {message}"),
            Self::UnsupportedFormat(p) => {
                write!(f, "unsupported config format: {}", p.display())
            }
            Self::InvalidArguments(s) => write!(f, "invalid arguments: {s}"),
            Self::NotImplemented(what) => write!(f, "not implemented: {what}"),
            Self::Closed => write!(f, "logger is closed"),
            Self::Encode(s) => write!(f, "encode error: {s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Decode {
            format: ConfigFormat::Yaml,
            message: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode {
            format: ConfigFormat::Json,
            message: e.to_string(),
        }
    }
}
