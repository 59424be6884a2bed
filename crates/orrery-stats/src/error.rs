//! Error types for statistics reporting.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::config::ConfigError;

/// Errors that can occur while writing a statistics report.
#[derive(Debug)]
pub enum StatsError {
    /// The report file could not be created.
    FileAccess {
        /// Path that was being opened.
        path: PathBuf,
        /// The underlying OS error.
        source: io::Error,
    },
    /// An I/O error occurred while writing the report.
    Io(io::Error),
    /// The reporter configuration is invalid.
    Config(ConfigError),
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileAccess { path, source } => {
                write!(f, "cannot open {}: {source}", path.display())
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl Error for StatsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::FileAccess { source, .. } => Some(source),
            Self::Io(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

impl From<io::Error> for StatsError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ConfigError> for StatsError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
