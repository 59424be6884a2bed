//! Error types for scene file reading and writing.

use std::fmt;
use std::io;
use std::path::PathBuf;

use orrery_core::{BodyField, BodyKind};

/// Errors that can occur while loading, parsing, or saving scene files.
#[derive(Debug)]
pub enum FormatError {
    /// The file could not be opened for reading or writing.
    FileAccess {
        /// Path that was being opened.
        path: PathBuf,
        /// The underlying OS error.
        source: io::Error,
    },
    /// An I/O error occurred after the file was opened.
    Io(io::Error),
    /// A record line is missing a field or a numeric field does not parse.
    Malformed {
        /// The offending field.
        field: BodyField,
        /// The original line, without its terminator.
        line: String,
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// A line handed to a per-kind parser does not start with that kind's
    /// exact keyword.
    TypeMismatch {
        /// The kind the parser was asked to build.
        expected: BodyKind,
        /// The keyword actually found.
        found: String,
        /// The original line.
        line: String,
    },
    /// The record-type keyword is neither `Star` nor `Planet`.
    UnknownRecordType {
        /// The unrecognized keyword.
        keyword: String,
        /// The original line.
        line: String,
    },
}

impl FormatError {
    /// Whether this is a grammar error on a single line, as opposed to
    /// a file access or I/O failure.
    pub fn is_line_error(&self) -> bool {
        matches!(
            self,
            Self::Malformed { .. } | Self::TypeMismatch { .. } | Self::UnknownRecordType { .. }
        )
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileAccess { path, source } => {
                write!(f, "cannot open {}: {source}", path.display())
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Malformed {
                field,
                line,
                detail,
            } => write!(f, "malformed field '{field}': {detail} in line {line:?}"),
            Self::TypeMismatch {
                expected,
                found,
                line,
            } => write!(
                f,
                "expected a '{expected}' record, found '{found}' in line {line:?}"
            ),
            Self::UnknownRecordType { keyword, line } => {
                write!(f, "unknown record type '{keyword}' in line {line:?}")
            }
        }
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileAccess { source, .. } => Some(source),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for FormatError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
