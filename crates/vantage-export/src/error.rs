//! Error types for artifact export.

use std::error::Error;
use std::fmt;
use std::io;

/// Errors that can occur while writing an artifact.
#[derive(Debug)]
pub enum ExportError {
    /// The underlying sink failed.
    Io(io::Error),
    /// JSON serialization failed.
    Json(serde_json::Error),
    /// The requested delimiter cannot separate fields unambiguously.
    InvalidDelimiter {
        /// The rejected delimiter.
        delimiter: char,
    },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Json(e) => write!(f, "JSON error: {e}"),
            Self::InvalidDelimiter { delimiter } => {
                write!(f, "invalid delimiter {delimiter:?}")
            }
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::InvalidDelimiter { .. } => None,
        }
    }
}

impl From<io::Error> for ExportError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Reject delimiters that collide with numbers, the pass-list
/// separator, or line structure.
pub(crate) fn check_delimiter(delimiter: char) -> Result<(), ExportError> {
    let bad = delimiter.is_ascii_alphanumeric()
        || matches!(delimiter, '.' | '-' | '"' | '\n' | '\r')
        || delimiter == crate::PASS_LIST_SEPARATOR;
    if bad {
        return Err(ExportError::InvalidDelimiter { delimiter });
    }
    Ok(())
}
