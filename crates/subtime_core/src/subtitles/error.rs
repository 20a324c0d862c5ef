//! Timestamp engine error types.
//!
//! Errors are split by recovery tier:
//! - `ConfigError` aborts a whole batch before any file is opened.
//! - `FormatError` / `LineError` are recovered per line.
//! - `SubtitleError` fails a single file; the batch moves on.

use std::path::PathBuf;

use super::types::TimestampEncoding;

/// Invalid user-supplied operation parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Shift value is not a finite number.
    #[error("Invalid shift value '{0}': expected a number of seconds")]
    InvalidShift(String),

    /// Frame rate is non-numeric or not positive.
    #[error("Invalid frame rate '{0}': expected a positive number")]
    InvalidFramerate(String),

    /// Layer list contains a token that is not an integer.
    #[error("Invalid layer list '{spec}': '{token}' is not an integer")]
    InvalidLayers { spec: String, token: String },
}

impl ConfigError {
    /// Create an invalid shift error.
    pub fn invalid_shift(value: impl Into<String>) -> Self {
        Self::InvalidShift(value.into())
    }

    /// Create an invalid frame rate error.
    pub fn invalid_framerate(value: impl Into<String>) -> Self {
        Self::InvalidFramerate(value.into())
    }
}

/// A timestamp does not match its expected grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid timestamp '{value}': expected {}", .expected.name())]
pub struct FormatError {
    /// The offending text.
    pub value: String,
    /// The encoding the parser was asked for.
    pub expected: TimestampEncoding,
}

impl FormatError {
    pub fn new(value: impl Into<String>, expected: TimestampEncoding) -> Self {
        Self {
            value: value.into(),
            expected,
        }
    }
}

/// A recognized timing line that could not be rewritten.
///
/// The line is emitted unchanged and processing continues.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    /// One of the line's timestamps is malformed.
    #[error("Invalid time format: {0}")]
    TimeParse(#[from] FormatError),

    /// The Dialogue layer descriptor is neither `<n>` nor `Marked=<n>`.
    #[error("Unrecognized layer descriptor '{0}'")]
    LayerParse(String),

    /// The Dialogue line has too few fields to carry timestamps.
    #[error("Invalid event: expected at least 3 fields, got {0}")]
    MalformedDialogue(usize),
}

/// Errors that fail a single file.
#[derive(Debug, thiserror::Error)]
pub enum SubtitleError {
    /// Failed to read subtitle file (missing, permissions, not UTF-8).
    #[error("Failed to read file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write subtitle file.
    #[error("Failed to write file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Unknown or unsupported subtitle format.
    #[error("Unknown subtitle format for file '{0}'")]
    UnknownFormat(PathBuf),
}

impl SubtitleError {
    /// Create a read error.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Create a write error.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteError {
            path: path.into(),
            source,
        }
    }
}
