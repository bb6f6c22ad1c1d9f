//! Unified error types for chatexport.
//!
//! Every fallible operation in the crate returns [`ExportError`]. Parsing is
//! all-or-nothing: the first malformed transcript line aborts the export and
//! surfaces here with its 1-based line number.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatexport operations.
///
/// # Example
///
/// ```rust
/// use chatexport::error::Result;
/// use chatexport::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ExportError>;

/// The error type for all chatexport operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    /// An I/O error occurred while reading the transcript or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A transcript line does not split into timestamp, author and text.
    ///
    /// Both the author and the message text must be non-empty.
    #[error("Malformed line {line}: expected '<timestamp> <author> <message>', got '{content}'")]
    MalformedLine {
        /// 1-based line number in the transcript
        line: usize,
        /// The offending line
        content: String,
    },

    /// The timestamp field is not an integer number of seconds.
    #[error("Malformed timestamp on line {line}: '{value}' is not a valid unix timestamp")]
    MalformedTimestamp {
        /// 1-based line number in the transcript
        line: usize,
        /// The field that failed to parse
        value: String,
    },

    /// The transcript has no conversation name line.
    #[error("Transcript is empty: expected a conversation name on the first line")]
    EmptyTranscript,

    /// The export configuration is inconsistent.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong
        message: String,
    },

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExportError {
    /// Creates a malformed line error.
    pub fn malformed_line(line: usize, content: impl Into<String>) -> Self {
        ExportError::MalformedLine {
            line,
            content: content.into(),
        }
    }

    /// Creates a malformed timestamp error.
    pub fn malformed_timestamp(line: usize, value: impl Into<String>) -> Self {
        ExportError::MalformedTimestamp {
            line,
            value: value.into(),
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        ExportError::InvalidConfig {
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ExportError::Io(_))
    }

    /// Returns `true` if the transcript itself was rejected.
    ///
    /// Covers malformed lines, malformed timestamps and empty transcripts.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            ExportError::MalformedLine { .. }
                | ExportError::MalformedTimestamp { .. }
                | ExportError::EmptyTranscript
        )
    }

    /// Returns `true` if this is a configuration error.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, ExportError::InvalidConfig { .. })
    }

    /// Returns the transcript line number the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            ExportError::MalformedLine { line, .. }
            | ExportError::MalformedTimestamp { line, .. } => Some(*line),
            _ => None,
        }
    }
}
