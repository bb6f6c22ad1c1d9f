//! Transcript parser.
//!
//! A transcript is plain text, one record per line:
//!
//! ```text
//! My Conversation
//! 1448470901 bob Hello there!
//! 1448470905 mike how are you?
//! ```
//!
//! The first line is the conversation name, taken verbatim. Every following
//! line is `<unix-timestamp> <author> <message text>`. Only the first two
//! single spaces are delimiters; the message text is the untouched remainder
//! of the line, so its internal spacing survives byte-for-byte.
//!
//! Parsing is all-or-nothing: the first malformed line aborts with an error
//! carrying its 1-based line number.
//!
//! # Example
//!
//! ```rust
//! use chatexport::parser::TranscriptParser;
//!
//! let parser = TranscriptParser::new();
//! let conversation = parser.parse_str("My Conversation\n1448470901 bob Hello there!")?;
//!
//! assert_eq!(conversation.name(), "My Conversation");
//! assert_eq!(conversation.messages()[0].username(), "bob");
//! # Ok::<(), chatexport::ExportError>(())
//! ```

use std::fs;
use std::path::Path;

use chrono::DateTime;

use crate::config::TranscriptConfig;
use crate::error::{ExportError, Result};
use crate::{Conversation, Message};

/// Parser for line-oriented chat transcripts.
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: TranscriptConfig,
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: TranscriptConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &TranscriptConfig {
        &self.config
    }

    /// Reads and parses a transcript file.
    ///
    /// The whole file is loaded before parsing starts.
    pub fn parse(&self, path: &Path) -> Result<Conversation> {
        let content = fs::read_to_string(path)?;
        self.parse_str(&content)
    }

    /// Parses a transcript held in memory.
    ///
    /// # Errors
    ///
    /// - [`ExportError::EmptyTranscript`] if there is no name line
    /// - [`ExportError::MalformedLine`] / [`ExportError::MalformedTimestamp`]
    ///   for the first message line that fails [`parse_line`]
    pub fn parse_str(&self, content: &str) -> Result<Conversation> {
        let mut lines = content.lines().enumerate();

        let (_, name) = lines.next().ok_or(ExportError::EmptyTranscript)?;
        let name = name.strip_prefix('\u{feff}').unwrap_or(name);

        let messages = lines
            .filter(|(_, line)| !(self.config.skip_blank_lines && line.trim().is_empty()))
            .map(|(idx, line)| parse_line(line, idx + 1))
            .collect::<Result<Vec<Message>>>()?;

        Ok(Conversation::new(name).with_messages(messages))
    }
}

/// Parses one message line.
///
/// `line_number` is only used for error reporting.
///
/// # Errors
///
/// - [`ExportError::MalformedLine`] if the line lacks a timestamp, an author
///   or non-empty message text
/// - [`ExportError::MalformedTimestamp`] if the first field is not an integer
///   number of seconds in chrono's representable range
///
/// # Example
///
/// ```rust
/// use chatexport::parser::parse_line;
///
/// let msg = parse_line("1448470906 bob I'm good thanks, do you like pie?", 4)?;
/// assert_eq!(msg.unix_timestamp(), 1448470906);
/// assert_eq!(msg.content(), "I'm good thanks, do you like pie?");
///
/// assert!(parse_line("1448470906 bob", 5).is_err());
/// # Ok::<(), chatexport::ExportError>(())
/// ```
pub fn parse_line(line: &str, line_number: usize) -> Result<Message> {
    let mut fields = line.splitn(3, ' ');
    let (Some(timestamp), Some(author), Some(text)) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(ExportError::malformed_line(line_number, line));
    };

    if timestamp.is_empty() || author.is_empty() || text.is_empty() {
        return Err(ExportError::malformed_line(line_number, line));
    }

    let secs: i64 = timestamp
        .parse()
        .map_err(|_| ExportError::malformed_timestamp(line_number, timestamp))?;
    let timestamp = DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| ExportError::malformed_timestamp(line_number, timestamp))?;

    Ok(Message::new(timestamp, author, text))
}
