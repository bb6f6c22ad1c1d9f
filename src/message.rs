//! A single transcript entry.
//!
//! [`Message`] is what the line parser produces for every line after the
//! conversation name, and what every pipeline stage consumes. The serialized
//! field names match the exported document:
//!
//! ```json
//! { "unix_timestamp": 1448470901, "username": "bob", "message": "Hello there!" }
//! ```
//!
//! # Examples
//!
//! ```
//! use chatexport::Message;
//! use chrono::DateTime;
//!
//! let ts = DateTime::from_timestamp(1448470901, 0).unwrap();
//! let msg = Message::new(ts, "bob", "Hello there!");
//!
//! assert_eq!(msg.unix_timestamp(), 1448470901);
//! assert_eq!(msg.username(), "bob");
//! assert_eq!(msg.content(), "Hello there!");
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One timestamped chat message.
///
/// `timestamp` and `username` are set once by the parser. Redaction stages
/// rewrite `content`, and identity obfuscation rewrites `username`; nothing
/// ever re-derives the timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// When the message was sent, serialized as integer seconds since epoch.
    #[serde(rename = "unix_timestamp", with = "chrono::serde::ts_seconds")]
    pub timestamp: DateTime<Utc>,

    /// Author of the message (or its pseudonym after obfuscation).
    pub username: String,

    /// Message text, the untouched remainder of the transcript line.
    #[serde(rename = "message")]
    pub content: String,
}

impl Message {
    /// Creates a new message.
    pub fn new(
        timestamp: DateTime<Utc>,
        username: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            username: username.into(),
            content: content.into(),
        }
    }

    /// Returns the timestamp.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the timestamp as seconds since the unix epoch.
    pub fn unix_timestamp(&self) -> i64 {
        self.timestamp.timestamp()
    }

    /// Returns the author name.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the message text.
    pub fn content(&self) -> &str {
        &self.content
    }
}
