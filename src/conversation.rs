//! The exported document: a conversation name plus its messages.

use serde::{Deserialize, Serialize};

use crate::Message;

/// A parsed transcript.
///
/// Message order is input order. Pipeline stages may drop or rewrite
/// messages but never reorder them.
///
/// # Examples
///
/// ```
/// use chatexport::{Conversation, Message};
/// use chrono::DateTime;
///
/// let ts = DateTime::from_timestamp(1448470901, 0).unwrap();
/// let conversation = Conversation::new("My Conversation")
///     .with_messages(vec![Message::new(ts, "bob", "Hello there!")]);
///
/// assert_eq!(conversation.name(), "My Conversation");
/// assert_eq!(conversation.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    /// First line of the transcript, taken verbatim.
    #[serde(rename = "conversation_name")]
    pub name: String,

    /// Messages in transcript order.
    pub messages: Vec<Message>,
}

impl Conversation {
    /// Creates an empty conversation with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            messages: Vec::new(),
        }
    }

    /// Builder method to set the messages.
    #[must_use]
    pub fn with_messages(mut self, messages: Vec<Message>) -> Self {
        self.messages = messages;
        self
    }

    /// Returns the conversation name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the messages.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns the number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if the conversation has no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
