//! Retention filters: keep messages by author or by keyword.
//!
//! # Filter Types
//!
//! | Filter | Function | Keeps |
//! |--------|----------|-------|
//! | Username | [`filter_by_username`] | messages whose author equals the name |
//! | Keyword | [`filter_by_keyword`] | messages whose text contains the word |
//!
//! Both comparisons are case-sensitive, and the keyword is a plain
//! substring with no word-boundary requirement. Surviving messages keep
//! their relative order.
//!
//! # Example
//!
//! ```
//! use chatexport::config::FilterMode;
//! use chatexport::core::filter::apply_filter;
//! use chatexport::Message;
//! use chrono::DateTime;
//!
//! let ts = DateTime::from_timestamp(1448470901, 0).unwrap();
//! let messages = vec![
//!     Message::new(ts, "bob", "do you like pie?"),
//!     Message::new(ts, "mike", "how are you?"),
//!     Message::new(ts, "angus", "buying some pie?"),
//! ];
//!
//! let filtered = apply_filter(messages, &FilterMode::SpecificWord("pie".into()));
//! assert_eq!(filtered.len(), 2);
//! assert_eq!(filtered[1].username(), "angus");
//! ```

use crate::Message;
use crate::config::FilterMode;

/// Applies the configured retention filter.
///
/// [`FilterMode::NoFilter`] returns the input untouched.
pub fn apply_filter(messages: Vec<Message>, filter: &FilterMode) -> Vec<Message> {
    match filter {
        FilterMode::NoFilter => messages,
        FilterMode::Username(username) => filter_by_username(messages, username),
        FilterMode::SpecificWord(word) => filter_by_keyword(messages, word),
    }
}

/// Keeps messages whose author is exactly `username`.
pub fn filter_by_username(messages: Vec<Message>, username: &str) -> Vec<Message> {
    messages
        .into_iter()
        .filter(|msg| msg.username == username)
        .collect()
}

/// Keeps messages whose text contains `word`.
pub fn filter_by_keyword(messages: Vec<Message>, word: &str) -> Vec<Message> {
    messages
        .into_iter()
        .filter(|msg| msg.content.contains(word))
        .collect()
}
