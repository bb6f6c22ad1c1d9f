//! Keyword redaction.
//!
//! Every case-sensitive occurrence of a hidden word is replaced by
//! [`REDACTION_MARKER`]. Matching is plain substring matching, so hiding
//! `pie` also rewrites `piece` to `*redacted*ce`.
//!
//! Text that is already a marker is never matched again: redaction only
//! looks at the text between existing markers. Hiding `red` after `pie`
//! therefore leaves `*redacted*` intact.
//!
//! # Example
//!
//! ```
//! use chatexport::core::redact::{redact_words, parse_word_list};
//!
//! let words = parse_word_list("pie, shop");
//! let text = redact_words("the adress of the pie shop...", &words);
//! assert_eq!(text, "the adress of the *redacted* *redacted*...");
//! ```

/// Replacement text for hidden words and scrubbed credentials.
pub const REDACTION_MARKER: &str = "*redacted*";

/// Splits a comma-separated word list.
///
/// Items are trimmed; empty items are dropped. Order is preserved.
///
/// ```
/// use chatexport::core::redact::parse_word_list;
///
/// assert_eq!(parse_word_list("pie,shop"), vec!["pie", "shop"]);
/// assert_eq!(parse_word_list(" pie , ,shop,"), vec!["pie", "shop"]);
/// assert!(parse_word_list("").is_empty());
/// ```
pub fn parse_word_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Replaces every occurrence of `word` in `text` with the marker.
///
/// Occurrences are non-overlapping and found left to right. An empty word
/// leaves the text unchanged.
pub fn redact_word(text: &str, word: &str) -> String {
    if word.is_empty() || !text.contains(word) {
        return text.to_string();
    }

    text.split(REDACTION_MARKER)
        .map(|segment| segment.replace(word, REDACTION_MARKER))
        .collect::<Vec<_>>()
        .join(REDACTION_MARKER)
}

/// Applies [`redact_word`] once per word, in list order.
pub fn redact_words<S: AsRef<str>>(text: &str, words: &[S]) -> String {
    words
        .iter()
        .fold(text.to_string(), |acc, word| redact_word(&acc, word.as_ref()))
}
