//! Phone and payment-card number detection.
//!
//! Classification is a length heuristic over bare digit runs:
//!
//! | Kind | Shape | Digits |
//! |------|-------|--------|
//! | Card | digits only | 13-16 |
//! | Phone | digits, optional leading `+` | 10-15 |
//!
//! There is no checksum or country-code validation. Short numbers (ages,
//! scores) and numbers written with separators or currency marks
//! (`£9,000,000`) are left alone.
//!
//! # Example
//!
//! ```
//! use chatexport::core::credentials::CredentialDetector;
//!
//! let detector = CredentialDetector::new();
//! assert_eq!(detector.scrub_text("it's 07804377261. Thanks"), "it's *redacted*. Thanks");
//! assert_eq!(detector.scrub_text("I am 25 years old"), "I am 25 years old");
//! ```

use std::borrow::Cow;
use std::ops::RangeInclusive;

use regex::Regex;

use super::redact::REDACTION_MARKER;

/// Digit counts treated as phone numbers.
pub const PHONE_DIGITS: RangeInclusive<usize> = 10..=15;

/// Digit counts treated as payment-card numbers.
pub const CARD_DIGITS: RangeInclusive<usize> = 13..=16;

/// Kind of sensitive number found in a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialKind {
    /// 10-15 digits, optionally `+`-prefixed
    PhoneNumber,
    /// 13-16 digits, no prefix
    CardNumber,
}

/// Detects and redacts credential-shaped tokens.
#[derive(Debug, Clone)]
pub struct CredentialDetector {
    number: Regex,
}

impl CredentialDetector {
    /// Creates a detector.
    pub fn new() -> Self {
        Self {
            number: Regex::new(r"^(\+)?([0-9]+)$").expect("credential pattern is valid"),
        }
    }

    /// Classifies a bare token.
    ///
    /// The whole token must be a digit run (with an optional leading `+`);
    /// attached punctuation makes it non-sensitive here. An unsigned run in
    /// the card range is reported as a card even when it also fits the
    /// phone range.
    ///
    /// ```
    /// use chatexport::core::credentials::{CredentialDetector, CredentialKind};
    ///
    /// let detector = CredentialDetector::new();
    /// assert_eq!(detector.classify("07804377261"), Some(CredentialKind::PhoneNumber));
    /// assert_eq!(detector.classify("4321567890121234"), Some(CredentialKind::CardNumber));
    /// assert_eq!(detector.classify("80"), None);
    /// ```
    pub fn classify(&self, token: &str) -> Option<CredentialKind> {
        let caps = self.number.captures(token)?;
        let signed = caps.get(1).is_some();
        let digits = caps.get(2).map_or(0, |m| m.as_str().len());

        if !signed && CARD_DIGITS.contains(&digits) {
            Some(CredentialKind::CardNumber)
        } else if PHONE_DIGITS.contains(&digits) {
            Some(CredentialKind::PhoneNumber)
        } else {
            None
        }
    }

    /// Returns `true` if the token would be redacted.
    pub fn is_sensitive(&self, token: &str) -> bool {
        let (_, core, _) = split_punctuation(token);
        self.classify(core).is_some()
    }

    /// Redacts one whitespace-free token.
    ///
    /// ASCII punctuation wrapped around the digits stays in place and only
    /// the digit run is replaced, so `07804377261.` becomes `*redacted*.`.
    /// Anything else is returned unchanged.
    pub fn redact_token<'a>(&self, token: &'a str) -> Cow<'a, str> {
        let (prefix, core, suffix) = split_punctuation(token);
        if self.classify(core).is_some() {
            Cow::Owned(format!("{prefix}{REDACTION_MARKER}{suffix}"))
        } else {
            Cow::Borrowed(token)
        }
    }

    /// Redacts every credential-shaped token in a message.
    ///
    /// Tokens are split on ASCII whitespace and rejoined with single
    /// spaces, so runs of whitespace collapse.
    pub fn scrub_text(&self, text: &str) -> String {
        text.split_ascii_whitespace()
            .map(|token| self.redact_token(token))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for CredentialDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits a token into leading punctuation, core and trailing punctuation.
///
/// A leading sign (`+` or `-`) belongs to the core, so a negative number
/// never classifies.
fn split_punctuation(token: &str) -> (&str, &str, &str) {
    let without_suffix = token.trim_end_matches(|c: char| c.is_ascii_punctuation());
    let core = without_suffix
        .trim_start_matches(|c: char| c.is_ascii_punctuation() && !matches!(c, '+' | '-'));

    let prefix = &without_suffix[..without_suffix.len() - core.len()];
    let suffix = &token[without_suffix.len()..];
    (prefix, core, suffix)
}
