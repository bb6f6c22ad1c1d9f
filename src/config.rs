//! Configuration types for parsing and exporting.
//!
//! These are plain library structs with builder methods and no CLI framework
//! dependency:
//!
//! - [`TranscriptConfig`] - how the transcript parser treats its input
//! - [`ExportConfig`] - which pipeline stages run during an export
//! - [`FilterMode`] - the single retention filter, if any
//!
//! # Example
//!
//! ```rust
//! use chatexport::config::{ExportConfig, FilterMode};
//!
//! let config = ExportConfig::new()
//!     .with_keyword_filter("pie")
//!     .with_hide_word_list("pie,shop")
//!     .with_credential_scrub(true)
//!     .with_identity_obfuscation(true);
//!
//! assert_eq!(config.filter, FilterMode::SpecificWord("pie".into()));
//! assert_eq!(config.hide_words, vec!["pie", "shop"]);
//! ```
//!
//! # Serialized form
//!
//! [`ExportConfig`] (de)serializes with the option names of the export
//! document's configuration, `hide_words` being a comma-separated list:
//!
//! ```rust
//! use chatexport::config::{ExportConfig, FilterMode};
//!
//! let json = r#"{
//!     "filter_mode": "username",
//!     "filter_value": "bob",
//!     "hide_words": "pie,shop",
//!     "scrub_credentials": true
//! }"#;
//!
//! let config: ExportConfig = serde_json::from_str(json)?;
//! assert_eq!(config.filter, FilterMode::Username("bob".into()));
//! assert!(config.scrub_credentials);
//! assert!(!config.obfuscate_identities);
//! # Ok::<(), serde_json::Error>(())
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::redact::parse_word_list;
use crate::error::{ExportError, Result};

/// Configuration for transcript parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptConfig {
    /// Skip empty or whitespace-only message lines instead of rejecting them (default: true)
    pub skip_blank_lines: bool,
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            skip_blank_lines: true,
        }
    }
}

impl TranscriptConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether blank message lines are skipped.
    #[must_use]
    pub fn with_skip_blank_lines(mut self, skip: bool) -> Self {
        self.skip_blank_lines = skip;
        self
    }
}

/// The kind of retention filter, without its value.
///
/// This is the `filter_mode` option; pair it with a `filter_value` through
/// [`FilterMode::from_parts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    /// Keep every message
    #[default]
    NoFilter,
    /// Keep messages from one author
    Username,
    /// Keep messages containing a keyword
    SpecificWord,
}

impl FilterKind {
    /// Returns all accepted filter mode names.
    pub fn all_names() -> &'static [&'static str] {
        &["no_filter", "username", "specific_word"]
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterKind::NoFilter => write!(f, "no_filter"),
            FilterKind::Username => write!(f, "username"),
            FilterKind::SpecificWord => write!(f, "specific_word"),
        }
    }
}

impl FromStr for FilterKind {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "no_filter" | "none" => Ok(FilterKind::NoFilter),
            "username" | "user" => Ok(FilterKind::Username),
            "specific_word" | "word" | "keyword" => Ok(FilterKind::SpecificWord),
            _ => Err(ExportError::invalid_config(format!(
                "unknown filter mode '{}'. Expected one of: {}",
                s,
                FilterKind::all_names().join(", ")
            ))),
        }
    }
}

/// The retention filter applied before any redaction.
///
/// Author and keyword filtering are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Keep every message.
    #[default]
    NoFilter,
    /// Keep only messages whose author equals this name (case-sensitive).
    Username(String),
    /// Keep only messages whose text contains this substring (case-sensitive).
    SpecificWord(String),
}

impl FilterMode {
    /// Builds a filter from a `filter_mode` / `filter_value` pair.
    ///
    /// The value is ignored for [`FilterKind::NoFilter`].
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::InvalidConfig`] when a username or keyword
    /// filter has no value or an empty one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatexport::config::{FilterKind, FilterMode};
    ///
    /// let filter = FilterMode::from_parts(FilterKind::Username, Some("bob"))?;
    /// assert_eq!(filter, FilterMode::Username("bob".into()));
    ///
    /// assert!(FilterMode::from_parts(FilterKind::SpecificWord, None).is_err());
    /// # Ok::<(), chatexport::ExportError>(())
    /// ```
    pub fn from_parts(kind: FilterKind, value: Option<&str>) -> Result<Self> {
        let required = || match value {
            Some(v) if !v.is_empty() => Ok(v.to_string()),
            _ => Err(ExportError::invalid_config(format!(
                "filter mode '{kind}' requires a non-empty filter value"
            ))),
        };

        match kind {
            FilterKind::NoFilter => Ok(FilterMode::NoFilter),
            FilterKind::Username => required().map(FilterMode::Username),
            FilterKind::SpecificWord => required().map(FilterMode::SpecificWord),
        }
    }

    /// Returns the filter kind.
    pub fn kind(&self) -> FilterKind {
        match self {
            FilterMode::NoFilter => FilterKind::NoFilter,
            FilterMode::Username(_) => FilterKind::Username,
            FilterMode::SpecificWord(_) => FilterKind::SpecificWord,
        }
    }

    /// Returns the filter value, if any.
    pub fn value(&self) -> Option<&str> {
        match self {
            FilterMode::NoFilter => None,
            FilterMode::Username(v) | FilterMode::SpecificWord(v) => Some(v),
        }
    }

    /// Returns `true` unless this is [`FilterMode::NoFilter`].
    pub fn is_active(&self) -> bool {
        !matches!(self, FilterMode::NoFilter)
    }
}

/// Which pipeline stages run during an export.
///
/// The retention filter runs first; keyword redaction, credential scrubbing
/// and identity obfuscation are independent toggles applied afterwards in
/// that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawExportConfig", into = "RawExportConfig")]
pub struct ExportConfig {
    /// Retention filter.
    pub filter: FilterMode,

    /// Words replaced by the redaction marker, in application order.
    pub hide_words: Vec<String>,

    /// Replace phone and card numbers in message text.
    pub scrub_credentials: bool,

    /// Replace author names with stable pseudonymous identifiers.
    pub obfuscate_identities: bool,
}

impl ExportConfig {
    /// Creates a configuration with every stage disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the retention filter.
    #[must_use]
    pub fn with_filter(mut self, filter: FilterMode) -> Self {
        self.filter = filter;
        self
    }

    /// Keeps only messages from `username`.
    #[must_use]
    pub fn with_username_filter(self, username: impl Into<String>) -> Self {
        self.with_filter(FilterMode::Username(username.into()))
    }

    /// Keeps only messages containing `word`.
    #[must_use]
    pub fn with_keyword_filter(self, word: impl Into<String>) -> Self {
        self.with_filter(FilterMode::SpecificWord(word.into()))
    }

    /// Sets the words to redact.
    ///
    /// Empty words are dropped.
    #[must_use]
    pub fn with_hide_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hide_words = words
            .into_iter()
            .map(Into::into)
            .filter(|w: &String| !w.is_empty())
            .collect();
        self
    }

    /// Sets the words to redact from a comma-separated list.
    ///
    /// Items are trimmed and empty items are dropped.
    #[must_use]
    pub fn with_hide_word_list(mut self, list: &str) -> Self {
        self.hide_words = parse_word_list(list);
        self
    }

    /// Enables or disables credential scrubbing.
    #[must_use]
    pub fn with_credential_scrub(mut self, enabled: bool) -> Self {
        self.scrub_credentials = enabled;
        self
    }

    /// Enables or disables identity obfuscation.
    #[must_use]
    pub fn with_identity_obfuscation(mut self, enabled: bool) -> Self {
        self.obfuscate_identities = enabled;
        self
    }

    /// Returns `true` if keyword redaction will run.
    pub fn has_hide_words(&self) -> bool {
        !self.hide_words.is_empty()
    }

    /// Returns `true` if any stage is enabled.
    pub fn is_active(&self) -> bool {
        self.filter.is_active()
            || self.has_hide_words()
            || self.scrub_credentials
            || self.obfuscate_identities
    }
}

/// Wire form of [`ExportConfig`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct RawExportConfig {
    filter_mode: FilterKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter_value: Option<String>,
    hide_words: String,
    scrub_credentials: bool,
    obfuscate_identities: bool,
}

impl TryFrom<RawExportConfig> for ExportConfig {
    type Error = ExportError;

    fn try_from(raw: RawExportConfig) -> Result<Self> {
        let filter = FilterMode::from_parts(raw.filter_mode, raw.filter_value.as_deref())?;
        Ok(ExportConfig::new()
            .with_filter(filter)
            .with_hide_word_list(&raw.hide_words)
            .with_credential_scrub(raw.scrub_credentials)
            .with_identity_obfuscation(raw.obfuscate_identities))
    }
}

impl From<ExportConfig> for RawExportConfig {
    fn from(config: ExportConfig) -> Self {
        Self {
            filter_mode: config.filter.kind(),
            filter_value: config.filter.value().map(str::to_string),
            hide_words: config.hide_words.join(","),
            scrub_credentials: config.scrub_credentials,
            obfuscate_identities: config.obfuscate_identities,
        }
    }
}
