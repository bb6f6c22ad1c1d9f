//! Command-line interface definition using clap.
//!
//! [`Args`] maps one-to-one onto [`ExportConfig`]: `--from` and `--keyword`
//! select the (mutually exclusive) filter mode, the remaining flags toggle
//! the redaction stages.
//!
//! ```rust
//! use chatexport::cli::Args;
//! use chatexport::config::FilterMode;
//! use clap::Parser;
//!
//! let args = Args::parse_from([
//!     "chatexport",
//!     "chat.txt",
//!     "--keyword",
//!     "pie",
//!     "--hide-words",
//!     "pie,shop",
//! ]);
//! let config = args.export_config()?;
//!
//! assert_eq!(config.filter, FilterMode::SpecificWord("pie".into()));
//! assert_eq!(config.hide_words, vec!["pie", "shop"]);
//! # Ok::<(), chatexport::ExportError>(())
//! ```

use clap::Parser;

use crate::config::{ExportConfig, FilterKind, FilterMode};
use crate::core::output::OutputConfig;
use crate::core::redact::parse_word_list;
use crate::error::Result;

/// Export a chat transcript to JSON, optionally filtering messages and
/// redacting words, phone/card numbers and usernames.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatexport")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatexport chat.txt
    chatexport chat.txt -o bob.json --from bob
    chatexport chat.txt --keyword pie
    chatexport chat.txt --hide-words pie,shop --scrub-credentials --obfuscate-ids")]
pub struct Args {
    /// Path to the transcript file
    pub input: String,

    /// Path to the output JSON file
    #[arg(short, long, default_value = "chat.json")]
    pub output: String,

    /// Keep only messages from this user
    #[arg(long, value_name = "USER", conflicts_with = "keyword")]
    pub from: Option<String>,

    /// Keep only messages containing this word
    #[arg(short, long, value_name = "WORD")]
    pub keyword: Option<String>,

    /// Comma-separated words to replace with *redacted*
    #[arg(long, value_name = "WORDS")]
    pub hide_words: Option<String>,

    /// Redact phone and payment-card numbers
    #[arg(short = 's', long)]
    pub scrub_credentials: bool,

    /// Replace usernames with stable pseudonymous identifiers
    #[arg(short = 'i', long)]
    pub obfuscate_ids: bool,

    /// Write single-line JSON instead of indented output
    #[arg(long)]
    pub compact: bool,
}

impl Args {
    /// Returns the retention filter selected by `--from` / `--keyword`.
    ///
    /// # Errors
    ///
    /// Rejects an empty username or keyword.
    pub fn filter(&self) -> Result<FilterMode> {
        match (self.from.as_deref(), self.keyword.as_deref()) {
            (Some(user), _) => FilterMode::from_parts(FilterKind::Username, Some(user)),
            (None, Some(word)) => FilterMode::from_parts(FilterKind::SpecificWord, Some(word)),
            (None, None) => Ok(FilterMode::NoFilter),
        }
    }

    /// Builds the pipeline configuration.
    pub fn export_config(&self) -> Result<ExportConfig> {
        Ok(ExportConfig::new()
            .with_filter(self.filter()?)
            .with_hide_words(
                self.hide_words
                    .as_deref()
                    .map(parse_word_list)
                    .unwrap_or_default(),
            )
            .with_credential_scrub(self.scrub_credentials)
            .with_identity_obfuscation(self.obfuscate_ids))
    }

    /// Builds the output configuration.
    pub fn output_config(&self) -> OutputConfig {
        if self.compact {
            OutputConfig::new().compact()
        } else {
            OutputConfig::new()
        }
    }
}
