//! # chatexport
//!
//! A Rust library for exporting line-oriented chat transcripts to a JSON
//! document, with optional filtering and privacy redaction.
//!
//! ## Overview
//!
//! A transcript is plain text: the conversation name on the first line, then
//! one `<unix-timestamp> <author> <message>` record per line. chatexport
//! parses it into a [`Conversation`] and runs an ordered [`Pipeline`] of
//! optional stages over the messages:
//!
//! 1. keep only one author's messages, **or** only messages containing a keyword
//! 2. replace hidden words with `*redacted*`
//! 3. replace phone and payment-card numbers with `*redacted*`
//! 4. replace author names with stable pseudonymous UUIDs
//!
//! Parsing is all-or-nothing: a single malformed line aborts the export and
//! nothing is written.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatexport::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let transcript = "My Conversation\n\
//!                       1448470901 bob Hello there!\n\
//!                       1448470919 bob it's 07804377261. Thanks";
//!
//!     let config = ExportConfig::new()
//!         .with_username_filter("bob")
//!         .with_credential_scrub(true);
//!
//!     let (conversation, stats) = chatexport::export_str(transcript, &config)?;
//!
//!     assert_eq!(stats.retained_count, 2);
//!     assert_eq!(conversation.messages()[1].content(), "it's *redacted*. Thanks");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`TranscriptParser`](parser::TranscriptParser), [`parse_line`](parser::parse_line)
//! - [`config`] - [`ExportConfig`](config::ExportConfig), [`FilterMode`](config::FilterMode)
//! - [`core`] - pipeline stages, credential detector, pseudonyms, JSON output
//! - [`cli`] - clap argument definitions (feature `cli`)
//! - [`error`] - [`ExportError`], [`Result`]
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod conversation;
pub mod core;
pub mod error;
pub mod message;
pub mod parser;

// Re-export the main types at the crate root for convenience
pub use conversation::Conversation;
pub use crate::core::pipeline::{ExportStats, Pipeline};
pub use error::{ExportError, Result};
pub use message::Message;

use crate::config::ExportConfig;
use crate::parser::TranscriptParser;

/// Parses an in-memory transcript and runs the export pipeline over it.
pub fn export_str(transcript: &str, config: &ExportConfig) -> Result<(Conversation, ExportStats)> {
    let conversation = TranscriptParser::new().parse_str(transcript)?;
    Ok(Pipeline::from_config(config).run_with_stats(conversation))
}

/// Reads a transcript file, runs the pipeline and writes the JSON document.
///
/// The output file is only created once parsing and every stage have
/// succeeded.
///
/// ```rust,no_run
/// use chatexport::config::ExportConfig;
///
/// let config = ExportConfig::new().with_hide_word_list("pie,shop");
/// let stats = chatexport::export_conversation("chat.txt", "chat.json", &config)?;
/// println!("{} messages exported", stats.retained_count);
/// # Ok::<(), chatexport::ExportError>(())
/// ```
#[cfg(feature = "json-output")]
pub fn export_conversation(
    input: impl AsRef<std::path::Path>,
    output: impl AsRef<std::path::Path>,
    config: &ExportConfig,
) -> Result<ExportStats> {
    use crate::core::output::{OutputConfig, write_json};

    let conversation = TranscriptParser::new().parse(input.as_ref())?;
    let (conversation, stats) = Pipeline::from_config(config).run_with_stats(conversation);
    write_json(&conversation, output, &OutputConfig::new())?;
    Ok(stats)
}

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatexport::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Conversation, Message};

    // Error types
    pub use crate::error::{ExportError, Result};

    // Parsing
    pub use crate::parser::{TranscriptParser, parse_line};

    // Configuration
    pub use crate::config::{ExportConfig, FilterKind, FilterMode, TranscriptConfig};

    // Pipeline
    pub use crate::core::pipeline::{ExportStats, Pipeline, Stage};
    pub use crate::core::{CredentialDetector, REDACTION_MARKER, obfuscate_username};

    // Output
    pub use crate::core::output::OutputConfig;
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, write_json};
}
