//! Core transformation logic for chatexport.
//!
//! This module contains:
//! - [`filter`] - Retention by author or keyword
//! - [`redact`] - Keyword redaction and the redaction marker
//! - [`credentials`] - Phone and card number detection
//! - [`identity`] - Stable author pseudonyms
//! - [`pipeline`] - The ordered stage list and export statistics
//! - [`output`] - JSON writer
//!
//! # Quick Start
//!
//! ```rust
//! use chatexport::core::{ExportStats, Pipeline, REDACTION_MARKER, obfuscate_username};
//! ```

pub mod credentials;
pub mod filter;
pub mod identity;
pub mod output;
pub mod pipeline;
pub mod redact;

// Re-export main types for convenience
pub use credentials::{CredentialDetector, CredentialKind};
pub use filter::{apply_filter, filter_by_keyword, filter_by_username};
pub use identity::{obfuscate_username, pseudonym};
pub use output::OutputConfig;
pub use pipeline::{ExportStats, Pipeline, Stage};
pub use redact::{REDACTION_MARKER, parse_word_list, redact_word, redact_words};

#[cfg(feature = "json-output")]
pub use output::{to_json, write_json};
