//! Output writers.
//!
//! The export document is a single JSON object:
//!
//! ```json
//! {
//!   "conversation_name": "My Conversation",
//!   "messages": [
//!     { "unix_timestamp": 1448470901, "username": "bob", "message": "Hello there!" }
//!   ]
//! }
//! ```
//!
//! - [`write_json`] / [`to_json`] - requires the `json-output` feature
//!
//! Writers are called only after parsing and the pipeline have succeeded,
//! so a failed export never leaves a partial file behind.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(feature = "json-output")]
//! # fn main() -> chatexport::Result<()> {
//! use chatexport::core::output::{OutputConfig, write_json};
//! use chatexport::parser::TranscriptParser;
//!
//! let conversation = TranscriptParser::new().parse("chat.txt".as_ref())?;
//! write_json(&conversation, "chat.json", &OutputConfig::new())?;
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "json-output"))]
//! # fn main() {}
//! ```

#[cfg(feature = "json-output")]
mod json_writer;

#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};

/// Controls how the document is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Indent the JSON (default: true)
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl OutputConfig {
    /// Creates the default (pretty) configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-line JSON output.
    #[must_use]
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }
}
