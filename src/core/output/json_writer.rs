//! JSON output writer.

use std::fs;
use std::path::Path;

use crate::Conversation;
use crate::error::Result;

use super::OutputConfig;

/// Writes the conversation to a JSON file.
///
/// The document is fully rendered before the file is created.
pub fn write_json(
    conversation: &Conversation,
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let json = to_json(conversation, config)?;
    fs::write(output_path, json)?;
    Ok(())
}

/// Converts the conversation to a JSON string.
///
/// Same format as [`write_json`], but returns a String instead of writing to file.
pub fn to_json(conversation: &Conversation, config: &OutputConfig) -> Result<String> {
    let json = if config.pretty {
        serde_json::to_string_pretty(conversation)?
    } else {
        serde_json::to_string(conversation)?
    };
    Ok(json)
}
