//! Integration tests for chatexport.
//!
//! Every scenario runs against the same nine-message transcript in
//! `tests/fixtures/chat.txt`.

use std::fs;
use std::path::Path;

use chatexport::config::ExportConfig;
use chatexport::core::identity::obfuscate_username;
use chatexport::core::output::{OutputConfig, to_json};
use chatexport::parser::TranscriptParser;
use chatexport::{Conversation, ExportStats, Message, export_conversation, export_str};
use tempfile::tempdir;

const SAMPLE: &str = include_str!("fixtures/chat.txt");

fn fixture_path() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/chat.txt"))
}

fn export(config: &ExportConfig) -> (Conversation, ExportStats) {
    export_str(SAMPLE, config).unwrap()
}

fn timestamps(conversation: &Conversation) -> Vec<i64> {
    conversation
        .messages()
        .iter()
        .map(Message::unix_timestamp)
        .collect()
}

fn assert_message(msg: &Message, secs: i64, username: &str, content: &str) {
    assert_eq!(msg.unix_timestamp(), secs);
    assert_eq!(msg.username(), username);
    assert_eq!(msg.content(), content);
}

// =========================================================================
// Parsing
// =========================================================================

#[test]
fn test_parse_sample_transcript() {
    let conversation = TranscriptParser::new().parse(fixture_path()).unwrap();

    assert_eq!(conversation.name(), "My Conversation");
    assert_eq!(conversation.len(), 9);

    let messages = conversation.messages();
    assert_message(&messages[0], 1448470901, "bob", "Hello there!");
    assert_message(&messages[1], 1448470905, "mike", "how are you?");
    assert_message(
        &messages[2],
        1448470906,
        "bob",
        "I'm good thanks, do you like pie?",
    );
    assert_message(&messages[3], 1448470910, "mike", "no, let me ask Angus...");
    assert_message(
        &messages[8],
        1448470919,
        "bob",
        "it's 07804377261. Thanks, looking forward to the pie!",
    );
}

#[test]
fn test_file_and_string_parsing_agree() {
    let from_file = TranscriptParser::new().parse(fixture_path()).unwrap();
    let from_str = TranscriptParser::new().parse_str(SAMPLE).unwrap();
    assert_eq!(from_file, from_str);
}

// =========================================================================
// Filtering
// =========================================================================

#[test]
fn test_no_filter_keeps_everything() {
    let (conversation, stats) = export(&ExportConfig::new());

    assert_eq!(stats, ExportStats::new(9, 9));
    assert_eq!(
        conversation,
        TranscriptParser::new().parse_str(SAMPLE).unwrap()
    );
}

#[test]
fn test_filter_by_username() {
    let (conversation, stats) = export(&ExportConfig::new().with_username_filter("bob"));

    assert_eq!(conversation.name(), "My Conversation");
    assert_eq!(stats.original_count, 9);
    assert_eq!(stats.retained_count, 4);
    assert_eq!(stats.dropped_count(), 5);
    assert_eq!(
        timestamps(&conversation),
        vec![1448470901, 1448470906, 1448470914, 1448470919]
    );
    assert!(conversation.messages().iter().all(|m| m.username() == "bob"));

    assert_message(&conversation.messages()[0], 1448470901, "bob", "Hello there!");
    assert_message(
        &conversation.messages()[2],
        1448470914,
        "bob",
        "No, just want to know if there's anybody else in the pie society...",
    );
}

#[test]
fn test_filter_by_username_is_case_sensitive() {
    let (conversation, stats) = export(&ExportConfig::new().with_username_filter("Bob"));
    assert!(conversation.is_empty());
    assert_eq!(stats.retained_count, 0);
}

#[test]
fn test_filter_by_unknown_username_exports_empty_list() {
    let (conversation, _) = export(&ExportConfig::new().with_username_filter("shirley"));
    assert_eq!(conversation.name(), "My Conversation");
    assert!(conversation.is_empty());
}

#[test]
fn test_filter_by_keyword() {
    let (conversation, stats) = export(&ExportConfig::new().with_keyword_filter("pie"));

    assert_eq!(stats.retained_count, 6);
    assert_eq!(
        timestamps(&conversation),
        vec![1448470906, 1448470912, 1448470914, 1448470915, 1448470919, 1448470919]
    );

    let messages = conversation.messages();
    assert_message(
        &messages[0],
        1448470906,
        "bob",
        "I'm good thanks, do you like pie?",
    );
    assert_message(
        &messages[1],
        1448470912,
        "angus",
        "Hell yes! Are we buying some pie?",
    );
    assert_message(
        &messages[3],
        1448470915,
        "angus",
        "YES! I'm the head pie eater there...",
    );
    assert_eq!(messages[4].username(), "dave");
    assert_eq!(messages[5].username(), "bob");
}

#[test]
fn test_filter_by_keyword_matches_inside_words() {
    // "Hell" is a substring of "Hello" and of angus' reply.
    let (conversation, _) = export(&ExportConfig::new().with_keyword_filter("Hell"));
    assert_eq!(timestamps(&conversation), vec![1448470901, 1448470912]);
}

// =========================================================================
// Redaction
// =========================================================================

#[test]
fn test_hide_words() {
    let (conversation, stats) = export(&ExportConfig::new().with_hide_word_list("pie"));

    assert_eq!(stats.retained_count, 9);
    let messages = conversation.messages();
    assert_message(
        &messages[2],
        1448470906,
        "bob",
        "I'm good thanks, do you like *redacted*?",
    );
    assert_message(
        &messages[4],
        1448470912,
        "angus",
        "Hell yes! Are we buying some *redacted*?",
    );
    assert_message(
        &messages[5],
        1448470914,
        "bob",
        "No, just want to know if there's anybody else in the *redacted* society...",
    );
    assert_message(
        &messages[6],
        1448470915,
        "angus",
        "YES! I'm the head *redacted* eater there...",
    );
    assert_message(&messages[0], 1448470901, "bob", "Hello there!");
}

#[test]
fn test_hide_multiple_words() {
    let (conversation, _) = export(&ExportConfig::new().with_hide_word_list("pie,shop"));
    assert_eq!(
        conversation.messages()[7].content(),
        "Ok, here's my card number: 4321567890121234. What's your phone number bob? \
         I'll send you the adress of the *redacted* *redacted*..."
    );
}

#[test]
fn test_keyword_filter_then_hide_same_word() {
    let config = ExportConfig::new()
        .with_keyword_filter("pie")
        .with_hide_word_list("pie");
    let (conversation, _) = export(&config);

    assert_eq!(conversation.len(), 6);
    for msg in conversation.messages() {
        assert!(!msg.content().contains("pie"));
        assert!(msg.content().contains("*redacted*"));
    }
}

#[test]
fn test_scrub_credentials() {
    let (conversation, _) = export(&ExportConfig::new().with_credential_scrub(true));
    let messages = conversation.messages();

    assert_message(
        &messages[7],
        1448470919,
        "dave",
        "Ok, here's my card number: *redacted*. What's your phone number bob? \
         I'll send you the adress of the pie shop...",
    );
    assert_message(
        &messages[8],
        1448470919,
        "bob",
        "it's *redacted*. Thanks, looking forward to the pie!",
    );
    assert_message(&messages[0], 1448470901, "bob", "Hello there!");
}

#[test]
fn test_obfuscate_identities() {
    let (conversation, _) = export(&ExportConfig::new().with_identity_obfuscation(true));
    let bob = obfuscate_username("bob");
    let messages = conversation.messages();

    assert_eq!(messages[0].username(), bob);
    assert_eq!(messages[2].username(), bob);
    assert_eq!(messages[5].username(), bob);
    assert_eq!(messages[8].username(), bob);
    assert_eq!(messages[1].username(), obfuscate_username("mike"));
    assert_eq!(messages[4].username(), obfuscate_username("angus"));
    assert_eq!(messages[7].username(), obfuscate_username("dave"));

    // Only authors change; "bob" mentioned in text stays.
    assert!(messages[7].content().contains("phone number bob?"));
}

#[test]
fn test_obfuscation_is_stable_across_exports() {
    let config = ExportConfig::new().with_identity_obfuscation(true);
    let (first, _) = export(&config);
    let (second, _) = export(&config);
    assert_eq!(first, second);
    assert_eq!(
        first.messages()[0].username(),
        "9f9d51bc-70ef-31ca-9c14-f307980a29d8"
    );
}

#[test]
fn test_obfuscated_ids_match_name_based_uuids() {
    let config = ExportConfig::new()
        .with_hide_word_list("pie,shop")
        .with_identity_obfuscation(true);
    let (conversation, _) = export(&config);
    let ids: Vec<&str> = conversation.messages().iter().map(Message::username).collect();

    let bob = "9f9d51bc-70ef-31ca-9c14-f307980a29d8";
    let mike = "18126e7b-d3f8-3b3f-be4d-f094def5b7de";
    let angus = "e7a70020-ac0d-33a2-9b88-0f2003bb4e46";
    let dave = "16108387-43cc-30e3-a4fd-da748282d9b8";
    assert_eq!(ids, vec![bob, mike, bob, mike, angus, bob, angus, dave, bob]);
    assert_eq!(obfuscate_username("shirley"), "57811779-7814-39c4-81d6-2cf39f5d80ca");
}

#[test]
fn test_filter_runs_before_obfuscation() {
    let config = ExportConfig::new()
        .with_username_filter("bob")
        .with_identity_obfuscation(true);
    let (conversation, _) = export(&config);

    assert_eq!(conversation.len(), 4);
    assert!(
        conversation
            .messages()
            .iter()
            .all(|m| m.username() == obfuscate_username("bob"))
    );
}

#[test]
fn test_everything_enabled() {
    let config = ExportConfig::new()
        .with_keyword_filter("pie")
        .with_hide_word_list("pie,shop")
        .with_credential_scrub(true)
        .with_identity_obfuscation(true);
    let (conversation, stats) = export(&config);

    assert_eq!(stats, ExportStats::new(9, 6));
    let messages = conversation.messages();
    assert_message(
        &messages[4],
        1448470919,
        &obfuscate_username("dave"),
        "Ok, here's my card number: *redacted*. What's your phone number bob? \
         I'll send you the adress of the *redacted* *redacted*...",
    );
    assert_message(
        &messages[5],
        1448470919,
        &obfuscate_username("bob"),
        "it's *redacted*. Thanks, looking forward to the *redacted*!",
    );
}

// =========================================================================
// JSON output
// =========================================================================

#[test]
fn test_json_document_shape() {
    let (conversation, _) = export(&ExportConfig::new().with_username_filter("mike"));
    let json = to_json(&conversation, &OutputConfig::new().compact()).unwrap();

    assert_eq!(
        json,
        r#"{"conversation_name":"My Conversation","messages":[{"unix_timestamp":1448470905,"username":"mike","message":"how are you?"},{"unix_timestamp":1448470910,"username":"mike","message":"no, let me ask Angus..."}]}"#
    );
}

#[test]
fn test_prelude_exposes_output_api() {
    use chatexport::prelude::{OutputConfig as PreludeOutput, to_json as prelude_to_json};

    let (conversation, _) = export(&ExportConfig::new());
    let json = prelude_to_json(&conversation, &PreludeOutput::new().compact()).unwrap();
    assert!(json.starts_with(r#"{"conversation_name":"My Conversation","messages":["#));
}

#[test]
fn test_export_conversation_writes_file() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("chat.json");

    let config = ExportConfig::new()
        .with_username_filter("bob")
        .with_credential_scrub(true);
    let stats = export_conversation(fixture_path(), &output, &config).unwrap();
    assert_eq!(stats.retained_count, 4);

    let content = fs::read_to_string(&output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();

    assert_eq!(value["conversation_name"], "My Conversation");
    let messages = value["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[0]["unix_timestamp"], 1448470901);
    assert_eq!(messages[0]["username"], "bob");
    assert_eq!(messages[0]["message"], "Hello there!");
    assert_eq!(
        messages[3]["message"],
        "it's *redacted*. Thanks, looking forward to the pie!"
    );
}

#[test]
fn test_export_round_trips_through_json() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("chat.json");

    export_conversation(fixture_path(), &output, &ExportConfig::new()).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    let parsed: Conversation = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed, TranscriptParser::new().parse_str(SAMPLE).unwrap());
}

#[test]
fn test_malformed_input_writes_nothing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("bad.txt");
    let output = dir.path().join("chat.json");
    fs::write(&input, "My Conversation\n1448470901 bob Hello\nnot a timestamp line\n").unwrap();

    let err = export_conversation(&input, &output, &ExportConfig::new()).unwrap_err();

    assert!(err.is_malformed());
    assert_eq!(err.line(), Some(3));
    assert!(!output.exists());
}

#[test]
fn test_missing_input_is_io_error() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("chat.json");

    let err = export_conversation(dir.path().join("nope.txt"), &output, &ExportConfig::new())
        .unwrap_err();

    assert!(err.is_io());
    assert!(!output.exists());
}
