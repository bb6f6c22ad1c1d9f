//! The ordered export pipeline.
//!
//! An [`ExportConfig`] turns into a [`Pipeline`]: a list of [`Stage`]s that
//! always runs in this order, skipping disabled stages:
//!
//! 1. author or keyword filter ([`Stage::Filter`])
//! 2. keyword redaction ([`Stage::HideWords`])
//! 3. credential scrub ([`Stage::ScrubCredentials`])
//! 4. identity obfuscation ([`Stage::ObfuscateIdentities`])
//!
//! Stages never fail and never reorder messages.
//!
//! # Example
//!
//! ```
//! use chatexport::config::{ExportConfig, FilterMode};
//! use chatexport::core::pipeline::{Pipeline, Stage};
//!
//! let config = ExportConfig::new()
//!     .with_identity_obfuscation(true)
//!     .with_username_filter("bob")
//!     .with_credential_scrub(true);
//!
//! let pipeline = Pipeline::from_config(&config);
//! assert_eq!(
//!     pipeline.stages(),
//!     &[
//!         Stage::Filter(FilterMode::Username("bob".into())),
//!         Stage::ScrubCredentials,
//!         Stage::ObfuscateIdentities,
//!     ]
//! );
//! ```

use std::fmt;

use crate::config::{ExportConfig, FilterMode};
use crate::{Conversation, Message};

use super::credentials::CredentialDetector;
use super::filter::apply_filter;
use super::identity::obfuscate_username;
use super::redact::redact_words;

/// One step of the export pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    /// Keep messages from one author or containing a keyword.
    Filter(FilterMode),
    /// Replace these words with the redaction marker, in order.
    HideWords(Vec<String>),
    /// Replace phone and card numbers with the redaction marker.
    ScrubCredentials,
    /// Replace authors with their pseudonyms.
    ObfuscateIdentities,
}

impl Stage {
    /// Short human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Filter(FilterMode::NoFilter) => "no filter",
            Stage::Filter(FilterMode::Username(_)) => "username filter",
            Stage::Filter(FilterMode::SpecificWord(_)) => "keyword filter",
            Stage::HideWords(_) => "keyword redaction",
            Stage::ScrubCredentials => "credential scrub",
            Stage::ObfuscateIdentities => "identity obfuscation",
        }
    }

    /// Returns `true` if the stage can drop messages.
    pub fn is_filter(&self) -> bool {
        matches!(self, Stage::Filter(_))
    }

    fn apply(&self, messages: Vec<Message>, detector: &CredentialDetector) -> Vec<Message> {
        match self {
            Stage::Filter(filter) => apply_filter(messages, filter),
            Stage::HideWords(words) => rewrite(messages, |msg| {
                msg.content = redact_words(&msg.content, words);
            }),
            Stage::ScrubCredentials => rewrite(messages, |msg| {
                msg.content = detector.scrub_text(&msg.content);
            }),
            Stage::ObfuscateIdentities => rewrite(messages, |msg| {
                msg.username = obfuscate_username(&msg.username);
            }),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Filter(filter) => match filter.value() {
                Some(value) => write!(f, "{} ({})", self.name(), value),
                None => f.write_str(self.name()),
            },
            Stage::HideWords(words) => write!(f, "{} ({})", self.name(), words.join(", ")),
            Stage::ScrubCredentials | Stage::ObfuscateIdentities => f.write_str(self.name()),
        }
    }
}

fn rewrite(mut messages: Vec<Message>, f: impl Fn(&mut Message)) -> Vec<Message> {
    messages.iter_mut().for_each(f);
    messages
}

/// Message counts before and after an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportStats {
    /// Messages parsed from the transcript
    pub original_count: usize,
    /// Messages left after filtering
    pub retained_count: usize,
}

impl ExportStats {
    /// Creates new stats.
    pub fn new(original_count: usize, retained_count: usize) -> Self {
        Self {
            original_count,
            retained_count,
        }
    }

    /// Number of messages removed by the filter stage.
    pub fn dropped_count(&self) -> usize {
        self.original_count.saturating_sub(self.retained_count)
    }

    /// Percentage of messages kept (100.0 for an empty transcript).
    pub fn retention_ratio(&self) -> f64 {
        if self.original_count == 0 {
            return 100.0;
        }
        (self.retained_count as f64 / self.original_count as f64) * 100.0
    }
}

/// Ordered list of stages built from an [`ExportConfig`].
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    stages: Vec<Stage>,
    detector: CredentialDetector,
}

impl Pipeline {
    /// Builds the pipeline for `config`.
    pub fn from_config(config: &ExportConfig) -> Self {
        let mut stages = Vec::with_capacity(4);

        if config.filter.is_active() {
            stages.push(Stage::Filter(config.filter.clone()));
        }
        if config.has_hide_words() {
            stages.push(Stage::HideWords(config.hide_words.clone()));
        }
        if config.scrub_credentials {
            stages.push(Stage::ScrubCredentials);
        }
        if config.obfuscate_identities {
            stages.push(Stage::ObfuscateIdentities);
        }

        Self {
            stages,
            detector: CredentialDetector::new(),
        }
    }

    /// Returns the stages in execution order.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Returns `true` if the pipeline passes conversations through untouched.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Runs every stage over the conversation's messages.
    pub fn run(&self, conversation: Conversation) -> Conversation {
        self.run_with_stats(conversation).0
    }

    /// Runs every stage and reports how many messages survived.
    pub fn run_with_stats(&self, conversation: Conversation) -> (Conversation, ExportStats) {
        let Conversation { name, messages } = conversation;
        let original_count = messages.len();

        let messages = self
            .stages
            .iter()
            .fold(messages, |messages, stage| stage.apply(messages, &self.detector));

        let stats = ExportStats::new(original_count, messages.len());
        (Conversation { name, messages }, stats)
    }
}
