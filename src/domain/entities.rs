//! Domain entities. Pure data structures for the core business.
//!
//! No HTML/IO types here; adapters map raw export text into these.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single message pulled out of a chat export block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    pub sender: String,
    pub body: String,
}

impl MessageRecord {
    pub fn new(sender: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            body: body.into(),
        }
    }

    /// Rendered form used in topic sections: `[sender]: body`.
    pub fn line(&self) -> String {
        format!("[{}]: {}", self.sender, self.body)
    }
}

/// Split a rendered `[sender]: body` line back into its parts.
/// Returns `None` for lines not produced by [`MessageRecord::line`].
pub fn split_line(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix('[')?;
    let (sender, body) = rest.split_once("]: ")?;
    Some((sender, body))
}

/// A topic as defined by the user: name, keywords and an optional description
/// that ends up in the report's topic section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSpec {
    pub name: String,
    pub keywords: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Extracted messages for one topic, in extraction order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSection {
    pub name: String,
    pub messages: Vec<String>,
}

impl TopicSection {
    pub fn new(name: impl Into<String>, messages: Vec<String>) -> Self {
        Self {
            name: name.into(),
            messages,
        }
    }
}

/// Aggregate counts over a set of exports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusStats {
    pub total_messages: usize,
    pub unique_senders: usize,
}

impl CorpusStats {
    pub fn as_tuple(&self) -> (usize, usize) {
        (self.total_messages, self.unique_senders)
    }
}

/// An input file that could not be read and was left out of the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Partial result of a batch over many files plus the files that were skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome<T> {
    pub value: T,
    pub skipped: Vec<SkippedFile>,
}

impl<T> BatchOutcome<T> {
    pub fn new(value: T, skipped: Vec<SkippedFile>) -> Self {
        Self { value, skipped }
    }

    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

/// One topic as it appears in a finished digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicDigest {
    pub name: String,
    pub description: Option<String>,
    pub messages: Vec<String>,
}

/// Everything a report writer needs for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Digest {
    pub title: String,
    /// Unix timestamp (seconds) of generation.
    pub generated_at: i64,
    pub stats: CorpusStats,
    pub topics: Vec<TopicDigest>,
    /// Validation verdict for the topic sections.
    pub passed: bool,
}
