//! Report validation against the fixed report standards.
//!
//! Threshold misses are reported, never raised: every call returns a verdict.

use crate::domain::{ReportStandards, StandardViolation, TopicSection};
use std::io::Write;
use tracing::info;

const RULE_WIDTH: usize = 50;

/// Checks topic sections and finished reports against [`ReportStandards`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportValidator {
    standards: ReportStandards,
}

impl ReportValidator {
    pub fn new(standards: ReportStandards) -> Self {
        Self { standards }
    }

    pub fn standards(&self) -> &ReportStandards {
        &self.standards
    }

    /// Print the validation summary to stdout and return whether every topic
    /// quotes at least the minimum number of chat records.
    pub fn validate(&self, messages_count: usize, users_count: usize, topics: &[TopicSection]) -> bool {
        let mut out = std::io::stdout().lock();
        self.validate_to(&mut out, messages_count, users_count, topics)
    }

    /// Same as [`validate`](Self::validate) but writes the summary to `out`.
    /// Write errors are ignored; the verdict does not depend on them.
    pub fn validate_to<W: Write>(
        &self,
        out: &mut W,
        messages_count: usize,
        users_count: usize,
        topics: &[TopicSection],
    ) -> bool {
        let rule = "=".repeat(RULE_WIDTH);
        let _ = writeln!(out, "\n{}", rule);
        let _ = writeln!(out, "📊 Report Validation");
        let _ = writeln!(out, "{}", rule);
        let _ = writeln!(out, "Total messages: {}", messages_count);
        let _ = writeln!(out, "Active users: {}", users_count);
        let _ = writeln!(out, "Hot topics: {}", topics.len());

        let min = self.standards.min_chat_records_per_topic;
        let mut all_valid = true;
        for topic in topics {
            let count = topic.messages.len();
            let passed = count >= min;
            let status = if passed { "✅" } else { "❌" };
            let _ = writeln!(out, "{} {}: {} messages", status, topic.name, count);
            all_valid &= passed;
        }

        let _ = writeln!(out, "{}", rule);
        if all_valid {
            let _ = writeln!(out, "✅ Report meets all standards!");
        } else {
            let _ = writeln!(out, "⚠️ Report does not meet standards, more content needed");
        }
        let _ = writeln!(out);
        let _ = out.flush();

        info!(topics = topics.len(), passed = all_valid, "report validated");
        all_valid
    }

    /// Check a rendered Markdown report: each required section must appear as
    /// a heading, and each topic description must reach the minimum length
    /// (counted in characters, not bytes).
    pub fn check_document<S: AsRef<str>>(
        &self,
        markdown: &str,
        descriptions: &[(S, S)],
    ) -> Vec<StandardViolation> {
        let headings: Vec<&str> = markdown
            .lines()
            .map(str::trim)
            .filter(|l| l.starts_with('#'))
            .map(|l| l.trim_start_matches('#').trim())
            .collect();

        let mut violations: Vec<StandardViolation> = self
            .standards
            .required_sections
            .iter()
            .filter(|title| !headings.iter().any(|h| h.contains(**title)))
            .map(|title| StandardViolation::MissingSection(title.to_string()))
            .collect();

        for (topic, description) in descriptions {
            let length = description.as_ref().trim().chars().count();
            if length < self.standards.min_desc_length {
                violations.push(StandardViolation::ShortDescription {
                    topic: topic.as_ref().to_string(),
                    length,
                });
            }
        }
        violations
    }
}
