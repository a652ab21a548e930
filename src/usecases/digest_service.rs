//! Digest pipeline: scan -> extract per topic -> validate -> (optionally) write report.
//!
//! Scanner and extractor run independently over the same file list; the
//! validator only sees their outputs.

use crate::adapters::report::render_markdown;
use crate::domain::{
    Digest, DomainError, SkippedFile, StandardViolation, TopicDigest, TopicSection, TopicSpec,
};
use crate::ports::ReportPort;
use crate::usecases::{CorpusScanner, ReportValidator, TopicExtractor};
use chrono::Utc;
use indicatif::ProgressBar;
use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// Default digest title when none is configured.
pub const DEFAULT_TITLE: &str = "Chat Daily Digest";

/// Result of one pipeline run.
#[derive(Debug)]
pub struct DigestOutcome {
    pub digest: Digest,
    /// Shortfalls of the rendered report (sections, description lengths).
    pub violations: Vec<StandardViolation>,
    /// Unreadable files, once each, in first-seen order.
    pub skipped: Vec<SkippedFile>,
    /// Report files written; empty when no report writer is configured.
    pub written: Vec<PathBuf>,
}

/// Runs the whole digest pipeline for one set of exports.
pub struct DigestService {
    scanner: CorpusScanner,
    extractor: TopicExtractor,
    validator: ReportValidator,
    report: Option<Arc<dyn ReportPort>>,
    title: String,
    progress: ProgressBar,
}

impl DigestService {
    pub fn new(
        scanner: CorpusScanner,
        extractor: TopicExtractor,
        validator: ReportValidator,
        report: Option<Arc<dyn ReportPort>>,
    ) -> Self {
        Self {
            scanner,
            extractor,
            validator,
            report,
            title: DEFAULT_TITLE.to_string(),
            progress: ProgressBar::hidden(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Report per-topic extraction progress on `bar`. Hidden by default.
    pub fn with_progress(mut self, bar: ProgressBar) -> Self {
        self.progress = bar;
        self
    }

    /// Run the pipeline, printing the validation summary to stdout.
    pub fn run<P: AsRef<Path>>(
        &self,
        paths: &[P],
        topics: &[TopicSpec],
    ) -> Result<DigestOutcome, DomainError> {
        let mut out = std::io::stdout();
        self.run_to(&mut out, paths, topics)
    }

    /// Run the pipeline, writing the validation summary to `out`.
    ///
    /// # Errors
    /// Only report persistence can fail; unreadable exports are skipped.
    pub fn run_to<W: Write, P: AsRef<Path>>(
        &self,
        out: &mut W,
        paths: &[P],
        topics: &[TopicSpec],
    ) -> Result<DigestOutcome, DomainError> {
        let scanned = self.scanner.scan(paths);
        let mut skipped = scanned.skipped;
        let stats = scanned.value;

        self.progress.set_length(topics.len() as u64);
        let mut sections = Vec::with_capacity(topics.len());
        for topic in topics {
            self.progress.set_message(topic.name.clone());
            let extracted = self.extractor.extract(paths, topic.keywords.as_slice());
            skipped.extend(extracted.skipped);
            info!(topic = %topic.name, messages = extracted.value.len(), "topic extracted");
            sections.push(TopicSection::new(topic.name.clone(), extracted.value));
            self.progress.inc(1);
        }
        self.progress.finish_and_clear();

        let passed = self
            .validator
            .validate_to(out, stats.total_messages, stats.unique_senders, &sections);

        let digest = Digest {
            title: self.title.clone(),
            generated_at: Utc::now().timestamp(),
            stats,
            topics: topics
                .iter()
                .zip(sections)
                .map(|(spec, section)| TopicDigest {
                    name: section.name,
                    description: spec.description.clone(),
                    messages: section.messages,
                })
                .collect(),
            passed,
        };

        let descriptions: Vec<(&str, &str)> = digest
            .topics
            .iter()
            .map(|t| (t.name.as_str(), t.description.as_deref().unwrap_or("")))
            .collect();
        let violations = self
            .validator
            .check_document(&render_markdown(&digest), descriptions.as_slice());
        for v in &violations {
            warn!(violation = %v, "report falls short of standards");
        }

        let written = match &self.report {
            Some(report) => report.write_digest(&digest)?,
            None => Vec::new(),
        };

        Ok(DigestOutcome {
            digest,
            violations,
            skipped: dedup_skipped(skipped),
            written,
        })
    }
}

/// The same bad file shows up once per pass; keep the first report of each path.
fn dedup_skipped(skipped: Vec<SkippedFile>) -> Vec<SkippedFile> {
    let mut seen = HashSet::new();
    skipped
        .into_iter()
        .filter(|s| seen.insert(s.path.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::export::RegexHtmlParser;
    use crate::adapters::report::FsReportWriter;
    use crate::ports::{ExportReader, MessageBlockParser};
    use crate::usecases::batch::fakes::{MemoryReader, block};

    fn service(reader: MemoryReader, report: Option<Arc<dyn ReportPort>>) -> DigestService {
        let reader: Arc<dyn ExportReader> = Arc::new(reader);
        let parser: Arc<dyn MessageBlockParser> = Arc::new(RegexHtmlParser::new());
        DigestService::new(
            CorpusScanner::new(Arc::clone(&reader), Arc::clone(&parser)),
            TopicExtractor::new(reader, parser),
            ReportValidator::default(),
            report,
        )
    }

    fn topic(name: &str, keywords: &[&str], description: Option<String>) -> TopicSpec {
        TopicSpec {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            description,
        }
    }

    fn export() -> String {
        let mut html = String::new();
        for i in 0..12 {
            html.push_str(&block(&format!("user{}", i % 4), &format!("rust tip #{i}")));
        }
        html.push_str(&block("user1", "go is fine"));
        html
    }

    #[test]
    fn test_run_reports_failing_topic() {
        let svc = service(MemoryReader::default().with("a.html", &export()), None);
        let topics = [topic("Rust", &["RUST"], None), topic("Go", &["go "], None)];

        let mut buf = Vec::new();
        let outcome = svc.run_to(&mut buf, &["a.html", "gone.html"], &topics).unwrap();
        let printed = String::from_utf8(buf).unwrap();

        assert_eq!(outcome.digest.stats.as_tuple(), (13, 4));
        assert_eq!(outcome.digest.topics[0].messages.len(), 12);
        assert_eq!(outcome.digest.topics[1].messages, vec!["[user1]: go is fine"]);
        assert!(!outcome.digest.passed);
        assert!(printed.contains("❌ Go: 1 messages"));
        assert_eq!(outcome.skipped.len(), 1);
        assert!(outcome.written.is_empty());
        // no descriptions given
        assert_eq!(outcome.violations.len(), 2);
    }

    #[test]
    fn test_run_passes_and_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let writer: Arc<dyn ReportPort> = Arc::new(FsReportWriter::new(dir.path()));
        let svc = service(MemoryReader::default().with("a.html", &export()), Some(writer))
            .with_title("Rustaceans");
        let topics = [topic("Rust", &["rust"], Some("r".repeat(80)))];

        let mut buf = Vec::new();
        let outcome = svc.run_to(&mut buf, &["a.html"], &topics).unwrap();

        assert!(outcome.digest.passed);
        assert!(outcome.violations.is_empty(), "{:?}", outcome.violations);
        assert_eq!(outcome.written.len(), 3);
        let md = std::fs::read_to_string(&outcome.written[0]).unwrap();
        assert!(md.starts_with("# Rustaceans"));
    }

    #[test]
    fn test_dedup_skipped_keeps_first() {
        let s = |p: &str, r: &str| SkippedFile {
            path: PathBuf::from(p),
            reason: r.to_string(),
        };
        let out = dedup_skipped(vec![s("a", "first"), s("b", "x"), s("a", "second")]);
        assert_eq!(out, vec![s("a", "first"), s("b", "x")]);
    }
}
