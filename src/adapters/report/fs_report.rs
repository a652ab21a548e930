//! Implements ReportPort. Writes the digest as Markdown, CSV and a JSON summary.
//! One set of files per day: {reports_dir}/digest_{date}.md, topics_{date}.csv, digest_{date}.json.

use crate::adapters::report::{render_markdown, topics_to_csv};
use crate::domain::{Digest, DomainError};
use crate::ports::ReportPort;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// JSON summary written next to the Markdown report.
#[derive(Debug, Serialize)]
struct DigestSummary<'a> {
    title: &'a str,
    generated_at: i64,
    total_messages: usize,
    unique_senders: usize,
    passed: bool,
    topics: Vec<TopicSummary<'a>>,
}

#[derive(Debug, Serialize)]
struct TopicSummary<'a> {
    name: &'a str,
    messages: usize,
}

/// File-system report writer. Overwrites files of the same date.
pub struct FsReportWriter {
    reports_dir: PathBuf,
}

impl FsReportWriter {
    pub fn new(reports_dir: impl AsRef<Path>) -> Self {
        Self {
            reports_dir: reports_dir.as_ref().to_path_buf(),
        }
    }

    fn write(&self, filename: &str, content: &str) -> Result<PathBuf, DomainError> {
        let path = self.reports_dir.join(filename);
        std::fs::write(&path, content)
            .map_err(|e| DomainError::Report(format!("Failed to write {}: {}", path.display(), e)))?;
        info!(path = %path.display(), bytes = content.len(), "report file written");
        Ok(path)
    }
}

impl ReportPort for FsReportWriter {
    fn write_digest(&self, digest: &Digest) -> Result<Vec<PathBuf>, DomainError> {
        std::fs::create_dir_all(&self.reports_dir)
            .map_err(|e| DomainError::Report(format!("Failed to create reports dir: {}", e)))?;

        let date = DateTime::<Utc>::from_timestamp(digest.generated_at, 0)
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| digest.generated_at.to_string());

        let markdown = render_markdown(digest);
        let csv = topics_to_csv(&digest.topics)
            .map_err(|e| DomainError::Export(format!("Failed to generate CSV: {}", e)))?;
        let summary = DigestSummary {
            title: &digest.title,
            generated_at: digest.generated_at,
            total_messages: digest.stats.total_messages,
            unique_senders: digest.stats.unique_senders,
            passed: digest.passed,
            topics: digest
                .topics
                .iter()
                .map(|t| TopicSummary {
                    name: &t.name,
                    messages: t.messages.len(),
                })
                .collect(),
        };
        let json = serde_json::to_string_pretty(&summary)
            .map_err(|e| DomainError::Export(e.to_string()))?;

        Ok(vec![
            self.write(&format!("digest_{}.md", date), &markdown)?,
            self.write(&format!("topics_{}.csv", date), &csv)?,
            self.write(&format!("digest_{}.json", date), &json)?,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CorpusStats, TopicDigest};

    #[test]
    fn test_write_digest_creates_files() {
        let dir = tempfile::tempdir().unwrap();
        let reports = dir.path().join("reports");
        let digest = Digest {
            title: "Daily".to_string(),
            generated_at: 1_704_067_200,
            stats: CorpusStats {
                total_messages: 3,
                unique_senders: 2,
            },
            topics: vec![TopicDigest {
                name: "Rust".to_string(),
                description: None,
                messages: vec!["[Alice]: rust".to_string()],
            }],
            passed: false,
        };

        let paths = FsReportWriter::new(&reports).write_digest(&digest).unwrap();
        assert_eq!(
            paths,
            vec![
                reports.join("digest_2024-01-01.md"),
                reports.join("topics_2024-01-01.csv"),
                reports.join("digest_2024-01-01.json"),
            ]
        );

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&paths[2]).unwrap()).unwrap();
        assert_eq!(json["total_messages"], 3);
        assert_eq!(json["passed"], false);
        assert_eq!(json["topics"][0]["name"], "Rust");
        assert!(std::fs::read_to_string(&paths[1]).unwrap().contains("Rust;Alice;rust"));
    }
}
