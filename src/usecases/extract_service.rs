//! Topic extraction: messages whose text mentions any of a topic's keywords.

use crate::domain::BatchOutcome;
use crate::ports::{ExportReader, MessageBlockParser};
use crate::usecases::batch::read_or_skip;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Pulls keyword-matching messages out of exports as `[sender]: body` lines.
pub struct TopicExtractor {
    reader: Arc<dyn ExportReader>,
    parser: Arc<dyn MessageBlockParser>,
}

impl TopicExtractor {
    pub fn new(reader: Arc<dyn ExportReader>, parser: Arc<dyn MessageBlockParser>) -> Self {
        Self { reader, parser }
    }

    /// Extract matching messages from all exports, in file then document order.
    ///
    /// Matching is a case-insensitive substring test against each keyword.
    /// A body is emitted at most once per call: later messages with the exact
    /// same body text are dropped whoever sent them.
    pub fn extract<P, K>(&self, paths: &[P], keywords: &[K]) -> BatchOutcome<Vec<String>>
    where
        P: AsRef<Path>,
        K: AsRef<str>,
    {
        let keywords: Vec<String> = keywords.iter().map(|k| k.as_ref().to_lowercase()).collect();
        let mut seen: HashSet<String> = HashSet::new();
        let mut lines = Vec::new();
        let mut skipped = Vec::new();

        for path in paths {
            let path = path.as_ref();
            let Some(content) = read_or_skip(self.reader.as_ref(), path, &mut skipped) else {
                continue;
            };

            let mut matched = 0usize;
            for record in self.parser.message_blocks(&content) {
                let lower = record.body.to_lowercase();
                if !keywords.iter().any(|kw| lower.contains(kw.as_str())) {
                    continue;
                }
                if seen.contains(&record.body) {
                    continue;
                }
                lines.push(record.line());
                seen.insert(record.body);
                matched += 1;
            }
            debug!(path = %path.display(), matched, "extracted topic messages");
        }

        info!(
            keywords = keywords.len(),
            messages = lines.len(),
            skipped = skipped.len(),
            "topic extraction complete"
        );
        BatchOutcome::new(lines, skipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::export::RegexHtmlParser;
    use crate::domain::split_line;
    use crate::usecases::batch::fakes::{MemoryReader, block};

    fn extractor(reader: MemoryReader) -> TopicExtractor {
        TopicExtractor::new(Arc::new(reader), Arc::new(RegexHtmlParser::new()))
    }

    #[test]
    fn test_extract_keeps_bodies_differing_by_case() {
        let html = format!(
            "{}{}",
            block("Alice", "I love pickles"),
            block("Bob", "I love PICKLES")
        );
        let out = extractor(MemoryReader::default().with("a.html", &html))
            .extract(&["a.html"], &["pickles"]);
        assert_eq!(
            out.value,
            vec!["[Alice]: I love pickles", "[Bob]: I love PICKLES"]
        );
    }

    #[test]
    fn test_extract_dedups_identical_bodies_across_senders_and_files() {
        let reader = MemoryReader::default()
            .with("a.html", &block("Alice", "I love pickles"))
            .with(
                "b.html",
                &format!("{}{}", block("Bob", "I love pickles"), block("Bob", "pickle jar")),
            );
        let out = extractor(reader).extract(&["a.html", "b.html"], &["PICKLE"]);
        assert_eq!(out.value, vec!["[Alice]: I love pickles", "[Bob]: pickle jar"]);
    }

    #[test]
    fn test_extract_no_keyword_match() {
        let reader = MemoryReader::default().with("a.html", &block("Alice", "nothing here"));
        let out = extractor(reader).extract(&["a.html"], &["rust"]);
        assert!(out.value.is_empty());
    }

    #[test]
    fn test_extract_any_keyword_qualifies() {
        let html = format!(
            "{}{}{}",
            block("Alice", "Rust is fast"),
            block("Bob", "Go is simple"),
            block("Carol", "Python")
        );
        let out = extractor(MemoryReader::default().with("a.html", &html))
            .extract(&["a.html"], &["go", "rust"]);
        assert_eq!(out.value, vec!["[Alice]: Rust is fast", "[Bob]: Go is simple"]);
    }

    #[test]
    fn test_extract_line_breaks_in_body() {
        let reader = MemoryReader::default().with("a.html", &block("Alice", "line one<br>rust two"));
        let out = extractor(reader).extract(&["a.html"], &["rust"]);
        assert_eq!(out.value, vec!["[Alice]: line one\nrust two"]);
    }

    #[test]
    fn test_extract_skips_unreadable() {
        let reader = MemoryReader::default().with("a.html", &block("Alice", "rust"));
        let out = extractor(reader).extract(&["nope.html", "a.html"], &["rust"]);
        assert_eq!(out.value.len(), 1);
        assert_eq!(out.skipped.len(), 1);
    }

    #[test]
    fn test_extract_bodies_unique_and_first_seen_order() {
        let html: String = ["b", "a", "b", "c", "a"]
            .iter()
            .enumerate()
            .map(|(i, t)| block(&format!("user{i}"), &format!("topic {t}")))
            .collect();
        let out = extractor(MemoryReader::default().with("a.html", &html))
            .extract(&["a.html"], &["topic"]);

        let bodies: Vec<&str> = out
            .value
            .iter()
            .filter_map(|l| split_line(l).map(|(_, body)| body))
            .collect();
        assert_eq!(bodies, vec!["topic b", "topic a", "topic c"]);
        assert!(out.value[0].starts_with("[user0]"));
    }
}
