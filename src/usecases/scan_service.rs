//! Corpus scan: message and distinct sender counts over a set of exports.

use crate::domain::{BatchOutcome, CorpusStats};
use crate::ports::{ExportReader, MessageBlockParser};
use crate::usecases::batch::read_or_skip;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Counts messages and unique senders. Unreadable files are skipped, never fatal.
pub struct CorpusScanner {
    reader: Arc<dyn ExportReader>,
    parser: Arc<dyn MessageBlockParser>,
}

impl CorpusScanner {
    pub fn new(reader: Arc<dyn ExportReader>, parser: Arc<dyn MessageBlockParser>) -> Self {
        Self { reader, parser }
    }

    /// Scan all exports in order. Senders are deduplicated across files
    /// after trimming; blank names are ignored.
    pub fn scan<P: AsRef<Path>>(&self, paths: &[P]) -> BatchOutcome<CorpusStats> {
        let mut total_messages = 0usize;
        let mut senders: HashSet<String> = HashSet::new();
        let mut skipped = Vec::new();

        for path in paths {
            let path = path.as_ref();
            let Some(content) = read_or_skip(self.reader.as_ref(), path, &mut skipped) else {
                continue;
            };

            let count = self.parser.count_messages(&content);
            total_messages += count;
            for name in self.parser.sender_names(&content) {
                let name = name.trim();
                if !name.is_empty() {
                    senders.insert(name.to_string());
                }
            }
            debug!(path = %path.display(), messages = count, "scanned export");
        }

        let stats = CorpusStats {
            total_messages,
            unique_senders: senders.len(),
        };
        info!(
            files = paths.len(),
            skipped = skipped.len(),
            messages = stats.total_messages,
            senders = stats.unique_senders,
            "corpus scan complete"
        );
        BatchOutcome::new(stats, skipped)
    }
}
