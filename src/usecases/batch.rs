//! Shared read-or-skip step for batch use cases.

use crate::domain::SkippedFile;
use crate::ports::ExportReader;
use std::path::Path;
use tracing::warn;

/// Read one export. On failure, warn, record the file as skipped and return `None`.
pub(crate) fn read_or_skip(
    reader: &dyn ExportReader,
    path: &Path,
    skipped: &mut Vec<SkippedFile>,
) -> Option<String> {
    match reader.read_export(path) {
        Ok(content) => Some(content),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "skipping unreadable export");
            skipped.push(SkippedFile {
                path: path.to_path_buf(),
                reason: e.to_string(),
            });
            None
        }
    }
}
