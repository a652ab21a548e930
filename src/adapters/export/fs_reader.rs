//! Implements ExportReader on the local filesystem.

use crate::domain::DomainError;
use crate::ports::ExportReader;
use std::path::Path;
use tracing::debug;

/// Reads exports straight from disk. Blocking, one file at a time.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsExportReader;

impl FsExportReader {
    pub fn new() -> Self {
        Self
    }
}

impl ExportReader for FsExportReader {
    /// `read_to_string` rejects invalid UTF-8 with `InvalidData`, so decode
    /// failures surface as the same `FileRead` error as missing files.
    fn read_export(&self, path: &Path) -> Result<String, DomainError> {
        let content = std::fs::read_to_string(path).map_err(|source| DomainError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = content.len(), "read export");
        Ok(content)
    }
}
