//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{Digest, DomainError, MessageRecord};
use std::path::{Path, PathBuf};

/// Export reader port. Loads the full text of one chat export.
pub trait ExportReader: Send + Sync {
    /// Read the whole export as UTF-8 text.
    ///
    /// # Errors
    /// `DomainError::FileRead` if the file is missing, unreadable or not valid UTF-8.
    fn read_export(&self, path: &Path) -> Result<String, DomainError>;
}

/// Message block parser port. Turns raw export text into messages.
///
/// Keeps the matching strategy (regex, structural scanner) out of the use cases.
pub trait MessageBlockParser: Send + Sync {
    /// Number of regular (non-service) message blocks in the text.
    fn count_messages(&self, content: &str) -> usize;

    /// Every sender name found in the text, untrimmed, in document order.
    fn sender_names<'a>(&self, content: &'a str) -> Vec<&'a str>;

    /// Sender/body pairs in document order. Sender is trimmed; body is trimmed
    /// with line-break markup turned into `\n`. Blocks without a text container yield nothing.
    fn message_blocks(&self, content: &str) -> Vec<MessageRecord>;
}

/// Report port. Persist a finished digest.
pub trait ReportPort: Send + Sync {
    /// Write the digest. Returns the paths of every file written.
    fn write_digest(&self, digest: &Digest) -> Result<Vec<PathBuf>, DomainError>;
}
