//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Report error: {0}")]
    Report(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Input error: {0}")]
    Input(String),
}
