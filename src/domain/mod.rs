//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod standards;

pub use entities::{
    BatchOutcome, CorpusStats, Digest, MessageRecord, SkippedFile, TopicDigest, TopicSection,
    TopicSpec, split_line,
};
pub use errors::DomainError;
pub use standards::{
    MIN_CHAT_RECORDS_PER_TOPIC, MIN_DESC_LENGTH, REQUIRED_SECTIONS, ReportStandards,
    StandardViolation,
};
