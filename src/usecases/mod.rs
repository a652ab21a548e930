//! Application use cases. Orchestrate domain logic via ports.

mod batch;
pub mod digest_service;
pub mod extract_service;
pub mod scan_service;
pub mod validation_service;

pub use digest_service::{DigestOutcome, DigestService};
pub use extract_service::TopicExtractor;
pub use scan_service::CorpusScanner;
pub use validation_service::ReportValidator;
