//! Inbound port. UI (adapter) supplies input to the application.

use crate::domain::{DomainError, TopicSpec};

/// Source of topic definitions when none are configured.
pub trait TopicInputPort: Send + Sync {
    /// Ask for topics. An empty list means the user declined to define any.
    fn request_topics(&self) -> Result<Vec<TopicSpec>, DomainError>;
}
