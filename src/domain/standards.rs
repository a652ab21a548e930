//! Report standards. Fixed thresholds a digest must satisfy.

use serde::Serialize;

/// Minimum number of chat records a topic section must quote.
pub const MIN_CHAT_RECORDS_PER_TOPIC: usize = 10;

/// Minimum topic description length, in characters.
pub const MIN_DESC_LENGTH: usize = 80;

/// Section titles every report must contain, in report order.
pub const REQUIRED_SECTIONS: [&str; 4] = [
    "Activity Overview",
    "Hot Topics",
    "Deep Insights",
    "Resources & Tools",
];

/// Thresholds for one run. Constant for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportStandards {
    pub min_chat_records_per_topic: usize,
    pub min_desc_length: usize,
    pub required_sections: &'static [&'static str],
}

impl ReportStandards {
    pub const DEFAULT: Self = Self {
        min_chat_records_per_topic: MIN_CHAT_RECORDS_PER_TOPIC,
        min_desc_length: MIN_DESC_LENGTH,
        required_sections: &REQUIRED_SECTIONS,
    };
}

impl Default for ReportStandards {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A way a finished report falls short of the standards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StandardViolation {
    MissingSection(String),
    ShortDescription { topic: String, length: usize },
}

impl std::fmt::Display for StandardViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSection(title) => write!(f, "missing section \"{}\"", title),
            Self::ShortDescription { topic, length } => write!(
                f,
                "description of \"{}\" is {} characters (minimum {})",
                topic, length, MIN_DESC_LENGTH
            ),
        }
    }
}
