//! Application configuration. Report output, topic definitions, UI toggles.
//!
//! Report thresholds live in `domain::standards` and are not configurable.

use crate::domain::{DomainError, TopicSpec};
use crate::usecases::digest_service::DEFAULT_TITLE;
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Directory for generated reports. No report files are written when unset. Read from TG_DIGEST_REPORT_DIR.
    #[serde(default)]
    pub report_dir: Option<String>,

    /// Digest title. Read from TG_DIGEST_REPORT_TITLE.
    #[serde(default)]
    pub report_title: Option<String>,

    /// Prompt for topics when none are configured and stdin is a terminal (default true). Read from TG_DIGEST_INTERACTIVE.
    #[serde(default)]
    pub interactive: Option<bool>,

    /// Show a progress bar during extraction (default true). Read from TG_DIGEST_PROGRESS.
    #[serde(default)]
    pub progress: Option<bool>,

    // ─────────────────────────────────────────────────────────────────────────
    // Topics (config file only)
    // ─────────────────────────────────────────────────────────────────────────
    /// Topic definitions: `[[topics]] name = "...", keywords = [...], description = "..."`.
    #[serde(default)]
    pub topics: Vec<TopicSpec>,
}

impl AppConfig {
    /// Load from `TG_DIGEST_*` environment variables and, when `TG_DIGEST_CONFIG`
    /// names a file, from that file (format picked from its extension).
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("TG_DIGEST_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c = c.add_source(config::Environment::with_prefix("TG_DIGEST").try_parsing(true));
        c.build()?.try_deserialize()
    }

    /// Topics with a name and at least one non-blank keyword.
    ///
    /// # Errors
    /// `DomainError::Config` naming the first topic that has no usable keyword.
    pub fn validated_topics(&self) -> Result<Vec<TopicSpec>, DomainError> {
        self.topics
            .iter()
            .map(|t| {
                let keywords: Vec<String> = t
                    .keywords
                    .iter()
                    .map(|k| k.trim().to_string())
                    .filter(|k| !k.is_empty())
                    .collect();
                if t.name.trim().is_empty() || keywords.is_empty() {
                    return Err(DomainError::Config(format!(
                        "topic \"{}\" needs a name and at least one keyword",
                        t.name
                    )));
                }
                Ok(TopicSpec {
                    name: t.name.trim().to_string(),
                    keywords,
                    description: t.description.clone(),
                })
            })
            .collect()
    }

    /// Returns the digest title. Defaults to "Chat Daily Digest".
    pub fn report_title_or_default(&self) -> String {
        self.report_title
            .clone()
            .unwrap_or_else(|| DEFAULT_TITLE.to_string())
    }

    /// Returns true unless interactive prompting was turned off.
    pub fn interactive_or_default(&self) -> bool {
        self.interactive.unwrap_or(true)
    }

    /// Returns true unless the progress bar was turned off.
    pub fn progress_or_default(&self) -> bool {
        self.progress.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(src: &str) -> AppConfig {
        config::Config::builder()
            .add_source(config::File::from_str(src, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.report_title_or_default(), "Chat Daily Digest");
        assert!(cfg.interactive_or_default());
        assert!(cfg.progress_or_default());
        assert!(cfg.report_dir.is_none());
        assert!(cfg.validated_topics().unwrap().is_empty());
    }

    #[test]
    fn test_topics_from_toml() {
        let cfg = from_toml(
            r#"
report_dir = "./reports"
progress = false

[[topics]]
name = "Pickles"
keywords = ["pickle", " brine ", ""]
description = "Everything about fermentation"
"#,
        );
        assert_eq!(cfg.report_dir.as_deref(), Some("./reports"));
        assert!(!cfg.progress_or_default());

        let topics = cfg.validated_topics().unwrap();
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].keywords, vec!["pickle", "brine"]);
        assert_eq!(
            topics[0].description.as_deref(),
            Some("Everything about fermentation")
        );
    }

    #[test]
    fn test_topic_without_keywords_rejected() {
        let cfg = from_toml(
            r#"
[[topics]]
name = "Empty"
keywords = ["  "]
"#,
        );
        let err = cfg.validated_topics().unwrap_err();
        assert!(matches!(err, DomainError::Config(msg) if msg.contains("Empty")));
    }
}
