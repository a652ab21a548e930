//! Implements TopicInputPort. Inquire-based interactive prompts.

use crate::domain::{DomainError, TopicSpec};
use crate::ports::TopicInputPort;
use inquire::ui::{Color, RenderConfig, StyleSheet, Styled};
use inquire::{Confirm, Text};

/// Applies the neon theme to every subsequent inquire prompt.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("▸").with_fg(Color::LightMagenta))
        .with_answer(StyleSheet::new().with_fg(Color::LightCyan));
    inquire::set_global_render_config(config);
}

/// Split a comma-separated keyword answer; blanks dropped.
pub fn parse_keywords(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

/// TUI adapter. Asks for topics one at a time until the user stops.
#[derive(Debug, Default)]
pub struct TuiTopicInput;

impl TuiTopicInput {
    pub fn new() -> Self {
        Self
    }
}

impl TopicInputPort for TuiTopicInput {
    fn request_topics(&self) -> Result<Vec<TopicSpec>, DomainError> {
        let mut topics = Vec::new();
        loop {
            let prompt = if topics.is_empty() {
                "Define a topic?"
            } else {
                "Add another topic?"
            };
            let more = Confirm::new(prompt)
                .with_default(topics.is_empty())
                .prompt()
                .map_err(|e| DomainError::Input(e.to_string()))?;
            if !more {
                break;
            }

            let name = Text::new("Topic name:")
                .prompt()
                .map_err(|e| DomainError::Input(e.to_string()))?;
            let keywords = Text::new("Keywords (comma-separated):")
                .prompt()
                .map_err(|e| DomainError::Input(e.to_string()))?;
            let description = Text::new("Description (optional):")
                .prompt()
                .map_err(|e| DomainError::Input(e.to_string()))?;

            let keywords = parse_keywords(&keywords);
            if name.trim().is_empty() || keywords.is_empty() {
                continue;
            }
            let description = description.trim();
            topics.push(TopicSpec {
                name: name.trim().to_string(),
                keywords,
                description: (!description.is_empty()).then(|| description.to_string()),
            });
        }
        Ok(topics)
    }
}
