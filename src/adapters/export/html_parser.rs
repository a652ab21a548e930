//! Regex-based parsing of Telegram Desktop HTML exports.
//!
//! No DOM: the export markup is regular enough that three patterns cover
//! message counting, sender names and sender/text pairs.

use crate::domain::MessageRecord;
use crate::ports::MessageBlockParser;
use regex::Regex;
use std::sync::LazyLock;

/// Opening of a regular message block. Service messages (date separators,
/// joins) use `class="message service"` and are not counted.
pub const MESSAGE_MARKER: &str = r#"class="message default"#;

/// Line-break markup inside a text container.
const LINE_BREAK: &str = "<br>";

static RE_SENDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"from_name">([^"<]+)"#).unwrap());

/// Block opening, then (lazily, across lines) the sender, then the first text container.
static RE_MESSAGE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)<div class="message[^"]*"[^>]*>.*?from_name">([^<]+)</div>.*?<div class="text">(.*?)</div>"#,
    )
    .unwrap()
});

/// Parser for Telegram Desktop `messages*.html` exports.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegexHtmlParser;

impl RegexHtmlParser {
    pub fn new() -> Self {
        Self
    }
}

impl MessageBlockParser for RegexHtmlParser {
    fn count_messages(&self, content: &str) -> usize {
        content.matches(MESSAGE_MARKER).count()
    }

    fn sender_names<'a>(&self, content: &'a str) -> Vec<&'a str> {
        RE_SENDER
            .captures_iter(content)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str())
            .collect()
    }

    fn message_blocks(&self, content: &str) -> Vec<MessageRecord> {
        RE_MESSAGE_BLOCK
            .captures_iter(content)
            .map(|c| {
                let sender = c.get(1).map_or("", |m| m.as_str()).trim();
                let body = c
                    .get(2)
                    .map_or("", |m| m.as_str())
                    .trim()
                    .replace(LINE_BREAK, "\n");
                MessageRecord::new(sender, body)
            })
            .collect()
    }
}
