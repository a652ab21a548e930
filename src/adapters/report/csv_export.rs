//! CSV export of topic messages. Uses the `csv` crate for safe serialization.

use crate::domain::{TopicDigest, split_line};

/// Convert topic messages to a CSV string.
///
/// Format: `Topic;Sender;Message` (semicolon-delimited). Newlines inside
/// messages are flattened to spaces so each message stays on one row.
pub fn topics_to_csv(topics: &[TopicDigest]) -> Result<String, csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .from_writer(Vec::new());

    wtr.write_record(["Topic", "Sender", "Message"])?;

    for topic in topics {
        for msg in &topic.messages {
            let (sender, body) = split_line(msg).unwrap_or(("unknown", msg.as_str()));
            let clean_text = body.replace('\n', " ").replace('\r', "");
            wtr.write_record([topic.name.as_str(), sender, clean_text.as_str()])?;
        }
    }

    wtr.flush()?;
    let bytes = wtr.into_inner().map_err(|e| {
        csv::Error::from(std::io::Error::new(
            std::io::ErrorKind::Other,
            e.to_string(),
        ))
    })?;

    String::from_utf8(bytes).map_err(|e| {
        csv::Error::from(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            e.to_string(),
        ))
    })
}
