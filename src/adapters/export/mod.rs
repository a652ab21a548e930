//! Chat export adapters. Implement ExportReader and MessageBlockParser.

pub mod fs_reader;
pub mod html_parser;

pub use fs_reader::FsExportReader;
pub use html_parser::{MESSAGE_MARKER, RegexHtmlParser};
