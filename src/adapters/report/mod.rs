//! Report adapters. Render digests and persist them (implements ReportPort).

pub mod csv_export;
pub mod fs_report;
pub mod markdown;

pub use csv_export::topics_to_csv;
pub use fs_report::FsReportWriter;
pub use markdown::render_markdown;
