//! Infrastructure adapters. Implement ports.
//!
//! Filesystem exports, regex parsing, reports, terminal UI. Map errors to DomainError.

pub mod export;
pub mod report;
pub mod ui;
