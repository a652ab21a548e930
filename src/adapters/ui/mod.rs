pub mod banner;
pub mod progress;
pub mod tui;

use crate::domain::ReportStandards;

/// Prints the welcome banner and active standards, and applies the neon theme
/// for all subsequent inquire prompts. Call once at startup.
pub fn init_ui(standards: &ReportStandards) {
    banner::print_welcome();
    banner::print_standards(standards);
    tui::apply_theme();
}
