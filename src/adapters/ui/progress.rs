//! Progress bar for topic extraction.

use indicatif::{ProgressBar, ProgressStyle};

/// Bar over topics. Hidden when `enabled` is false so logs stay clean.
pub fn topic_progress(enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(0);
    if let Ok(style) =
        ProgressStyle::with_template("{spinner:.magenta} [{bar:30.cyan/magenta}] {pos}/{len} {msg}")
    {
        bar.set_style(style.progress_chars("=>-"));
    }
    bar
}
