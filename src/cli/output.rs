//! Output formatting and progress indicators
//!
//! Utilities for displaying the cleaning spinner, status glyphs, and the
//! end-of-run summary.

use indicatif::{ProgressBar, ProgressStyle};

use crate::core::clean::CleanSummary;

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";

    /// Info prefix (blue circle)
    pub const INFO: &str = "ℹ";
}

/// Create a spinner for operations with unknown duration
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.blue} {msg}")
            .expect("Invalid spinner template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

/// Print a fatal error to stderr
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} {error:#}", status::ERROR);
}

/// Print the end-of-run summary
pub fn display_summary(summary: &CleanSummary, dry_run: bool) {
    for path in &summary.skipped_mounts {
        println!(
            "{} Skipped mounted cache dir: {}",
            status::WARNING,
            path.display()
        );
    }

    if dry_run {
        println!(
            "{} {} path(s) would have been cleaned",
            status::INFO,
            summary.reported.len()
        );
    } else if summary.cleaned.is_empty() {
        println!("{} Nothing to clean", status::SUCCESS);
    } else {
        println!("{} Cleaned {} path(s)", status::SUCCESS, summary.cleaned.len());
    }
}
