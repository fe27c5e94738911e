//! Rich terminal output formatting

use super::Reporter;
use crate::models::{BatchSummary, ExpiryStatus, ExpiryThreshold, ProbeResult};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Prints a colored line per host while a progress bar tracks the batch
pub struct TerminalReporter {
    progress: ProgressBar,
    threshold: ExpiryThreshold,
}

impl TerminalReporter {
    pub fn new(total: u64, threshold: ExpiryThreshold) -> Self {
        Self {
            progress: create_progress_bar(total, "Checking certificates"),
            threshold,
        }
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, result: &ProbeResult) {
        let line = format_result_line(result);
        self.progress.suspend(|| println!("{}", line));
        self.progress.inc(1);
    }

    fn finish(&self, summary: &BatchSummary) {
        self.progress.finish_and_clear();
        print_batch_summary(summary, self.threshold);
    }
}

/// Create a progress bar for batch operations
pub fn create_progress_bar(len: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if let Ok(template) =
        ProgressStyle::with_template("{msg} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
    {
        pb.set_style(template.progress_chars("█▓░"));
    }
    pb.set_message(message.to_string());
    pb
}

/// Render `host: status` for one result
pub fn format_result_line(result: &ProbeResult) -> String {
    let expires = result.expires().unwrap_or("at an unknown time");

    let status = match result.status() {
        ExpiryStatus::Expired => style(format!("expired ({})", expires)).red().bold(),
        ExpiryStatus::ExpiringSoon => style(format!("expiring {}", expires)).yellow().bold(),
        ExpiryStatus::Healthy => style(format!("ok (will expire {})", expires)).green().bold(),
        ExpiryStatus::Error => {
            style(result.error().unwrap_or("unknown error").to_string()).red()
        }
    };

    format!("{}: {}", result.host(), status)
}

/// Print section header
pub fn print_header(title: &str) {
    println!();
    println!("{}", style(title).cyan().bold());
    println!("{}", style("─".repeat(title.chars().count())).dim());
}

pub fn print_batch_summary(summary: &BatchSummary, threshold: ExpiryThreshold) {
    print_header("Batch Check Summary");

    println!("  Total hosts checked: {}", style(summary.total).bold());
    println!("  Healthy: {}", style(summary.healthy).green());
    println!(
        "  Expiring soon (<{} days): {}",
        threshold.days(),
        style(summary.expiring_soon).yellow()
    );
    println!("  Already expired: {}", style(summary.expired).red());
    println!("  Errors: {}", style(summary.errors).red());
}

/// Print a fatal error message to stderr
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), message);
}
