//! Output formatting module
//!
//! Reporters receive each probe result as soon as its task finishes:
//! - Colored terminal lines with a progress bar
//! - JSON lines

pub mod json;
pub mod terminal;

use crate::models::{BatchSummary, ProbeResult};

pub use json::JsonReporter;
pub use terminal::{format_result_line, print_batch_summary, print_error, TerminalReporter};

/// Receives probe results from concurrently running tasks
pub trait Reporter: Send + Sync {
    /// Called exactly once per host, from the task that probed it
    fn report(&self, result: &ProbeResult);

    /// Called once after every probe has finished
    fn finish(&self, _summary: &BatchSummary) {}
}
