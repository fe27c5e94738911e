//! Batch check command implementation

use crate::checks::CertificateInspector;
use crate::cli::OutputFormat;
use crate::config::Settings;
use crate::hosts::load_hosts;
use crate::models::BatchSummary;
use crate::output::{JsonReporter, Reporter, TerminalReporter};
use crate::runner::Scheduler;
use crate::utils::Result;
use std::path::Path;
use std::sync::Arc;
use tracing::warn;

/// Run the batch check command
///
/// Host-list and settings problems are returned as errors before any probe
/// starts. Per-host failures only show up in the report and the summary.
pub async fn run_batch(
    urls: &Path,
    settings: Settings,
    format: OutputFormat,
) -> Result<BatchSummary> {
    settings.probe.validate()?;

    let hosts = load_hosts(urls)?;
    if hosts.is_empty() {
        warn!(source = %urls.display(), "host list contains no hosts");
    }

    let threshold = settings.probe.threshold();
    let reporter: Arc<dyn Reporter> = match format {
        OutputFormat::Text => Arc::new(TerminalReporter::new(hosts.len() as u64, threshold)),
        OutputFormat::Json => Arc::new(JsonReporter::new()),
    };

    let scheduler = Scheduler::new(settings.probe.concurrency);
    let inspector = Arc::new(CertificateInspector::new(settings.probe));

    let summary = scheduler
        .inspect_all(hosts, inspector, Arc::clone(&reporter))
        .await;
    reporter.finish(&summary);

    Ok(summary)
}
