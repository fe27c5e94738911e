//! Batch probe scheduler
//!
//! Spawns one task per host, with at most `capacity` probes in flight. The
//! scheduling loop itself waits for a free permit before spawning, so the
//! number of live probe tasks never exceeds the cap. A probe that panics is
//! reported as an `Error` result for its host.

use crate::checks::CertificateInspector;
use crate::models::{BatchSummary, ExpiryStatus, HostAddress, ProbeResult};
use crate::output::Reporter;
use futures::FutureExt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Default number of concurrent probes
pub const DEFAULT_CONCURRENCY: usize = 4;

pub struct Scheduler {
    limiter: Arc<Semaphore>,
    capacity: usize,
}

impl Scheduler {
    /// Create a scheduler allowing `capacity` concurrent probes (at least one)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            limiter: Arc::new(Semaphore::new(capacity)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Probe every host with `probe` and hand each result to `reporter` as it
    /// completes. Returns once every spawned task has finished.
    ///
    /// Results arrive in completion order, not input order.
    pub async fn run_all<P, Fut>(
        &self,
        hosts: Vec<HostAddress>,
        probe: P,
        reporter: Arc<dyn Reporter>,
    ) -> BatchSummary
    where
        P: Fn(HostAddress) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ProbeResult> + Send + 'static,
    {
        info!(hosts = hosts.len(), concurrency = self.capacity, "starting batch");

        let probe = Arc::new(probe);
        let mut tasks: JoinSet<ExpiryStatus> = JoinSet::new();

        for host in hosts {
            // The limiter is never closed, so acquire only fails if that changes
            let Ok(permit) = Arc::clone(&self.limiter).acquire_owned().await else {
                warn!("concurrency limiter closed; remaining hosts skipped");
                break;
            };

            let probe = Arc::clone(&probe);
            let reporter = Arc::clone(&reporter);

            debug!(host = %host, "probe started");
            tasks.spawn(async move {
                let _permit = permit;
                let attempt = AssertUnwindSafe(async { (*probe)(host.clone()).await })
                    .catch_unwind()
                    .await;
                let result = attempt.unwrap_or_else(|_| {
                    warn!(host = %host, "probe panicked");
                    ProbeResult::failed(host, "probe task panicked")
                });
                reporter.report(&result);
                result.status()
            });
        }

        let mut summary = BatchSummary::default();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(status) => summary.record(status),
                Err(e) => {
                    warn!(error = %e, "probe task did not complete");
                    summary.record(ExpiryStatus::Error);
                }
            }
        }

        info!(
            total = summary.total,
            issues = summary.issues(),
            "batch complete"
        );
        summary
    }

    /// Run [`CertificateInspector::inspect`] for every host
    pub async fn inspect_all(
        &self,
        hosts: Vec<HostAddress>,
        inspector: Arc<CertificateInspector>,
        reporter: Arc<dyn Reporter>,
    ) -> BatchSummary {
        self.run_all(
            hosts,
            move |host| {
                let inspector = Arc::clone(&inspector);
                async move { inspector.inspect(&host).await }
            },
            reporter,
        )
        .await
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(DEFAULT_CONCURRENCY)
    }
}
