//! Phase sequencing for a full benchmark run.

use std::future::Future;
use std::sync::Arc;

use chrono::Utc;
use docbench_core::{ConnectionError, Store};
use tracing::{info, warn};

use crate::config::BenchConfig;
use crate::harness::{run_workload, HarnessError};
use crate::instrumentation::{PhaseTimer, Report, ReportMetadata, RunResult};
use crate::workloads::Workload;

/// Orchestrates benchmark workload execution.
pub struct Runner {
    config: BenchConfig,
}

impl Runner {
    pub fn new(config: BenchConfig) -> Self { Self { config } }

    pub fn config(&self) -> &BenchConfig { &self.config }

    /// Connects, then runs every sequential phase followed by the concurrent insert phase.
    ///
    /// A failed connection is reported on the console and yields `Ok(None)` without
    /// running anything. A store failure during any phase ends the run with an error
    /// and no report.
    pub async fn run<S, C>(&self, connect: C) -> Result<Option<Report>, HarnessError>
    where
        S: Store + 'static,
        C: Future<Output = Result<S, ConnectionError>>,
    {
        let store = match connect.await {
            Ok(store) => Arc::new(store),
            Err(err) => {
                warn!("connection failed: {}", err);
                println!("{}", connection_failure_line(&err));
                return Ok(None);
            }
        };
        println!("Connected to {}", store.describe());

        self.execute(store).await.map(Some)
    }

    /// Runs all phases against an already connected store.
    pub async fn execute<S>(&self, store: Arc<S>) -> Result<Report, HarnessError>
    where S: Store + ?Sized + 'static {
        let mut report = Report::new(ReportMetadata { target: store.describe(), concurrency: self.config.concurrency, timestamp: Utc::now().to_rfc3339() });

        if self.config.drop_collection {
            info!("clearing {}", store.describe());
            store.clear().await?;
        }

        let total = PhaseTimer::start();
        for spec in self.config.sequential_phases() {
            info!("starting {} phase: {} operations", spec.workload().name(), spec.count());
            let result = run_workload(store.clone(), spec, 1).await?;
            println!("{}", summary_line(spec.workload(), &result));
            report.add_phase(spec.workload().name(), &result);
        }

        let spec = self.config.concurrent_phase();
        info!("starting concurrent {} phase: {} operations across {} workers", spec.workload().name(), spec.count(), self.config.concurrency);
        let result = run_workload(store.clone(), spec, self.config.concurrency).await?;
        println!(
            "Concurrently performed {} operations in {:.2} seconds using {} workers.",
            result.count,
            result.elapsed.as_secs_f64(),
            result.workers
        );
        report.add_phase(format!("concurrent_{}", spec.workload().name()), &result);

        report.finalize(total.elapsed());
        report.print_summary();
        Ok(report)
    }
}

/// The console message printed when the store cannot be reached.
pub fn connection_failure_line(err: &ConnectionError) -> String { format!("Could not connect to {}: {}", err.endpoint(), err) }

/// The one-line console summary printed after each sequential phase.
pub fn summary_line(workload: Workload, result: &RunResult) -> String {
    let seconds = result.elapsed.as_secs_f64();
    let count = result.count;
    match workload {
        Workload::Insert => format!("Inserted {} documents in {:.2} seconds.", count, seconds),
        Workload::Read => format!("Performed {} read operations in {:.2} seconds.", count, seconds),
        Workload::Update => format!("Updated {} documents in {:.2} seconds.", count, seconds),
        Workload::Delete => format!("Deleted {} documents in {:.2} seconds.", count, seconds),
        Workload::BulkInsert { .. } => format!("Bulk inserted {} documents in {:.2} seconds.", count, seconds),
        Workload::ComplexQuery => format!("Performed {} complex queries in {:.2} seconds.", count, seconds),
    }
}
