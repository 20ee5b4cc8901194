//! Concurrent load generation.
//!
//! A run splits its total operation count evenly across a fixed number of
//! workers, launches them all against the same store, and measures the
//! wall-clock span until the last one is observed to finish. The span is bounded
//! by the slowest worker, not by the sum of their durations.
//!
//! Failure is fail-fast: the first worker error seen while joining (in launch
//! order) aborts the run. Workers that are still running are detached rather
//! than cancelled; nothing here can interrupt a worker once it has started.

use std::future::Future;
use std::sync::Arc;

use docbench_core::{Store, StoreError};
use thiserror::Error;
use tokio::task::JoinError;
use tracing::{debug, info};

use crate::instrumentation::{PhaseTimer, RunResult};
use crate::workloads::WorkloadSpec;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("a concurrent run needs at least one worker")]
    NoWorkers,
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("worker task failed: {0}")]
    Worker(#[from] JoinError),
}

/// Per-worker share of a run.
///
/// Every worker gets `floor(total / workers)` operations. The remainder is
/// dropped, not redistributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    pub per_worker: usize,
    pub workers: usize,
}

impl Partition {
    pub fn new(total: usize, workers: usize) -> Result<Self, HarnessError> {
        if workers == 0 {
            return Err(HarnessError::NoWorkers);
        }
        Ok(Self { per_worker: total / workers, workers })
    }

    /// Operations that will actually be issued across all workers.
    pub fn performed(&self) -> usize { self.per_worker * self.workers }
}

/// Runs `workload_fn` on `worker_count` concurrent tasks sharing `store`, each
/// with `total_ops / worker_count` operations.
///
/// The returned count is `total_ops` as requested, even when the partition
/// drops a remainder; `RunResult::performed` carries the true figure.
///
/// With a single worker the run is sequential and the worker's own timing is
/// reported, so setup the workload does before its first operation is excluded.
pub async fn run_concurrent<S, F, Fut>(store: Arc<S>, workload_fn: F, total_ops: usize, worker_count: usize) -> Result<RunResult, HarnessError>
where
    S: Store + ?Sized + 'static,
    F: Fn(Arc<S>, usize) -> Fut,
    Fut: Future<Output = Result<RunResult, StoreError>> + Send + 'static,
{
    let partition = Partition::new(total_ops, worker_count)?;
    if partition.performed() != total_ops {
        debug!("{} operations do not split evenly across {} workers; {} will be skipped", total_ops, worker_count, total_ops - partition.performed());
    }

    let timer = PhaseTimer::start();
    let mut handles = Vec::with_capacity(partition.workers);
    for _ in 0..partition.workers {
        handles.push(tokio::spawn(workload_fn(store.clone(), partition.per_worker)));
    }

    let mut worker_elapsed = Vec::with_capacity(partition.workers);
    for (worker, handle) in handles.into_iter().enumerate() {
        let result = handle.await??;
        debug!("worker {} finished {} operations in {:.2} seconds", worker, result.count, result.elapsed.as_secs_f64());
        worker_elapsed.push(result.elapsed);
    }
    let elapsed = match worker_elapsed.as_slice() {
        [sequential] => *sequential,
        _ => timer.elapsed(),
    };

    info!("{} workers completed {} operations in {:.2} seconds", partition.workers, partition.performed(), elapsed.as_secs_f64());
    Ok(RunResult { elapsed, count: total_ops, performed: partition.performed(), workers: partition.workers })
}

/// [`run_concurrent`] for one of the built-in workloads.
pub async fn run_workload<S>(store: Arc<S>, spec: WorkloadSpec, worker_count: usize) -> Result<RunResult, HarnessError>
where S: Store + ?Sized + 'static {
    let workload = spec.workload();
    run_concurrent(store, move |store: Arc<S>, count| async move { workload.run(store.as_ref(), count).await }, spec.count(), worker_count).await
}
