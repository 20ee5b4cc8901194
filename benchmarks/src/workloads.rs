//! The benchmark's workload phases.
//!
//! Every function takes the shared store and an operation count, and reports the
//! wall-clock time from just before its first operation to just after its last,
//! together with the count it was asked for (not the number of documents that
//! were actually affected).

use docbench_core::{collect_documents, Document, Field, Mutation, Predicate, Sort, Store, StoreError};
use tracing::debug;

use crate::instrumentation::{PhaseTimer, RunResult};

pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Complex queries select documents with `index` below this bound.
pub const COMPLEX_QUERY_INDEX_BOUND: i64 = 500;

/// One operation kind of the benchmark menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workload {
    Insert,
    Read,
    Update,
    Delete,
    BulkInsert { batch_size: usize },
    ComplexQuery,
}

impl Workload {
    pub fn name(&self) -> &'static str {
        match self {
            Workload::Insert => "insert",
            Workload::Read => "read",
            Workload::Update => "update",
            Workload::Delete => "delete",
            Workload::BulkInsert { .. } => "bulk_insert",
            Workload::ComplexQuery => "complex_query",
        }
    }

    pub async fn run<S: Store + ?Sized>(&self, store: &S, count: usize) -> Result<RunResult, StoreError> {
        match *self {
            Workload::Insert => insert(store, count).await,
            Workload::Read => read(store, count).await,
            Workload::Update => update(store, count).await,
            Workload::Delete => delete(store, count).await,
            Workload::BulkInsert { batch_size } => bulk_insert(store, count, batch_size).await,
            Workload::ComplexQuery => complex_query(store, count).await,
        }
    }
}

/// A workload together with its total operation count. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkloadSpec {
    workload: Workload,
    count: usize,
}

impl WorkloadSpec {
    pub fn new(workload: Workload, count: usize) -> Self { Self { workload, count } }

    pub fn workload(&self) -> Workload { self.workload }

    pub fn count(&self) -> usize { self.count }
}

/// Inserts `count` documents one at a time, with indices `0..count`.
///
/// Indices restart at zero on every call, so concurrent workers write overlapping
/// index values.
pub async fn insert<S: Store + ?Sized>(store: &S, count: usize) -> Result<RunResult, StoreError> {
    let timer = PhaseTimer::start();
    for i in 0..count {
        store.insert_one(&Document::new(i as i64)).await?;
    }
    finish("insert", timer, count)
}

/// Runs `count` unfiltered scans, materializing every document each time.
pub async fn read<S: Store + ?Sized>(store: &S, count: usize) -> Result<RunResult, StoreError> {
    let timer = PhaseTimer::start();
    for _ in 0..count {
        let _documents = collect_documents(store.find_all().await?).await?;
    }
    finish("read", timer, count)
}

/// Touches the timestamp of the document with `index == i` for `i` in `0..count`.
/// A missing index still counts as a completed operation.
pub async fn update<S: Store + ?Sized>(store: &S, count: usize) -> Result<RunResult, StoreError> {
    let timer = PhaseTimer::start();
    for i in 0..count {
        store.update_one(Predicate::IndexEq(i as i64), Mutation::touch()).await?;
    }
    finish("update", timer, count)
}

/// Deletes one document with `index == i` for `i` in `0..count`.
pub async fn delete<S: Store + ?Sized>(store: &S, count: usize) -> Result<RunResult, StoreError> {
    let timer = PhaseTimer::start();
    for i in 0..count {
        store.delete_one(Predicate::IndexEq(i as i64)).await?;
    }
    finish("delete", timer, count)
}

/// Builds `count` documents up front, then writes them in batches of `batch_size`
/// (the last batch may be shorter). Construction is not timed.
pub async fn bulk_insert<S: Store + ?Sized>(store: &S, count: usize, batch_size: usize) -> Result<RunResult, StoreError> {
    let documents: Vec<Document> = (0..count).map(|i| Document::new(i as i64)).collect();
    let timer = PhaseTimer::start();
    for batch in documents.chunks(batch_size.max(1)) {
        store.insert_many(batch).await?;
    }
    finish("bulk_insert", timer, count)
}

/// Runs `count` queries for `index < 500` ordered by `timestamp` descending, fully materialized.
pub async fn complex_query<S: Store + ?Sized>(store: &S, count: usize) -> Result<RunResult, StoreError> {
    let timer = PhaseTimer::start();
    for _ in 0..count {
        let stream = store.find_filtered_sorted(Predicate::IndexLt(COMPLEX_QUERY_INDEX_BOUND), Sort::descending(Field::Timestamp)).await?;
        let _documents = collect_documents(stream).await?;
    }
    finish("complex_query", timer, count)
}

fn finish(name: &str, timer: PhaseTimer, count: usize) -> Result<RunResult, StoreError> {
    let result = RunResult::sequential(timer.elapsed(), count);
    debug!("{}: {} operations in {:.2} seconds", name, count, result.elapsed.as_secs_f64());
    Ok(result)
}
