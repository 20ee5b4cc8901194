
use std::time::Duration;

use anyhow::Result;
use common::*;
use docbench_benchmarks::workloads::{self, COMPLEX_QUERY_INDEX_BOUND};
use docbench_core::{collect_documents, Document, Field, Predicate, Sort, Store};

#[tokio::test]
async fn test_reads_and_queries_do_not_mutate() -> Result<()> {
    let store = memory_store();
    seed(store.as_ref(), 0..50).await?;
    let before = store.snapshot().await;

    workloads::read(store.as_ref(), 5).await?;
    workloads::complex_query(store.as_ref(), 5).await?;

    assert_eq!(store.snapshot().await, before);
    assert_eq!(store.counters().snapshot().find, 10);
    Ok(())
}

#[tokio::test]
async fn test_insert_then_read_sees_at_least_inserted() -> Result<()> {
    let store = memory_store();
    // pre-existing data in a reused collection
    seed(store.as_ref(), 1000..1010).await?;

    let inserted = workloads::insert(store.as_ref(), 25).await?;
    assert_eq!(inserted.count, 25);

    let read = workloads::read(store.as_ref(), 1).await?;
    assert_eq!(read.count, 1);

    let all = collect_documents(store.find_all().await?).await?;
    assert!(all.len() >= 25);
    assert_eq!(all.len(), 35);
    Ok(())
}

#[tokio::test]
async fn test_complex_query_filters_and_sorts() -> Result<()> {
    let store = memory_store();
    workloads::insert(store.as_ref(), 1000).await?;
    // touch a few low indices so the timestamp order differs from insertion order
    tokio::time::sleep(Duration::from_millis(2)).await;
    workloads::update(store.as_ref(), 10).await?;

    let result = workloads::complex_query(store.as_ref(), 1).await?;
    assert_eq!(result.count, 1);

    let stream = store.find_filtered_sorted(Predicate::IndexLt(COMPLEX_QUERY_INDEX_BOUND), Sort::descending(Field::Timestamp)).await?;
    let docs = collect_documents(stream).await?;
    assert_eq!(docs.len(), 500);
    assert!(docs.iter().all(|d| d.index < 500));
    assert!(docs.windows(2).all(|pair| pair[0].timestamp >= pair[1].timestamp));
    assert!(indices(&docs[..10]).iter().all(|i| *i < 10));
    Ok(())
}

#[tokio::test]
async fn test_bulk_insert_batches() -> Result<()> {
    let store = memory_store();

    let result = workloads::bulk_insert(store.as_ref(), 1050, 100).await?;

    assert_eq!(result.count, 1050);
    // ten full batches and a short one
    assert_eq!(store.counters().snapshot().insert_many, 11);
    assert_eq!(store.counters().snapshot().insert_one, 0);
    assert_eq!(sorted_indices(&store.snapshot().await), (0..1050).collect::<Vec<_>>());
    Ok(())
}

#[tokio::test]
async fn test_bulk_insert_of_nothing_issues_no_batches() -> Result<()> {
    let store = memory_store();

    let result = workloads::bulk_insert(store.as_ref(), 0, 100).await?;

    assert_eq!(result.count, 0);
    assert_eq!(store.counters().snapshot().insert_many, 0);
    Ok(())
}

#[tokio::test]
async fn test_update_and_delete_count_missing_indices() -> Result<()> {
    let store = memory_store();
    seed(store.as_ref(), 0..5).await?;

    let updated = workloads::update(store.as_ref(), 20).await?;
    assert_eq!(updated.count, 20);
    assert_eq!(store.counters().snapshot().update_one, 20);

    let deleted = workloads::delete(store.as_ref(), 20).await?;
    assert_eq!(deleted.count, 20);
    assert_eq!(store.counters().snapshot().delete_one, 20);
    assert_eq!(store.count().await?, 0);
    Ok(())
}

#[tokio::test]
async fn test_delete_removes_one_duplicate_per_index() -> Result<()> {
    let store = memory_store();
    seed(store.as_ref(), [0, 0, 1, 1]).await?;

    workloads::delete(store.as_ref(), 2).await?;

    let remaining: Vec<Document> = store.snapshot().await;
    assert_eq!(sorted_indices(&remaining), vec![0, 1]);
    Ok(())
}

#[tokio::test]
async fn test_store_error_propagates_from_workload() -> Result<()> {
    let store = docbench_storage_memory::MemoryStore::new().fail_after(3);

    let result = workloads::insert(&store, 10).await;

    assert!(matches!(result, Err(docbench_core::StoreError::Injected(_))));
    assert_eq!(store.count().await?, 3);
    Ok(())
}
