//! Runs against a real MongoDB in a container. Enable with `--features mongodb`.
#![cfg(feature = "mongodb")]


use std::collections::HashMap;
use std::time::Duration;

use anyhow::Result;
use common::*;
use docbench_benchmarks::{run_workload, workloads, Workload, WorkloadSpec};
use docbench_core::{collect_documents, ConnectionError, Field, Predicate, Sort, Store};
use docbench_storage_mongodb::{MongoConfig, MongoStore};
use testcontainers::ContainerAsync;
use testcontainers_modules::{mongo::Mongo, testcontainers::runners::AsyncRunner};

async fn start_mongo(collection: &str) -> Result<(ContainerAsync<Mongo>, MongoStore)> {
    let container = Mongo::default().start().await?;
    let host = container.get_host().await?;
    let port = container.get_host_port_ipv4(27017).await?;

    let config = MongoConfig { host: host.to_string(), port, collection: collection.to_string(), ..MongoConfig::default() };
    let store = MongoStore::connect(&config).await?;
    store.clear().await?;
    Ok((container, store))
}

#[tokio::test]
async fn test_mongo_insert_update_delete_lifecycle() -> Result<()> {
    let (_container, store) = start_mongo("lifecycle").await?;

    workloads::insert(&store, 100).await?;
    let docs = collect_documents(store.find_all().await?).await?;
    assert_eq!(sorted_indices(&docs), (0..100).collect::<Vec<_>>());
    let before: HashMap<i64, f64> = docs.iter().map(|d| (d.index, d.timestamp)).collect();

    tokio::time::sleep(Duration::from_millis(5)).await;
    workloads::update(&store, 100).await?;
    for doc in collect_documents(store.find_all().await?).await? {
        assert!(doc.timestamp > before[&doc.index]);
    }

    workloads::delete(&store, 100).await?;
    assert_eq!(store.count().await?, 0);
    Ok(())
}

#[tokio::test]
async fn test_mongo_complex_query_order() -> Result<()> {
    let (_container, store) = start_mongo("complex").await?;

    workloads::bulk_insert(&store, 1000, 100).await?;
    let stream = store.find_filtered_sorted(Predicate::IndexLt(500), Sort::descending(Field::Timestamp)).await?;
    let docs = collect_documents(stream).await?;

    assert_eq!(docs.len(), 500);
    assert!(docs.iter().all(|d| d.index < 500));
    assert!(docs.windows(2).all(|pair| pair[0].timestamp >= pair[1].timestamp));
    Ok(())
}

#[tokio::test]
async fn test_mongo_concurrent_inserts() -> Result<()> {
    let (_container, store) = start_mongo("concurrent").await?;
    let store = std::sync::Arc::new(store);

    let result = run_workload(store.clone(), WorkloadSpec::new(Workload::Insert, 105), 10).await?;

    assert_eq!((result.count, result.performed), (105, 100));
    assert_eq!(store.count().await?, 100);
    Ok(())
}

#[tokio::test]
async fn test_unreachable_server_is_a_connection_error() -> Result<()> {
    let config = MongoConfig { port: 1, connect_timeout: Duration::from_millis(500), ..MongoConfig::default() };

    let result = MongoStore::connect(&config).await;

    assert!(matches!(result, Err(ConnectionError::Unreachable { .. })));
    Ok(())
}
