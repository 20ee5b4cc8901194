use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use docbench_core::{Document, DocumentStream, Mutation, Predicate, Sort, Store, StoreError};
use futures::{stream, StreamExt};
use tokio::sync::RwLock;
use tracing::debug;

use crate::counters::OpCounters;

pub struct MemoryStore {
    name: String,
    documents: RwLock<Vec<Document>>,
    latency: Option<Duration>,
    fail_after: Option<usize>,
    served: AtomicUsize,
    counters: OpCounters,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            name: "test_data".to_string(),
            documents: RwLock::new(Vec::new()),
            latency: None,
            fail_after: None,
            served: AtomicUsize::new(0),
            counters: OpCounters::default(),
        }
    }

    pub fn named(name: impl Into<String>) -> Self { Self { name: name.into(), ..Self::new() } }

    /// Sleeps for `latency` before serving every operation.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Serves the first `operations` calls normally, then fails every call after that.
    pub fn fail_after(mut self, operations: usize) -> Self {
        self.fail_after = Some(operations);
        self
    }

    pub fn counters(&self) -> &OpCounters { &self.counters }

    /// Copy of the stored documents in natural order.
    pub async fn snapshot(&self) -> Vec<Document> { self.documents.read().await.clone() }

    async fn admit(&self) -> Result<(), StoreError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        let served = self.served.fetch_add(1, Ordering::SeqCst);
        match self.fail_after {
            Some(limit) if served >= limit => {
                debug!("MemoryStore({}): failing operation #{}", self.name, served + 1);
                Err(StoreError::Injected(format!("operation #{} exceeded the limit of {}", served + 1, limit)))
            }
            _ => Ok(()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self { Self::new() }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_one(&self, doc: &Document) -> Result<(), StoreError> {
        self.counters.record_insert_one();
        self.admit().await?;
        self.documents.write().await.push(*doc);
        Ok(())
    }

    async fn insert_many(&self, docs: &[Document]) -> Result<(), StoreError> {
        self.counters.record_insert_many();
        self.admit().await?;
        self.documents.write().await.extend_from_slice(docs);
        Ok(())
    }

    async fn find_all(&self) -> Result<DocumentStream, StoreError> {
        self.counters.record_find();
        self.admit().await?;
        let docs = self.documents.read().await.clone();
        Ok(stream::iter(docs.into_iter().map(Ok)).boxed())
    }

    async fn find_filtered_sorted(&self, predicate: Predicate, sort: Sort) -> Result<DocumentStream, StoreError> {
        self.counters.record_find();
        self.admit().await?;
        let mut docs: Vec<Document> = self.documents.read().await.iter().filter(|doc| predicate.matches(doc)).copied().collect();
        docs.sort_by(|a, b| sort.compare(a, b));
        Ok(stream::iter(docs.into_iter().map(Ok)).boxed())
    }

    async fn update_one(&self, predicate: Predicate, mutation: Mutation) -> Result<u64, StoreError> {
        self.counters.record_update_one();
        self.admit().await?;
        let mut documents = self.documents.write().await;
        match documents.iter_mut().find(|doc| predicate.matches(doc)) {
            Some(doc) => {
                mutation.apply(doc);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_one(&self, predicate: Predicate) -> Result<u64, StoreError> {
        self.counters.record_delete_one();
        self.admit().await?;
        let mut documents = self.documents.write().await;
        match documents.iter().position(|doc| predicate.matches(doc)) {
            Some(position) => {
                documents.remove(position);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn count(&self) -> Result<u64, StoreError> { Ok(self.documents.read().await.len() as u64) }

    async fn clear(&self) -> Result<(), StoreError> {
        self.documents.write().await.clear();
        Ok(())
    }

    fn describe(&self) -> String { format!("memory://{}", self.name) }
}
