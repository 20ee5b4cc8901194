use async_trait::async_trait;
use futures::stream::BoxStream;
use futures::StreamExt;

use crate::{
    document::Document,
    error::StoreError,
    predicate::{Mutation, Predicate, Sort},
};

/// Lazily produced query results. Each `find_*` call re-issues the query.
pub type DocumentStream = BoxStream<'static, Result<Document, StoreError>>;

/// A live handle on one collection of the target database.
///
/// A single handle is shared by every concurrent worker of a run, so
/// implementations must be safe to call from many tasks at once.
#[async_trait]
pub trait Store: Send + Sync {
    async fn insert_one(&self, doc: &Document) -> Result<(), StoreError>;

    async fn insert_many(&self, docs: &[Document]) -> Result<(), StoreError>;

    async fn find_all(&self) -> Result<DocumentStream, StoreError>;

    async fn find_filtered_sorted(&self, predicate: Predicate, sort: Sort) -> Result<DocumentStream, StoreError>;

    /// Updates the first document matching `predicate`. Returns the number of
    /// documents matched; zero is not an error.
    async fn update_one(&self, predicate: Predicate, mutation: Mutation) -> Result<u64, StoreError>;

    /// Deletes the first document matching `predicate`, returning how many were removed.
    async fn delete_one(&self, predicate: Predicate) -> Result<u64, StoreError>;

    async fn count(&self) -> Result<u64, StoreError>;

    /// Removes every document from the collection.
    async fn clear(&self) -> Result<(), StoreError>;

    /// Human-readable identifier for reports (e.g. "mongodb://localhost:27017/benchmark.test_data").
    fn describe(&self) -> String;
}

/// Materializes a result stream, failing fast on the first error.
pub async fn collect_documents(mut stream: DocumentStream) -> Result<Vec<Document>, StoreError> {
    let mut results = Vec::new();
    while let Some(item) = stream.next().await {
        results.push(item?);
    }
    Ok(results)
}
