use async_trait::async_trait;
use docbench_core::{ConnectionError, Document, DocumentStream, Mutation, Predicate, Sort, Store, StoreError};
use futures::{StreamExt, TryStreamExt};
use mongodb::{bson::doc, options::ClientOptions, Client, Collection};
use tracing::{debug, info};

use crate::{
    config::MongoConfig,
    error::{connection_error, store_error},
    filter,
};

/// A connected MongoDB collection. Cloning is cheap; the driver pools connections internally.
#[derive(Clone)]
pub struct MongoStore {
    collection: Collection<Document>,
    description: String,
}

impl MongoStore {
    /// Connects and pings the database, so an unreachable server fails here rather
    /// than on the first workload operation.
    pub async fn connect(config: &MongoConfig) -> Result<Self, ConnectionError> {
        let endpoint = config.endpoint();
        let mut options = ClientOptions::parse(config.uri()).await.map_err(|e| connection_error(&endpoint, e))?;
        options.app_name = Some("docbench".to_string());
        options.server_selection_timeout = Some(config.connect_timeout);

        let client = Client::with_options(options).map_err(|e| connection_error(&endpoint, e))?;
        let database = client.database(&config.database);
        database.run_command(doc! { "ping": 1 }).await.map_err(|e| connection_error(&endpoint, e))?;
        info!("Connected to MongoDB at {}", endpoint);

        Ok(Self {
            collection: database.collection::<Document>(&config.collection),
            description: format!("{}/{}.{}", config.uri(), config.database, config.collection),
        })
    }
}

#[async_trait]
impl Store for MongoStore {
    async fn insert_one(&self, doc: &Document) -> Result<(), StoreError> {
        self.collection.insert_one(doc).await.map_err(store_error)?;
        Ok(())
    }

    async fn insert_many(&self, docs: &[Document]) -> Result<(), StoreError> {
        // the server rejects empty batches
        if docs.is_empty() {
            return Ok(());
        }
        self.collection.insert_many(docs).await.map_err(store_error)?;
        Ok(())
    }

    async fn find_all(&self) -> Result<DocumentStream, StoreError> {
        let cursor = self.collection.find(filter::filter(&Predicate::All)).await.map_err(store_error)?;
        Ok(cursor.map_err(store_error).boxed())
    }

    async fn find_filtered_sorted(&self, predicate: Predicate, sort: Sort) -> Result<DocumentStream, StoreError> {
        let cursor = self.collection.find(filter::filter(&predicate)).sort(filter::sort(&sort)).await.map_err(store_error)?;
        Ok(cursor.map_err(store_error).boxed())
    }

    async fn update_one(&self, predicate: Predicate, mutation: Mutation) -> Result<u64, StoreError> {
        let result = self.collection.update_one(filter::filter(&predicate), filter::update(&mutation)).await.map_err(store_error)?;
        if result.matched_count == 0 {
            debug!("update_one matched nothing for {:?}", predicate);
        }
        Ok(result.matched_count)
    }

    async fn delete_one(&self, predicate: Predicate) -> Result<u64, StoreError> {
        let result = self.collection.delete_one(filter::filter(&predicate)).await.map_err(store_error)?;
        Ok(result.deleted_count)
    }

    async fn count(&self) -> Result<u64, StoreError> { self.collection.count_documents(doc! {}).await.map_err(store_error) }

    async fn clear(&self) -> Result<(), StoreError> { self.collection.drop().await.map_err(store_error) }

    fn describe(&self) -> String { self.description.clone() }
}
