//! Shared building blocks for docbench: the benchmark document, query predicates,
//! the [`Store`] contract every backend implements, and the error taxonomy.

pub mod document;
pub mod error;
pub mod predicate;
pub mod store;

pub use document::{now_timestamp, Document};
pub use error::{ConnectionError, StoreError};
pub use predicate::{Field, Mutation, Order, Predicate, Sort};
pub use store::{collect_documents, DocumentStream, Store};
