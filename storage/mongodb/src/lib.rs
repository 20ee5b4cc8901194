//! [`Store`](docbench_core::Store) implementation over a MongoDB collection.

mod config;
mod error;
mod filter;
mod store;

pub use config::MongoConfig;
pub use store::MongoStore;
