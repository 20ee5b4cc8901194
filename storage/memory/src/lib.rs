//! An in-process [`Store`](docbench_core::Store) for tests and benches.
//!
//! Documents live in insertion order, which is also the "natural order" used to
//! pick the target of `update_one` and `delete_one`. Optional per-operation
//! latency and failure injection let callers reproduce the timing and failure
//! behavior of a remote database without one.

mod counters;
mod store;

pub use counters::{OpCounters, OpSnapshot};
pub use store::MemoryStore;
