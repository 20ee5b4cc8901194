//! Throughput benchmark for document stores.
//!
//! Runs insert, read, update, delete, bulk insert and filtered/sorted query
//! workloads sequentially against any [`docbench_core::Store`], then repeats the
//! insert workload across concurrent workers.

pub mod config;
pub mod harness;
pub mod instrumentation;
pub mod runner;
pub mod workloads;

pub use config::{BenchConfig, BenchConfigBuilder};
pub use harness::{run_concurrent, run_workload, HarnessError, Partition};
pub use instrumentation::{PhaseTimer, Report, RunResult};
pub use runner::Runner;
pub use workloads::{Workload, WorkloadSpec};
