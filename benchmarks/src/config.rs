//! Configuration for a benchmark run.

use crate::workloads::{Workload, WorkloadSpec, DEFAULT_BATCH_SIZE};

/// Operation counts per phase plus the concurrency of the final concurrent phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    pub inserts: usize,
    pub reads: usize,
    pub updates: usize,
    pub deletes: usize,
    pub bulk_inserts: usize,
    pub complex_queries: usize,
    /// Worker count for the concurrent insert phase.
    pub concurrency: usize,
    /// Documents per `insert_many` call in the bulk insert phase.
    pub batch_size: usize,
    /// Clear the collection before the first phase.
    pub drop_collection: bool,
}

impl BenchConfig {
    pub fn builder() -> BenchConfigBuilder { BenchConfigBuilder { config: BenchConfig::default() } }

    /// The sequential phases, in execution order.
    pub fn sequential_phases(&self) -> Vec<WorkloadSpec> {
        vec![
            WorkloadSpec::new(Workload::Insert, self.inserts),
            WorkloadSpec::new(Workload::Read, self.reads),
            WorkloadSpec::new(Workload::Update, self.updates),
            WorkloadSpec::new(Workload::Delete, self.deletes),
            WorkloadSpec::new(Workload::BulkInsert { batch_size: self.batch_size }, self.bulk_inserts),
            WorkloadSpec::new(Workload::ComplexQuery, self.complex_queries),
        ]
    }

    /// The insert phase that is repeated across `concurrency` workers.
    pub fn concurrent_phase(&self) -> WorkloadSpec { WorkloadSpec::new(Workload::Insert, self.inserts) }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            inserts: 1000,
            reads: 1000,
            updates: 1000,
            deletes: 1000,
            bulk_inserts: 1000,
            complex_queries: 1000,
            concurrency: 10,
            batch_size: DEFAULT_BATCH_SIZE,
            drop_collection: false,
        }
    }
}

/// Builder for BenchConfig with the command-line defaults.
pub struct BenchConfigBuilder {
    config: BenchConfig,
}

impl BenchConfigBuilder {
    pub fn inserts(mut self, count: usize) -> Self {
        self.config.inserts = count;
        self
    }

    pub fn reads(mut self, count: usize) -> Self {
        self.config.reads = count;
        self
    }

    pub fn updates(mut self, count: usize) -> Self {
        self.config.updates = count;
        self
    }

    pub fn deletes(mut self, count: usize) -> Self {
        self.config.deletes = count;
        self
    }

    pub fn bulk_inserts(mut self, count: usize) -> Self {
        self.config.bulk_inserts = count;
        self
    }

    pub fn complex_queries(mut self, count: usize) -> Self {
        self.config.complex_queries = count;
        self
    }

    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.config.concurrency = concurrency.max(1);
        self
    }

    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.config.batch_size = batch_size.max(1);
        self
    }

    pub fn drop_collection(mut self, drop: bool) -> Self {
        self.config.drop_collection = drop;
        self
    }

    pub fn build(self) -> BenchConfig { self.config }
}
