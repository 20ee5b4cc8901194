use std::time::Duration;

use clap::Parser;
use docbench_benchmarks::BenchConfig;
use docbench_storage_mongodb::MongoConfig;

#[derive(Parser, Debug)]
#[command(name = "docbench", about = "MongoDB benchmarking tool")]
pub struct Args {
    /// MongoDB host.
    #[arg(long, env = "DOCBENCH_HOST", default_value = "localhost")]
    pub host: String,

    /// MongoDB port.
    #[arg(long, env = "DOCBENCH_PORT", default_value_t = 27017)]
    pub port: u16,

    /// Database name.
    #[arg(long, env = "DOCBENCH_DB", default_value = "benchmark")]
    pub db: String,

    /// Collection the workloads write to.
    #[arg(long, env = "DOCBENCH_COLLECTION", default_value = "test_data")]
    pub collection: String,

    /// Number of inserts.
    #[arg(long, env = "DOCBENCH_INSERTS", default_value_t = 1000)]
    pub inserts: usize,

    /// Number of reads.
    #[arg(long, env = "DOCBENCH_READS", default_value_t = 1000)]
    pub reads: usize,

    /// Number of updates.
    #[arg(long, env = "DOCBENCH_UPDATES", default_value_t = 1000)]
    pub updates: usize,

    /// Number of deletes.
    #[arg(long, env = "DOCBENCH_DELETES", default_value_t = 1000)]
    pub deletes: usize,

    /// Number of documents written by the bulk insert phase.
    #[arg(long = "bulk-inserts", env = "DOCBENCH_BULK_INSERTS", default_value_t = 1000)]
    pub bulk_inserts: usize,

    /// Number of complex (filtered + sorted) queries.
    #[arg(long = "complex-queries", env = "DOCBENCH_COMPLEX_QUERIES", default_value_t = 1000)]
    pub complex_queries: usize,

    /// Concurrency level for the concurrent insert phase.
    #[arg(long, env = "DOCBENCH_CONCURRENCY", default_value_t = 10)]
    pub concurrency: usize,

    /// Seconds to wait for the server before giving up.
    #[arg(long = "connect-timeout-secs", env = "DOCBENCH_CONNECT_TIMEOUT_SECS", default_value_t = 5)]
    pub connect_timeout_secs: u64,

    /// Drop the collection before the first phase.
    #[arg(long, env = "DOCBENCH_DROP")]
    pub drop: bool,
}

impl Args {
    pub fn bench_config(&self) -> BenchConfig {
        BenchConfig::builder()
            .inserts(self.inserts)
            .reads(self.reads)
            .updates(self.updates)
            .deletes(self.deletes)
            .bulk_inserts(self.bulk_inserts)
            .complex_queries(self.complex_queries)
            .concurrency(self.concurrency)
            .drop_collection(self.drop)
            .build()
    }

    pub fn mongo_config(&self) -> MongoConfig {
        MongoConfig {
            host: self.host.clone(),
            port: self.port,
            database: self.db.clone(),
            collection: self.collection.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
        }
    }
}
