//! docbench: measures insert, read, update, delete, bulk insert and
//! filtered/sorted query throughput against a MongoDB collection.
//!
//! Usage:
//!   docbench                                   # defaults against localhost:27017
//!   docbench --host db1 --inserts 5000 --concurrency 20
//!   docbench --drop                            # start from an empty collection

mod args;

use std::str::FromStr;

use anyhow::Result;
use clap::Parser;
use docbench_benchmarks::Runner;
use docbench_storage_mongodb::MongoStore;
use tracing::Level;

use crate::args::Args;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let runner = Runner::new(args.bench_config());
    let mongo = args.mongo_config();

    runner.run(MongoStore::connect(&mongo)).await?;
    Ok(())
}

fn init_tracing() {
    let level = std::env::var("LOG_LEVEL").ok().and_then(|level| Level::from_str(&level).ok()).unwrap_or(Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();
}
