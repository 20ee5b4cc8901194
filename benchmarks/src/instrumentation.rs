//! Timing and reporting for benchmark runs.

use std::time::{Duration, Instant};

/// Outcome of one workload execution, sequential or concurrent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunResult {
    /// Wall-clock span of the execution.
    pub elapsed: Duration,
    /// Nominal operation count: what was requested, not what was performed.
    pub count: usize,
    /// Operations actually issued. Below `count` when a concurrent run's total
    /// does not divide evenly across its workers.
    pub performed: usize,
    pub workers: usize,
}

impl RunResult {
    pub fn sequential(elapsed: Duration, count: usize) -> Self { Self { elapsed, count, performed: count, workers: 1 } }

    pub fn ops_per_sec(&self) -> f64 { ops_per_sec(self.count, self.elapsed) }
}

/// Captures timing and metadata for a benchmark run.
#[derive(Debug, Clone)]
pub struct Report {
    pub phases: Vec<PhaseReport>,
    pub total_duration: Duration,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone)]
pub struct PhaseReport {
    pub name: String,
    pub duration: Duration,
    pub operations: usize,
    pub ops_per_sec: f64,
}

#[derive(Debug, Clone)]
pub struct ReportMetadata {
    pub target: String,
    pub concurrency: usize,
    pub timestamp: String,
}

impl Report {
    pub fn new(metadata: ReportMetadata) -> Self { Self { phases: Vec::new(), total_duration: Duration::ZERO, metadata } }

    pub fn add_phase(&mut self, name: impl Into<String>, result: &RunResult) {
        self.phases.push(PhaseReport {
            name: name.into(),
            duration: result.elapsed,
            operations: result.count,
            ops_per_sec: result.ops_per_sec(),
        });
    }

    pub fn finalize(&mut self, total_duration: Duration) { self.total_duration = total_duration; }

    pub fn phase(&self, name: &str) -> Option<&PhaseReport> { self.phases.iter().find(|p| p.name == name) }

    /// Prints a concise table summary to stdout.
    pub fn print_summary(&self) {
        println!("\n=== Benchmark Report ===");
        println!("Target: {}", self.metadata.target);
        println!("Concurrency: {}", self.metadata.concurrency);
        println!("Timestamp: {}", self.metadata.timestamp);
        println!("\nPhase Results:");
        println!("{:<30} {:>12} {:>12} {:>15}", "Phase", "Duration", "Operations", "Ops/sec");
        println!("{}", "-".repeat(72));
        for phase in &self.phases {
            println!("{:<30} {:>11.2}s {:>12} {:>15.2}", phase.name, phase.duration.as_secs_f64(), phase.operations, phase.ops_per_sec);
        }
        println!("{}", "-".repeat(72));
        println!("{:<30} {:>11.2}s", "Total", self.total_duration.as_secs_f64());
        println!();
    }
}

/// Timer for measuring phase durations.
pub struct PhaseTimer {
    start: Instant,
}

impl PhaseTimer {
    pub fn start() -> Self { Self { start: Instant::now() } }

    pub fn elapsed(&self) -> Duration { self.start.elapsed() }
}

fn ops_per_sec(operations: usize, duration: Duration) -> f64 {
    if duration.as_secs_f64() > 0.0 {
        operations as f64 / duration.as_secs_f64()
    } else {
        0.0
    }
}
