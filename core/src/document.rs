use chrono::Utc;
use serde::{Deserialize, Serialize};

/// The record every workload writes: a logical `index` used to correlate
/// updates and deletes, and the wall-clock `timestamp` of the last write.
///
/// Backends may attach their own identity (e.g. `_id`) on insert; it is not part
/// of the document and is ignored when reading back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub index: i64,
    pub timestamp: f64,
}

impl Document {
    /// Creates a document stamped with the current time.
    pub fn new(index: i64) -> Self { Self { index, timestamp: now_timestamp() } }

    pub fn with_timestamp(index: i64, timestamp: f64) -> Self { Self { index, timestamp } }
}

/// Seconds since the Unix epoch, microsecond resolution.
pub fn now_timestamp() -> f64 { Utc::now().timestamp_micros() as f64 / 1_000_000.0 }
