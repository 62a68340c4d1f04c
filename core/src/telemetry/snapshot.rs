//! telemetry/snapshot.rs
//! Immutable summary of a finished transcode pass.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::TranscodeCounters;
use crate::telemetry::timers::{StageTimes, TranscodeTimer};

/// Core telemetry snapshot.
/// Captures counters, throughput, stage timings, and elapsed duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscodeSnapshot {
    pub lines_in: u64,
    pub pairs: u64,
    pub bytes_in: u64,
    pub bytes_out: u64,
    pub lines_wrapped: u64,
    pub throughput_bytes_per_sec: f64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
}

impl TranscodeSnapshot {
    pub fn from(counters: &TranscodeCounters, timer: &TranscodeTimer) -> Self {
        let elapsed = timer.elapsed();

        let throughput = if elapsed.as_secs_f64() > 0.0 {
            counters.bytes_in as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            lines_in: counters.lines_in,
            pairs: counters.pairs,
            bytes_in: counters.bytes_in,
            bytes_out: counters.bytes_out,
            lines_wrapped: counters.lines_wrapped,
            throughput_bytes_per_sec: throughput,
            elapsed,
            stage_times: timer.stage_times.clone(),
        }
    }

    pub fn total_stage_time(&self) -> Duration {
        self.stage_times.total()
    }
}
