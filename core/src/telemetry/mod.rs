//! Telemetry for transcode passes: mutable counters collected while
//! streaming, converted into an immutable snapshot when the pass completes.

pub mod counters;
pub mod snapshot;
pub mod timers;

pub use counters::TranscodeCounters;
pub use snapshot::TranscodeSnapshot;
pub use timers::{Stage, StageTimes, TranscodeTimer};
