//! telemetry/counters.rs
//! Mutable counters used during a transcode pass.
//!
//! Summary: collects line, pair, and byte counts during encode/decode.
//! Converted into an immutable TranscodeSnapshot at the end of the pass.

use serde::{Deserialize, Serialize};

/// Deterministic counters collected during stream processing
#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TranscodeCounters {
    pub lines_in: u64,
    pub pairs: u64,
    pub bytes_in: u64,
    pub bytes_out: u64,
    pub lines_wrapped: u64,
}

impl TranscodeCounters {
    /// Record one consumed input line.
    ///
    /// - `trimmed_len`: line length after whitespace trimming
    pub fn add_line(&mut self, trimmed_len: usize) {
        self.lines_in += 1;
        self.bytes_in += trimmed_len as u64;
    }

    /// Record one successfully transcoded pair.
    ///
    /// - `out_len`: bytes appended to the output for this pair
    pub fn add_pair(&mut self, out_len: usize) {
        self.pairs += 1;
        self.bytes_out += out_len as u64;
    }

    /// Record one wrap terminator emitted by the encoder.
    pub fn add_wrap(&mut self) {
        self.lines_wrapped += 1;
        self.bytes_out += 1;
    }

    /// Record the single trailing terminator emitted by the decoder.
    pub fn add_terminator(&mut self) {
        self.bytes_out += 1;
    }
}
