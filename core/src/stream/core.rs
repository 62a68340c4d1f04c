//! stream/core.rs
//! Stable public API over the per-line transcoding loops.
//!
//! Normalizes I/O endpoints, runs one encode or decode pass, and returns an
//! immutable telemetry snapshot. Exactly one pass per call; the alphabet
//! table is borrowed, never owned, so one table serves any number of passes.

use std::io::{BufReader, BufWriter, Write};
use std::time::Instant;

use crate::alphabet::AlphabetTable;
use crate::stream::decode::decode_pairs;
use crate::stream::encode::encode_pairs;
use crate::stream::io::{open_input, open_output, InputSource, OutputSink};
use crate::stream::types::{DecodeParams, EncodeParams};
use crate::telemetry::{Stage, TranscodeCounters, TranscodeSnapshot, TranscodeTimer};
use crate::types::StreamError;

/// Encode a hex stream into letter pairs.
pub fn encode_stream(
    input: InputSource,
    output: OutputSink,
    table: &AlphabetTable,
    params: EncodeParams,
) -> Result<TranscodeSnapshot, StreamError> {
    let reader = open_input(input)?;
    let writer = open_output(output)?;

    let mut reader = BufReader::new(reader);
    let mut writer = BufWriter::new(writer);

    let mut counters = TranscodeCounters::default();
    let mut timer = TranscodeTimer::new();

    let started = Instant::now();
    encode_pairs(&mut reader, &mut writer, table, &params, &mut counters)?;
    writer.flush()?;
    timer.add_stage_time(Stage::Encode, started.elapsed());
    timer.finish();

    let snapshot = TranscodeSnapshot::from(&counters, &timer);
    tracing::debug!(
        lines_in = snapshot.lines_in,
        pairs = snapshot.pairs,
        bytes_out = snapshot.bytes_out,
        "encode pass finished"
    );
    Ok(snapshot)
}

/// Decode a letter-pair stream back into hex.
pub fn decode_stream(
    input: InputSource,
    output: OutputSink,
    table: &AlphabetTable,
    params: DecodeParams,
) -> Result<TranscodeSnapshot, StreamError> {
    let reader = open_input(input)?;
    let writer = open_output(output)?;

    let mut reader = BufReader::new(reader);
    let mut writer = BufWriter::new(writer);

    let mut counters = TranscodeCounters::default();
    let mut timer = TranscodeTimer::new();

    let started = Instant::now();
    decode_pairs(&mut reader, &mut writer, table, &params, &mut counters)?;
    writer.flush()?;
    timer.add_stage_time(Stage::Decode, started.elapsed());
    timer.finish();

    let snapshot = TranscodeSnapshot::from(&counters, &timer);
    tracing::debug!(
        lines_in = snapshot.lines_in,
        pairs = snapshot.pairs,
        bytes_out = snapshot.bytes_out,
        "decode pass finished"
    );
    Ok(snapshot)
}
