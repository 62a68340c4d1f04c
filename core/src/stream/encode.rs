//! stream/encode.rs
//! Line-buffered hex -> letter-pair encoding.

use std::io::{BufRead, Write};

use crate::alphabet::AlphabetTable;
use crate::constants::{HEX_DECODE, HEX_INVALID};
use crate::stream::types::{EncodeParams, InvalidInput};
use crate::telemetry::TranscodeCounters;
use crate::types::StreamError;

/// Encode hex byte pairs from `reader` into letter pairs on `writer`.
///
/// Each input line is trimmed of surrounding whitespace and consumed two
/// characters at a time, left to right, case-insensitively. Codes are
/// appended with no separator; a terminator is emitted whenever the running
/// output count reaches `params.line_length` (0 disables wrapping), plus one
/// final terminator for a partial trailing line.
pub fn encode_pairs<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    table: &AlphabetTable,
    params: &EncodeParams,
    counters: &mut TranscodeCounters,
) -> Result<(), StreamError> {
    let mut line = String::new();
    let mut line_count = 0usize;

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }

        let trimmed = line.trim();
        counters.add_line(trimmed.len());
        if trimmed.len() % 2 != 0 {
            return Err(InvalidInput::OddLength.into());
        }

        for pair in trimmed.as_bytes().chunks_exact(2) {
            let upper = [pair[0].to_ascii_uppercase(), pair[1].to_ascii_uppercase()];
            let hi = HEX_DECODE[upper[0] as usize];
            let lo = HEX_DECODE[upper[1] as usize];
            if hi == HEX_INVALID || lo == HEX_INVALID {
                return Err(InvalidInput::UnknownHexPair {
                    pair: String::from_utf8_lossy(&upper).into_owned(),
                }
                .into());
            }

            let mut code = table.code_for((hi << 4) | lo);
            if !params.uppercase {
                code = [code[0].to_ascii_lowercase(), code[1].to_ascii_lowercase()];
            }
            writer.write_all(&code)?;
            counters.add_pair(code.len());

            line_count += code.len();
            if params.line_length > 0 && line_count >= params.line_length {
                writer.write_all(b"\n")?;
                counters.add_wrap();
                line_count = 0;
            }
        }
    }

    // Flush a partial trailing line. Empty input never reaches this point
    // with a non-zero count, so it produces no output at all.
    if line_count > 0 && params.line_length > 0 {
        writer.write_all(b"\n")?;
        counters.add_wrap();
    }

    Ok(())
}
