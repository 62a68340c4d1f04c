//! stream/decode.rs
//! Line-buffered letter-pair -> hex decoding.

use std::io::{BufRead, Write};

use crate::alphabet::AlphabetTable;
use crate::constants::{HEX_LOWER, HEX_UPPER};
use crate::stream::types::{DecodeParams, InvalidInput};
use crate::telemetry::TranscodeCounters;
use crate::types::StreamError;

/// Decode letter pairs from `reader` back into hex byte pairs on `writer`.
///
/// Input is case-insensitive: each trimmed line is upper-cased in full
/// before lookup. Output is one continuous run of hex digits with no
/// separator and no wrapping, closed by exactly one terminator once all
/// input is consumed, even when the input is empty.
pub fn decode_pairs<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    table: &AlphabetTable,
    params: &DecodeParams,
    counters: &mut TranscodeCounters,
) -> Result<(), StreamError> {
    let digits = if params.uppercase { HEX_UPPER } else { HEX_LOWER };
    let mut line = String::new();

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
            let byte = match table.byte_for(upper) {
                Some(b) => b,
                None => {
                    return Err(InvalidInput::UnknownLetterPair {
                        pair: String::from_utf8_lossy(&upper).into_owned(),
                    }
                    .into());
                }
            };

            let hex = [digits[(byte >> 4) as usize], digits[(byte & 0x0F) as usize]];
            writer.write_all(&hex)?;
            counters.add_pair(hex.len());
        }
    }

    // The decoded stream always ends with a single terminator.
    writer.write_all(b"\n")?;
    counters.add_terminator();

    Ok(())
}
