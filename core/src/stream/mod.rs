//! stream: line-oriented hex <-> letter-pair transcoding.
//!
//! This module exposes the stable public API for the CLI and for tests.
//! Internals are layered: `encode`/`decode` hold the per-line loops, `io`
//! normalizes endpoints, `core` wires both together with telemetry.

pub mod core;
pub mod decode;
pub mod encode;
pub mod io;
pub mod types;

pub use self::core::{decode_stream, encode_stream};
pub use io::{InputSource, OutputSink, SharedBuffer};
pub use types::{DecodeParams, EncodeParams, InvalidInput};
