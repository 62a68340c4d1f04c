//! hexalpha-core
//!
//! Pure Rust line-oriented transcoder between hexadecimal byte pairs
//! and two-letter alphabetic codes.
//! No async, no FFI.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;

// Table and transcoder layers
pub mod alphabet;
pub mod stream;
pub mod telemetry;
