//! alphabet: the fixed bijection between byte values and two-letter codes.

pub mod build;
pub mod types;

pub use build::build_table;
pub use types::{AlphabetTable, NO_BYTE};
