//! Parsers for diff text.

mod unified;

pub use unified::{parse_unified_diff, DEFAULT_LARGE_FILE_LINE_THRESHOLD};
