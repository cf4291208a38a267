//! Data model for parsed diffs.

mod diff;

pub use diff::{ChangeType, FileChange, Hunk};
