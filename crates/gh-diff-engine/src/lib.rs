//! # gh-diff-engine
//!
//! Unified diff parsing and review-relevance classification for pull request
//! diffs.
//!
//! ## Design Principles
//!
//! This crate is the pure core of the review pipeline. It receives a complete
//! diff text buffer and returns a complete structured result, with no network,
//! filesystem, or ambient configuration access. This enables:
//!
//! - Testability without mocking HTTP clients
//! - Safe concurrent use from any number of tasks (every call owns its input
//!   and output)
//! - Reusability in different contexts (GitHub, GitLab, local git)
//!
//! All operations are total: malformed input degrades field by field instead
//! of failing the document, so one broken file section never blocks review of
//! the remaining files.
//!
//! ## Usage
//!
//! ```rust
//! use gh_diff_engine::{
//!     filter_relevant_files, parse_unified_diff, DEFAULT_LARGE_FILE_LINE_THRESHOLD,
//! };
//!
//! let diff_text = "diff --git a/foo.txt b/foo.txt\n\
//!                  --- a/foo.txt\n\
//!                  +++ b/foo.txt\n\
//!                  @@ -0,0 +1,1 @@\n\
//!                  +hello\n";
//!
//! let files = parse_unified_diff(diff_text, DEFAULT_LARGE_FILE_LINE_THRESHOLD);
//! let visible = filter_relevant_files(files, false);
//! assert_eq!(visible.len(), 1);
//! ```

pub mod classify;
pub mod filter;
pub mod model;
pub mod parser;

// Re-export commonly used types
pub use classify::{classify_path, Classification};
pub use filter::filter_relevant_files;
pub use model::{ChangeType, FileChange, Hunk};
pub use parser::{parse_unified_diff, DEFAULT_LARGE_FILE_LINE_THRESHOLD};
