//! Diff data structures representing a pull request's changes.

use serde::{Deserialize, Serialize};

/// How a file was changed in the diff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    /// File was created (`new file mode` marker).
    Added,
    /// File content changed with no operation marker.
    #[default]
    Modified,
    /// File was removed (`deleted file mode` marker).
    Deleted,
    /// File was moved (`rename from` marker).
    Renamed,
    /// Fallback tag for records from foreign sources; never produced by the
    /// parser.
    #[serde(other)]
    Unknown,
}

impl ChangeType {
    /// Get a single-character representation.
    pub fn as_char(&self) -> char {
        match self {
            ChangeType::Added => 'A',
            ChangeType::Modified => 'M',
            ChangeType::Deleted => 'D',
            ChangeType::Renamed => 'R',
            ChangeType::Unknown => '?',
        }
    }

    /// Get the lowercase label used in serialized records and badges.
    pub fn label(&self) -> &'static str {
        match self {
            ChangeType::Added => "added",
            ChangeType::Modified => "modified",
            ChangeType::Deleted => "deleted",
            ChangeType::Renamed => "renamed",
            ChangeType::Unknown => "unknown",
        }
    }
}

/// A contiguous region of change within one file's diff.
///
/// `content` holds the verbatim hunk header line plus every body line
/// (context, addition, deletion) belonging to this hunk, each terminated with
/// a newline. It never contains another hunk's or file's header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hunk {
    /// 1-based start line in the pre-image (0 when the header omits a range).
    pub old_start: u32,
    /// Line count in the pre-image (0 when the header omits a range).
    pub old_lines: u32,
    /// 1-based start line in the post-image (0 when the header omits a range).
    pub new_start: u32,
    /// Line count in the post-image (0 when the header omits a range).
    pub new_lines: u32,
    /// Header line plus body lines, newline-terminated, `+`/`-`/` ` prefixes
    /// preserved verbatim.
    pub content: String,
}

impl Hunk {
    /// Line count as consumed by the large-file measure: every `\n`-separated
    /// segment of `content`, header line included. The trailing newline
    /// contributes one empty segment; this literal count is part of the
    /// filter contract and must not be "corrected".
    pub fn line_count(&self) -> usize {
        self.content.split('\n').count()
    }

    /// Body lines of the hunk (everything after the header line).
    pub fn body_lines(&self) -> impl Iterator<Item = &str> {
        self.content.split('\n').skip(1)
    }
}

/// One file's entry in a parsed diff.
///
/// Created once during the parse pass and immutable thereafter; the three
/// classification flags are computed from `new_path` and hunk volume at parse
/// time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChange {
    /// Path on the `a/` side of the file header, as written (not normalized).
    pub old_path: String,
    /// Path on the `b/` side of the file header, as written (not normalized).
    pub new_path: String,
    /// How the file was changed.
    pub change_type: ChangeType,
    /// Hunks in diff order; empty for pure renames and mode-only changes.
    pub hunks: Vec<Hunk>,
    /// Path ends with a known manifest/build filename.
    pub is_important: bool,
    /// Path matches a build-artifact/lockfile/binary pattern.
    pub is_generated: bool,
    /// Total hunk line count exceeds the caller's threshold.
    pub is_large: bool,
}

impl FileChange {
    /// Display name for the file, showing the rename arrow when the two
    /// header paths differ.
    pub fn display_name(&self) -> String {
        if self.change_type == ChangeType::Renamed && self.old_path != self.new_path {
            format!("{} → {}", self.old_path, self.new_path)
        } else {
            self.new_path.clone()
        }
    }

    /// Sum of every hunk's line count (the large-file measure).
    pub fn total_hunk_lines(&self) -> usize {
        self.hunks.iter().map(Hunk::line_count).sum()
    }

    /// Number of added lines across all hunks.
    pub fn additions(&self) -> usize {
        self.body_lines_with_prefix('+', "+++")
    }

    /// Number of deleted lines across all hunks.
    pub fn deletions(&self) -> usize {
        self.body_lines_with_prefix('-', "---")
    }

    fn body_lines_with_prefix(&self, prefix: char, file_marker: &str) -> usize {
        self.hunks
            .iter()
            .flat_map(Hunk::body_lines)
            .filter(|line| line.starts_with(prefix) && !line.starts_with(file_marker))
            .count()
    }
}
