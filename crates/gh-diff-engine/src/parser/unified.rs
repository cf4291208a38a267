//! Parse unified diff format (as returned by the GitHub API).
//!
//! A single forward pass over the line-split text. The parser is total:
//! malformed file headers degrade to empty paths, malformed hunk headers to
//! zero-valued ranges, unknown operation markers to [`ChangeType::Modified`],
//! and text outside any `diff --git` block is silently skipped. Nothing in
//! this module can fail.

use crate::classify::classify_path;
use crate::model::{ChangeType, FileChange, Hunk};

/// Default threshold for the large-file heuristic, in hunk content lines.
pub const DEFAULT_LARGE_FILE_LINE_THRESHOLD: usize = 2000;

/// Marker opening a file section.
const FILE_HEADER: &str = "diff --git";
/// Marker opening a hunk.
const HUNK_HEADER: &str = "@@";

/// Parse a unified diff string into an ordered list of [`FileChange`] records.
///
/// # Arguments
///
/// * `diff_text` - The unified diff text (from the GitHub API or `git diff`)
/// * `large_file_line_threshold` - Hunk line budget above which a file is
///   flagged `is_large`; callers without an opinion pass
///   [`DEFAULT_LARGE_FILE_LINE_THRESHOLD`]
///
/// # Returns
///
/// One record per `diff --git` section, in order of appearance. Input with no
/// file headers yields an empty vec.
///
/// # Example
///
/// ```
/// use gh_diff_engine::parser::{parse_unified_diff, DEFAULT_LARGE_FILE_LINE_THRESHOLD};
///
/// let files = parse_unified_diff("", DEFAULT_LARGE_FILE_LINE_THRESHOLD);
/// assert!(files.is_empty());
/// ```
pub fn parse_unified_diff(diff_text: &str, large_file_line_threshold: usize) -> Vec<FileChange> {
    let lines: Vec<&str> = diff_text.split('\n').collect();
    let mut files = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        if !lines[i].starts_with(FILE_HEADER) {
            i += 1;
            continue;
        }

        let (old_path, new_path) = split_file_header(lines[i]);

        // Scan for file-operation markers between the file header and the
        // first hunk (or the next file). When multiple markers appear in one
        // section the last one wins; real diffs never emit conflicting
        // markers, so the tie-break only pins down the degenerate case.
        let mut change_type = ChangeType::Modified;
        let mut cursor = i + 1;
        while cursor < lines.len()
            && !lines[cursor].starts_with(HUNK_HEADER)
            && !lines[cursor].starts_with(FILE_HEADER)
        {
            if lines[cursor].starts_with("new file mode") {
                change_type = ChangeType::Added;
            }
            if lines[cursor].starts_with("deleted file mode") {
                change_type = ChangeType::Deleted;
            }
            if lines[cursor].starts_with("rename from") {
                change_type = ChangeType::Renamed;
            }
            cursor += 1;
        }

        let mut hunks = Vec::new();
        while cursor < lines.len() && lines[cursor].starts_with(HUNK_HEADER) {
            let header = lines[cursor];
            let (old_start, old_lines, new_start, new_lines) =
                parse_hunk_ranges(header).unwrap_or((0, 0, 0, 0));

            let mut content = String::with_capacity(header.len() + 1);
            content.push_str(header);
            content.push('\n');

            cursor += 1;
            while cursor < lines.len()
                && !lines[cursor].starts_with(HUNK_HEADER)
                && !lines[cursor].starts_with(FILE_HEADER)
            {
                content.push_str(lines[cursor]);
                content.push('\n');
                cursor += 1;
            }

            hunks.push(Hunk {
                old_start,
                old_lines,
                new_start,
                new_lines,
                content,
            });
        }

        let classification = classify_path(&new_path);
        // Crude size proxy: hunk content lines (header included), not bytes.
        // Insensitive to line length; pinned by the filter contract.
        let total_lines: usize = hunks.iter().map(Hunk::line_count).sum();

        files.push(FileChange {
            old_path,
            new_path,
            change_type,
            hunks,
            is_important: classification.is_important,
            is_generated: classification.is_generated,
            is_large: total_lines > large_file_line_threshold,
        });

        i = cursor;
    }

    files
}

/// Extract the two paths from a `diff --git a/<old> b/<new>` header line.
///
/// The old path may itself contain ` b/`, so the split point is the rightmost
/// ` b/` occurrence that leaves both sides non-empty. A header not matching
/// the two-path form yields two empty strings; the parse continues.
fn split_file_header(line: &str) -> (String, String) {
    let Some(rest) = line.strip_prefix("diff --git a/") else {
        return (String::new(), String::new());
    };

    let mut end = rest.len();
    while let Some(pos) = rest[..end].rfind(" b/") {
        let old = &rest[..pos];
        let new = &rest[pos + 3..];
        if !old.is_empty() && !new.is_empty() {
            return (old.to_string(), new.to_string());
        }
        end = pos;
    }

    (String::new(), String::new())
}

/// Extract the four range integers from a five-field hunk header
/// `@@ -<old_start>,<old_lines> +<new_start>,<new_lines> @@`.
///
/// Trailing context after the closing `@@` is ignored. Headers that omit a
/// count (`@@ -1 +1 @@`) or are otherwise malformed do not match and the
/// caller degrades all four fields to 0.
fn parse_hunk_ranges(header: &str) -> Option<(u32, u32, u32, u32)> {
    let rest = header.strip_prefix("@@ -")?;
    let (old_start, rest) = take_number(rest)?;
    let rest = rest.strip_prefix(',')?;
    let (old_lines, rest) = take_number(rest)?;
    let rest = rest.strip_prefix(" +")?;
    let (new_start, rest) = take_number(rest)?;
    let rest = rest.strip_prefix(',')?;
    let (new_lines, rest) = take_number(rest)?;
    rest.strip_prefix(" @@")?;

    Some((old_start, old_lines, new_start, new_lines))
}

/// Consume a leading run of ASCII digits and parse it.
fn take_number(s: &str) -> Option<(u32, &str)> {
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    let value = s[..end].parse().ok()?;
    Some((value, &s[end..]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE_DIFF: &str = "diff --git a/src/main.rs b/src/main.rs\n\
index abc123..def456 100644\n\
--- a/src/main.rs\n\
+++ b/src/main.rs\n\
@@ -1,5 +1,6 @@\n\
 fn main() {\n\
     println!(\"Hello\");\n\
+    println!(\"World\");\n\
 }\n\
diff --git a/src/lib.rs b/src/lib.rs\n\
index 111222..333444 100644\n\
--- a/src/lib.rs\n\
+++ b/src/lib.rs\n\
@@ -10,7 +10,6 @@\n\
 impl Foo {\n\
     fn bar(&self) {\n\
-        // old comment\n\
         self.do_thing();\n\
     }\n\
 }\n";

    #[test]
    fn test_parse_simple_diff() {
        let files = parse_unified_diff(SAMPLE_DIFF, DEFAULT_LARGE_FILE_LINE_THRESHOLD);

        assert_eq!(files.len(), 2);

        let first = &files[0];
        assert_eq!(first.old_path, "src/main.rs");
        assert_eq!(first.new_path, "src/main.rs");
        assert_eq!(first.change_type, ChangeType::Modified);
        assert_eq!(first.hunks.len(), 1);
        assert_eq!(first.additions(), 1);
        assert_eq!(first.deletions(), 0);

        let hunk = &first.hunks[0];
        assert_eq!(hunk.old_start, 1);
        assert_eq!(hunk.old_lines, 5);
        assert_eq!(hunk.new_start, 1);
        assert_eq!(hunk.new_lines, 6);
        assert!(hunk.content.starts_with("@@ -1,5 +1,6 @@\n"));
        assert!(hunk.content.contains("+    println!(\"World\");\n"));

        let second = &files[1];
        assert_eq!(second.new_path, "src/lib.rs");
        assert_eq!(second.additions(), 0);
        assert_eq!(second.deletions(), 1);
        // The second file's hunk never bleeds into the first
        assert!(!first.hunks[0].content.contains("impl Foo"));
    }

    #[test]
    fn test_parse_single_file_single_hunk() {
        let diff = "diff --git a/foo.txt b/foo.txt\n\
index e69de29..4b825dc 100644\n\
--- a/foo.txt\n\
+++ b/foo.txt\n\
@@ -0,0 +1,2 @@\n\
+hello\n\
+world\n";

        let files = parse_unified_diff(diff, DEFAULT_LARGE_FILE_LINE_THRESHOLD);
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].new_path, "foo.txt");
        assert_eq!(files[0].hunks.len(), 1);
        assert!(files[0].hunks[0].content.contains("+hello"));
    }

    #[test]
    fn test_zero_counts_round_trip() {
        // A brand-new empty range keeps its literal zeros
        let files = parse_unified_diff(
            "diff --git a/foo.txt b/foo.txt\n@@ -0,0 +1,2 @@\n+hello\n+world\n",
            DEFAULT_LARGE_FILE_LINE_THRESHOLD,
        );
        let hunk = &files[0].hunks[0];
        assert_eq!(
            (hunk.old_start, hunk.old_lines, hunk.new_start, hunk.new_lines),
            (0, 0, 1, 2)
        );
    }

    #[test]
    fn test_new_file_marker() {
        let diff = "diff --git a/new_file.rs b/new_file.rs\n\
new file mode 100644\n\
index 0000000..abc1234\n\
--- /dev/null\n\
+++ b/new_file.rs\n\
@@ -0,0 +1,3 @@\n\
+fn new_function() {\n\
+    todo!()\n\
+}\n";

        let files = parse_unified_diff(diff, DEFAULT_LARGE_FILE_LINE_THRESHOLD);
        assert_eq!(files[0].change_type, ChangeType::Added);
    }

    #[test]
    fn test_deleted_file_marker() {
        let diff = "diff --git a/old_file.rs b/old_file.rs\n\
deleted file mode 100644\n\
index abc1234..0000000\n\
--- a/old_file.rs\n\
+++ /dev/null\n\
@@ -1,3 +0,0 @@\n\
-fn old_function() {}\n";

        let files = parse_unified_diff(diff, DEFAULT_LARGE_FILE_LINE_THRESHOLD);
        assert_eq!(files[0].change_type, ChangeType::Deleted);
    }

    #[test]
    fn test_rename_markers_without_hunks() {
        let diff = "diff --git a/old_name.rs b/new_name.rs\n\
similarity index 100%\n\
rename from old_name.rs\n\
rename to new_name.rs\n";

        let files = parse_unified_diff(diff, DEFAULT_LARGE_FILE_LINE_THRESHOLD);
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].change_type, ChangeType::Renamed);
        assert_eq!(files[0].old_path, "old_name.rs");
        assert_eq!(files[0].new_path, "new_name.rs");
        assert!(files[0].hunks.is_empty());
        assert_eq!(files[0].display_name(), "old_name.rs → new_name.rs");
    }

    #[test]
    fn test_conflicting_markers_last_wins() {
        let diff = "diff --git a/f b/f\n\
new file mode 100644\n\
deleted file mode 100644\n\
@@ -1,1 +1,1 @@\n\
-x\n\
+y\n";

        let files = parse_unified_diff(diff, DEFAULT_LARGE_FILE_LINE_THRESHOLD);
        assert_eq!(files[0].change_type, ChangeType::Deleted);
    }

    #[test]
    fn test_no_file_headers_yields_empty() {
        assert!(parse_unified_diff("", DEFAULT_LARGE_FILE_LINE_THRESHOLD).is_empty());
        assert!(
            parse_unified_diff("just\nsome\ntext\n", DEFAULT_LARGE_FILE_LINE_THRESHOLD)
                .is_empty()
        );
    }

    #[test]
    fn test_garbage_between_files_is_skipped() {
        let diff = "From 1234 Mon Sep 17 00:00:00 2001\n\
Subject: [PATCH] tweak\n\
diff --git a/a.txt b/a.txt\n\
@@ -1,1 +1,1 @@\n\
-x\n\
+y\n\
some stray trailer\n";

        // Trailer lines after the last hunk belong to that hunk's content;
        // lines before the first header are dropped.
        let files = parse_unified_diff(diff, DEFAULT_LARGE_FILE_LINE_THRESHOLD);
        assert_eq!(files.len(), 1);
        assert!(files[0].hunks[0].content.contains("some stray trailer"));
    }

    #[test]
    fn test_malformed_file_header_degrades_to_empty_paths() {
        let diff = "diff --git weird header\n@@ -1,1 +1,1 @@\n-x\n+y\n";
        let files = parse_unified_diff(diff, DEFAULT_LARGE_FILE_LINE_THRESHOLD);
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].old_path, "");
        assert_eq!(files[0].new_path, "");
        assert_eq!(files[0].hunks.len(), 1);
    }

    #[test]
    fn test_malformed_hunk_header_degrades_to_zeros() {
        // Count-less form: not the five-field pattern, but still a hunk
        let diff = "diff --git a/a.txt b/a.txt\n@@ -1 +1 @@\n-x\n+y\n";
        let files = parse_unified_diff(diff, DEFAULT_LARGE_FILE_LINE_THRESHOLD);
        let hunk = &files[0].hunks[0];
        assert_eq!(
            (hunk.old_start, hunk.old_lines, hunk.new_start, hunk.new_lines),
            (0, 0, 0, 0)
        );
        assert!(hunk.content.starts_with("@@ -1 +1 @@\n"));
    }

    #[test]
    fn test_hunk_header_with_section_context() {
        let (a, b, c, d) = parse_hunk_ranges("@@ -10,7 +10,6 @@ impl Foo {").unwrap();
        assert_eq!((a, b, c, d), (10, 7, 10, 6));
    }

    #[test]
    fn test_file_header_with_space_in_path() {
        let (old, new) = split_file_header("diff --git a/my file.txt b/my file.txt");
        assert_eq!(old, "my file.txt");
        assert_eq!(new, "my file.txt");
    }

    #[test]
    fn test_mode_only_change_has_no_hunks() {
        let diff = "diff --git a/script.sh b/script.sh\n\
old mode 100644\n\
new mode 100755\n";

        let files = parse_unified_diff(diff, DEFAULT_LARGE_FILE_LINE_THRESHOLD);
        assert_eq!(files.len(), 1);
        assert!(files[0].hunks.is_empty());
        assert_eq!(files[0].change_type, ChangeType::Modified);
    }

    #[test]
    fn test_large_file_threshold_is_strict() {
        // The diff's trailing blank line is a body line of the last hunk, so
        // the counted segments are header, "-x", "+y", "", "": five in total.
        let diff = "diff --git a/a.txt b/a.txt\n@@ -1,2 +1,2 @@\n-x\n+y\n";
        assert_eq!(
            parse_unified_diff(diff, DEFAULT_LARGE_FILE_LINE_THRESHOLD)[0].total_hunk_lines(),
            5
        );

        let at_threshold = parse_unified_diff(diff, 5);
        assert!(!at_threshold[0].is_large);

        let below_threshold = parse_unified_diff(diff, 4);
        assert!(below_threshold[0].is_large);
    }

    #[test]
    fn test_classification_uses_new_path() {
        let diff = "diff --git a/package.json b/package.json\n\
@@ -1,1 +1,1 @@\n\
-{}\n\
+{\"name\":\"x\"}\n\
diff --git a/package-lock.json b/package-lock.json\n\
@@ -1,1 +1,1 @@\n\
-{}\n\
+{}\n";

        let files = parse_unified_diff(diff, DEFAULT_LARGE_FILE_LINE_THRESHOLD);
        assert!(files[0].is_important);
        assert!(!files[0].is_generated);
        assert!(files[1].is_generated);
        assert!(!files[1].is_important);
    }

    #[test]
    fn test_back_to_back_file_headers() {
        let diff = "diff --git a/a.txt b/a.txt\n\
diff --git a/b.txt b/b.txt\n\
@@ -1,1 +1,1 @@\n\
-x\n\
+y\n";

        let files = parse_unified_diff(diff, DEFAULT_LARGE_FILE_LINE_THRESHOLD);
        assert_eq!(files.len(), 2);
        assert!(files[0].hunks.is_empty());
        assert_eq!(files[1].hunks.len(), 1);
    }
}
