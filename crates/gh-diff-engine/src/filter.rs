//! Review-relevance filtering of parsed file records.

use crate::model::FileChange;

/// Select the files a reviewer should see by default.
///
/// With `show_all` set the input is returned unchanged. Otherwise a file is
/// kept iff it is important, or it is neither generated nor large: importance
/// always overrides suppression, and in its absence either noise or bulk is
/// sufficient to suppress.
///
/// The result is an order-preserving subsequence of the input: no reordering,
/// no deduplication.
pub fn filter_relevant_files(files: Vec<FileChange>, show_all: bool) -> Vec<FileChange> {
    if show_all {
        return files;
    }

    files
        .into_iter()
        .filter(|file| file.is_important || (!file.is_generated && !file.is_large))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ChangeType;

    fn file(name: &str, important: bool, generated: bool, large: bool) -> FileChange {
        FileChange {
            old_path: name.to_string(),
            new_path: name.to_string(),
            change_type: ChangeType::Modified,
            hunks: Vec::new(),
            is_important: important,
            is_generated: generated,
            is_large: large,
        }
    }

    #[test]
    fn test_keeps_important_and_plain_files() {
        let files = vec![
            file("plain", false, false, false),
            file("noise", false, true, false),
            file("manifest", true, false, false),
            file("bulk", false, false, true),
        ];

        let kept = filter_relevant_files(files, false);
        let names: Vec<&str> = kept.iter().map(|f| f.new_path.as_str()).collect();
        assert_eq!(names, ["plain", "manifest"]);
    }

    #[test]
    fn test_importance_overrides_suppression() {
        let files = vec![file("big-manifest", true, true, true)];
        assert_eq!(filter_relevant_files(files, false).len(), 1);
    }

    #[test]
    fn test_show_all_is_identity() {
        let files = vec![
            file("noise", false, true, false),
            file("bulk", false, false, true),
        ];
        let all = filter_relevant_files(files.clone(), true);
        assert_eq!(all, files);
    }

    #[test]
    fn test_idempotent() {
        let files = vec![
            file("plain", false, false, false),
            file("noise", false, true, false),
            file("manifest", true, false, false),
        ];
        let once = filter_relevant_files(files, false);
        let twice = filter_relevant_files(once.clone(), false);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_order_preserving_subsequence() {
        let files: Vec<FileChange> = (0..6)
            .map(|i| file(&format!("f{i}"), false, i % 2 == 0, false))
            .collect();

        let kept = filter_relevant_files(files.clone(), false);
        // Every kept element appears in the input, in the same relative order
        let mut input_iter = files.iter();
        for kept_file in &kept {
            assert!(input_iter.any(|f| f == kept_file));
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(filter_relevant_files(Vec::new(), false).is_empty());
        assert!(filter_relevant_files(Vec::new(), true).is_empty());
    }
}
