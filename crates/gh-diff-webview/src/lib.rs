//! # gh-diff-webview
//!
//! Renders filtered [`FileChange`] records into a single self-contained HTML
//! review page: a file list on the left with classification badges, the
//! selected file's colorized hunks on the right.
//!
//! This crate is pure string building over the diff model: no I/O, no
//! templates, no network. The caller decides where the document goes (a file
//! on disk, an editor webview, an HTTP response).
//!
//! Line colorization keys off the `+`/`-` prefixes preserved verbatim in hunk
//! content; `+++`/`---` file markers are rendered as context.

use gh_diff_engine::FileChange;

const STYLE: &str = r#"<style>
  body { font-family: 'Segoe UI', Arial, sans-serif; margin: 0; background: #f6f8fa; }
  .file-list { width: 280px; background: #fff; border-right: 1px solid #e1e4e8; height: 100vh; overflow-y: auto; float: left; }
  .file-entry { padding: 8px 16px; border-bottom: 1px solid #eee; cursor: pointer; }
  .file-entry.selected { background: #eaf5ff; font-weight: bold; }
  .change-char { display: inline-block; width: 1em; color: #6a737d; font-family: monospace; }
  .diff-view { margin-left: 280px; padding: 24px; }
  .diff-hunk { margin-bottom: 24px; }
  .diff-header { color: #6a737d; font-size: 13px; margin-bottom: 4px; }
  .diff-line { font-family: 'Fira Mono', 'Consolas', monospace; font-size: 13px; white-space: pre; }
  .diff-add { background: #e6ffed; color: #22863a; }
  .diff-del { background: #ffeef0; color: #b31d28; }
  .diff-context { background: #fafbfc; color: #24292e; }
  .stat-add { color: #22863a; }
  .stat-del { color: #b31d28; }
  .badge { display: inline-block; padding: 0 6px; font-size: 11px; border-radius: 3px; margin-left: 6px; background: #eee; color: #555; }
</style>"#;

/// Render a complete HTML review page for the given files.
///
/// `title` becomes the document title and top heading (e.g.,
/// `"PR #42: Fix the frobnicator"`). Files are rendered in the order given;
/// the first file is selected on load.
pub fn render_review_page(files: &[FileChange], title: &str) -> String {
    let file_list: String = files
        .iter()
        .enumerate()
        .map(|(idx, file)| render_file_entry(idx, file))
        .collect();

    let diffs: Vec<String> = files.iter().map(render_file_diff).collect();
    let diffs_json = embed_json(&serde_json::to_string(&diffs).unwrap_or_else(|_| "[]".into()));

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  {STYLE}
</head>
<body>
  <div class="file-list">{file_list}</div>
  <div class="diff-view"><div id="diff-content"></div></div>
  <script>
    const diffs = {diffs_json};
    function selectFile(idx) {{
      document.querySelectorAll('.file-entry').forEach((el, i) => {{
        el.classList.toggle('selected', i === idx);
      }});
      document.getElementById('diff-content').innerHTML = diffs[idx] || '';
    }}
    window.onload = () => selectFile(0);
  </script>
</body>
</html>
"#,
        title = escape_html(title),
        STYLE = STYLE,
        file_list = file_list,
        diffs_json = diffs_json,
    )
}

/// One entry in the file list: change-type character, display name, badges.
fn render_file_entry(idx: usize, file: &FileChange) -> String {
    let mut badges = String::new();
    if file.is_important {
        badges.push_str("<span class=\"badge\">Important</span>");
    }
    if file.is_large {
        badges.push_str("<span class=\"badge\">Large</span>");
    }
    if file.is_generated {
        badges.push_str("<span class=\"badge\">Generated</span>");
    }

    format!(
        "<div class=\"file-entry\" onclick=\"selectFile({idx})\">\
         <span class=\"change-char\">{change}</span>{name}{badges}</div>",
        change = file.change_type.as_char(),
        name = escape_html(&file.display_name()),
    )
}

/// The right-hand pane for one file: heading with stats, then each hunk.
fn render_file_diff(file: &FileChange) -> String {
    let hunks: String = file
        .hunks
        .iter()
        .map(|hunk| {
            let mut lines = hunk.content.split('\n');
            let header = lines.next().unwrap_or_default();
            let body: String = lines.map(render_diff_line).collect();
            format!(
                "<div class=\"diff-hunk\"><div class=\"diff-header\">{}</div>{}</div>",
                escape_html(header),
                body
            )
        })
        .collect();

    format!(
        "<div><h2>{name} <span class=\"badge\">{change}</span> \
         <span class=\"stat-add\">+{adds}</span> <span class=\"stat-del\">\u{2212}{dels}</span></h2>{hunks}</div>",
        name = escape_html(&file.display_name()),
        change = file.change_type.label(),
        adds = file.additions(),
        dels = file.deletions(),
    )
}

fn render_diff_line(line: &str) -> String {
    let class = if line.starts_with('+') && !line.starts_with("+++") {
        "diff-add"
    } else if line.starts_with('-') && !line.starts_with("---") {
        "diff-del"
    } else {
        "diff-context"
    };
    format!(
        "<div class=\"diff-line {}\">{}</div>",
        class,
        escape_html(line)
    )
}

/// Escape text for interpolation into HTML.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Make a JSON string safe for embedding inside a `<script>` element.
fn embed_json(json: &str) -> String {
    json.replace("</", "<\\/")
}
