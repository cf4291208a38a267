//! Heuristic file classification.
//!
//! Decides, from a path alone, whether a file is a manifest/build file a
//! reviewer should always see (`is_important`) and whether it looks like a
//! build artifact, lockfile, or binary blob (`is_generated`). Both checks are
//! literal string matching: no regex engine, no filesystem access.

/// Result of classifying a single path.
///
/// The two flags are independent: a path can be both important and generated.
/// Callers use `is_important` to force visibility regardless of
/// `is_generated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Path ends with a known manifest/build filename.
    pub is_important: bool,
    /// Path matches a generated/noise pattern.
    pub is_generated: bool,
}

/// Manifest and build files a reviewer should always see.
///
/// Matched by suffix-equality on the full path, so any path ending in one of
/// these literal filenames matches regardless of directory.
const IMPORTANT_FILES: &[&str] = &[
    "package.json",
    "requirements.txt",
    "pyproject.toml",
    ".env",
    "Dockerfile",
    "Makefile",
    "build.gradle",
    "pom.xml",
];

/// Suffixes signaling lockfiles, snapshots, compiled output, media, archives,
/// and OS cruft. Open for extension.
const GENERATED_SUFFIXES: &[&str] = &[
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    ".map",
    ".lock",
    ".snap",
    ".pb.go",
    ".class",
    ".dll",
    ".exe",
    ".bin",
    ".svg",
    ".png",
    ".jpg",
    ".jpeg",
    ".gif",
    ".webp",
    ".ico",
    ".pdf",
    ".zip",
    ".tar",
    ".gz",
    ".7z",
    ".dmg",
    ".app",
    ".jar",
    ".war",
    ".ear",
    ".iml",
    ".db",
    ".sqlite",
    ".bak",
    ".tmp",
    ".swp",
    ".swo",
    ".DS_Store",
    "Thumbs.db",
];

/// Infix markers for minified/bundled/generated output anywhere in the name.
const GENERATED_MARKERS: &[&str] = &[".min.", ".bundle.", ".generated."];

/// Directory names whose contents are build output or vendored trees.
const GENERATED_DIRS: &[&str] = &["dist", "build", "node_modules"];

/// Classify a file path.
///
/// Pure and total: any input string, including empty, yields a deterministic
/// result.
pub fn classify_path(path: &str) -> Classification {
    let is_important = IMPORTANT_FILES.iter().any(|name| path.ends_with(name));

    let is_generated = GENERATED_SUFFIXES.iter().any(|suffix| path.ends_with(suffix))
        || GENERATED_MARKERS.iter().any(|marker| path.contains(marker))
        || GENERATED_DIRS.iter().any(|dir| in_directory(path, dir));

    Classification {
        is_important,
        is_generated,
    }
}

/// True when `dir` appears as a directory component of `path`, i.e. at the
/// path start or after a `/`, with the final component excluded (a *file*
/// named `dist` is not build output).
fn in_directory(path: &str, dir: &str) -> bool {
    match path.rsplit_once('/') {
        Some((parents, _file)) => parents.split('/').any(|component| component == dir),
        None => false,
    }
}
