//! Repository discovery
//!
//! Locates the GitHub repository a working directory belongs to by reading
//! `.git/config` and parsing the `origin` remote URL. No git binary is
//! invoked; the config format is walked line by line.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while discovering the repository.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("no .git/config found under {0}")]
    MissingGitConfig(PathBuf),
    #[error("no \"origin\" remote configured")]
    MissingOrigin,
    #[error("unsupported remote url: {0}")]
    UnsupportedRemoteUrl(String),
}

/// A repository identified from a remote URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRepo {
    /// Forge host (e.g., "github.com")
    pub host: String,
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
}

/// Discover the repository for the given working directory.
///
/// Reads `<dir>/.git/config`, finds the `[remote "origin"]` url and parses
/// it into host/owner/repo.
pub fn discover_repository(dir: &Path) -> Result<RemoteRepo, RepoError> {
    let config_path = dir.join(".git").join("config");
    let content = fs::read_to_string(&config_path)
        .map_err(|_| RepoError::MissingGitConfig(dir.to_path_buf()))?;

    let url = find_origin_url(&content).ok_or(RepoError::MissingOrigin)?;
    parse_remote_url(&url)
}

/// Find the `url` entry of the `[remote "origin"]` section.
fn find_origin_url(config: &str) -> Option<String> {
    let mut in_origin = false;
    for line in config.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('[') {
            in_origin = trimmed == "[remote \"origin\"]";
            continue;
        }
        if !in_origin {
            continue;
        }
        if let Some(value) = trimmed.strip_prefix("url") {
            if let Some(url) = value.trim_start().strip_prefix('=') {
                return Some(url.trim().to_string());
            }
        }
    }
    None
}

/// Parse a remote URL into host/owner/repo.
///
/// Supports the two forms git writes for GitHub remotes:
/// - `git@github.com:owner/repo.git`
/// - `https://github.com/owner/repo.git` (and `http://`)
///
/// The `.git` suffix and trailing slashes are optional.
pub fn parse_remote_url(url: &str) -> Result<RemoteRepo, RepoError> {
    let unsupported = || RepoError::UnsupportedRemoteUrl(url.to_string());

    let (host, path) = if let Some(rest) = url.strip_prefix("git@") {
        rest.split_once(':').ok_or_else(unsupported)?
    } else if let Some(rest) = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
    {
        rest.split_once('/').ok_or_else(unsupported)?
    } else {
        return Err(unsupported());
    };

    let path = path.trim_end_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path);

    match path.split_once('/') {
        Some((owner, repo)) if !host.is_empty() && !owner.is_empty() && !repo.is_empty() => {
            Ok(RemoteRepo {
                host: host.to_string(),
                owner: owner.to_string(),
                repo: repo.to_string(),
            })
        }
        _ => Err(unsupported()),
    }
}
