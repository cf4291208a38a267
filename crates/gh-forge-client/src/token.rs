//! GitHub token resolution
//!
//! Tries multiple sources in order:
//! 1. `GITHUB_TOKEN` or `GH_TOKEN` environment variables
//! 2. `gh auth token` command

use anyhow::{Context, Result};
use log::debug;

/// Resolves a GitHub token for api.github.com
#[derive(Debug, Clone, Default)]
pub struct TokenResolver {
    /// Cached token from GITHUB_TOKEN/GH_TOKEN
    env_token: Option<String>,
}

impl TokenResolver {
    /// Create a new token resolver, snapshotting the environment
    pub fn new() -> Self {
        let env_token = std::env::var("GITHUB_TOKEN")
            .or_else(|_| std::env::var("GH_TOKEN"))
            .ok();

        Self { env_token }
    }

    /// Resolve a token
    ///
    /// # Token Resolution Order
    ///
    /// 1. `GITHUB_TOKEN` or `GH_TOKEN` env var
    /// 2. `gh auth token` command
    pub async fn get_token(&self) -> Result<String> {
        if let Some(ref token) = self.env_token {
            debug!("Using token from GITHUB_TOKEN/GH_TOKEN");
            return Ok(token.clone());
        }

        debug!("Trying gh auth token");
        let output = tokio::process::Command::new("gh")
            .args(["auth", "token"])
            .output()
            .await
            .context("Failed to run 'gh auth token'")?;

        if output.status.success() {
            let token = String::from_utf8(output.stdout)
                .context("Invalid UTF-8 in gh auth token output")?
                .trim()
                .to_string();
            if !token.is_empty() {
                debug!("Using token from gh CLI");
                return Ok(token);
            }
        }

        Err(anyhow::anyhow!(
            "No GitHub token found. Set GITHUB_TOKEN or run 'gh auth login'"
        ))
    }
}
