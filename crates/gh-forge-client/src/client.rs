//! Forge client trait
//!
//! Defines the interface the review pipeline uses to talk to a hosted Git
//! forge. Implementations can be direct (hitting the API) or decorated with
//! retry, rate limiting, etc.

use crate::types::PullRequest;
use async_trait::async_trait;

/// Forge API client trait
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use gh_forge_client::{ForgeClient, PullRequest};
///
/// async fn open_prs(client: &dyn ForgeClient) -> anyhow::Result<Vec<PullRequest>> {
///     client.fetch_pull_requests("rust-lang", "rust").await
/// }
/// ```
#[async_trait]
pub trait ForgeClient: Send + Sync {
    /// Fetch open pull requests for a repository
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner (user or organization)
    /// * `repo` - Repository name
    ///
    /// # Returns
    ///
    /// Open pull requests sorted by number (descending), or an error if the
    /// API call fails.
    async fn fetch_pull_requests(&self, owner: &str, repo: &str)
        -> anyhow::Result<Vec<PullRequest>>;

    /// Fetch a single pull request by number
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner
    /// * `repo` - Repository name
    /// * `pr_number` - Pull request number
    ///
    /// # Returns
    ///
    /// The pull request details, or an error if not found.
    async fn fetch_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
    ) -> anyhow::Result<PullRequest>;

    /// Fetch the raw unified diff text of a pull request
    ///
    /// This is the exact text the forge's diff media type returns; it is
    /// passed to the diff engine verbatim. Callers are responsible for
    /// noticing an empty diff before parsing it.
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner
    /// * `repo` - Repository name
    /// * `pr_number` - Pull request number
    ///
    /// # Returns
    ///
    /// The unified diff as one text buffer, or an error if the fetch fails.
    async fn fetch_pull_request_diff(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
    ) -> anyhow::Result<String>;
}
