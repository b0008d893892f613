//! The read-only view of an issue tracker that blog generation depends on.
//!
//! [`IssueSource`] is implemented by [`GitHubClient`]; tests substitute an
//! in-memory implementation.

use issueblog_protocol::{Comment, Issue, Label, Reaction, RepoInfo};

use crate::client::GitHubClient;
use crate::error::Result;
use crate::issue::FetchOptions;

/// Everything issueblog reads from an issue tracker.
///
/// Calls are awaited one after the other; implementations need not be
/// `Send` or reentrant.
#[allow(async_fn_in_trait)]
pub trait IssueSource {
    /// Login of the authenticated user.
    async fn current_user(&self) -> Result<String>;

    /// Identity of `owner/repo`.
    async fn repository(&self, owner: &str, repo: &str) -> Result<RepoInfo>;

    /// Issues matching `options`, newest first.
    async fn list_issues(&self, owner: &str, repo: &str, options: &FetchOptions)
    -> Result<Vec<Issue>>;

    /// A single issue by number.
    async fn get_issue(&self, owner: &str, repo: &str, number: u64) -> Result<Issue>;

    /// Comments of an issue, oldest first.
    async fn list_comments(&self, owner: &str, repo: &str, number: u64) -> Result<Vec<Comment>>;

    /// All labels of the repository.
    async fn list_labels(&self, owner: &str, repo: &str) -> Result<Vec<Label>>;

    /// Reactions on a comment.
    async fn list_reactions(&self, owner: &str, repo: &str, comment_id: u64)
    -> Result<Vec<Reaction>>;
}

impl IssueSource for GitHubClient {
    async fn current_user(&self) -> Result<String> {
        GitHubClient::current_user(self).await
    }

    async fn repository(&self, owner: &str, repo: &str) -> Result<RepoInfo> {
        GitHubClient::repository(self, owner, repo).await
    }

    async fn list_issues(
        &self,
        owner: &str,
        repo: &str,
        options: &FetchOptions,
    ) -> Result<Vec<Issue>> {
        GitHubClient::list_issues(self, owner, repo, options).await
    }

    async fn get_issue(&self, owner: &str, repo: &str, number: u64) -> Result<Issue> {
        GitHubClient::get_issue(self, owner, repo, number).await
    }

    async fn list_comments(&self, owner: &str, repo: &str, number: u64) -> Result<Vec<Comment>> {
        GitHubClient::list_comments(self, owner, repo, number).await
    }

    async fn list_labels(&self, owner: &str, repo: &str) -> Result<Vec<Label>> {
        GitHubClient::list_labels(self, owner, repo).await
    }

    async fn list_reactions(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
    ) -> Result<Vec<Reaction>> {
        GitHubClient::list_reactions(self, owner, repo, comment_id).await
    }
}
