//! Repository label listing.

use issueblog_protocol::Label;
use tracing::{debug, instrument};

use crate::client::GitHubClient;
use crate::error::Result;

impl GitHubClient {
    /// Lists all labels in a repository, following pagination.
    ///
    /// # Errors
    ///
    /// Returns an error if the API call fails (e.g., repository not found,
    /// rate limit exceeded).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use issueblog_github::GitHubClient;
    ///
    /// # async fn example() -> issueblog_github::Result<()> {
    /// let client = GitHubClient::new(None).await?;
    /// let labels = client.list_labels("octocat", "blog").await?;
    ///
    /// for label in &labels {
    ///     println!("{}: {}", label.name, label.description());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self), fields(owner = %owner, repo = %repo))]
    pub async fn list_labels(&self, owner: &str, repo: &str) -> Result<Vec<Label>> {
        debug!("listing labels");

        let path = format!("/repos/{owner}/{repo}/labels");
        let labels: Vec<Label> = self
            .get_all_pages(&path, || format!("repository {owner}/{repo}"))
            .await?;

        debug!(count = labels.len(), "listed labels");
        Ok(labels)
    }
}
