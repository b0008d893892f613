//! Issue listing and conversion to issueblog records.
//!
//! # Overview
//!
//! - [`FetchOptions`]: Label filter and page size for listing open issues
//! - [`issue_from_octocrab`]: Converts an octocrab issue into an [`Issue`]
//!
//! Pull requests stay in the listing and are only flagged via
//! [`Issue::is_pull_request`]; callers decide where they belong.
//!
//! # Example
//!
//! ```no_run
//! use issueblog_github::{FetchOptions, GitHubClient};
//!
//! # async fn example() -> issueblog_github::Result<()> {
//! let client = GitHubClient::new(None).await?;
//!
//! let options = FetchOptions::with_labels(["Top"]);
//! let pinned = client.list_issues("octocat", "blog", &options).await?;
//!
//! for issue in &pinned {
//!     println!("#{} {}", issue.number, issue.title);
//! }
//! # Ok(())
//! # }
//! ```

use issueblog_protocol::Issue;
use octocrab::params::State;
use tracing::{debug, instrument};

use crate::client::{GitHubClient, PAGE_SIZE};
use crate::error::{Error, Result};

/// Options for listing GitHub issues.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Filter by labels (issues must have ALL these labels).
    pub labels: Vec<String>,
    /// Issues per request (default: 100, max: 100). Every page is fetched.
    pub per_page: u8,
}

impl FetchOptions {
    /// Options listing open issues carrying all of `labels`.
    ///
    /// # Example
    ///
    /// ```
    /// use issueblog_github::FetchOptions;
    ///
    /// let options = FetchOptions::with_labels(["TODO"]);
    /// assert_eq!(options.labels, ["TODO"]);
    /// ```
    #[must_use]
    pub fn with_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Returns the effective per_page value, clamped between 1 and 100.
    ///
    /// If `per_page` is 0, returns the maximum of 100.
    #[must_use]
    pub fn effective_per_page(&self) -> u8 {
        match self.per_page {
            0 => PAGE_SIZE,
            n => n.min(PAGE_SIZE),
        }
    }
}

/// Converts an octocrab issue into an issueblog [`Issue`].
///
/// A missing body becomes an empty string.
#[must_use]
pub fn issue_from_octocrab(issue: octocrab::models::issues::Issue) -> Issue {
    Issue {
        number: issue.number,
        title: issue.title,
        body: issue.body.unwrap_or_default(),
        created_at: issue.created_at,
        updated_at: issue.updated_at,
        author: issue.user.login,
        labels: issue.labels.into_iter().map(|l| l.name).collect(),
        html_url: issue.html_url.to_string(),
        is_pull_request: issue.pull_request.is_some(),
        comment_count: issue.comments,
    }
}

impl GitHubClient {
    /// Lists every open issue of a repository matching `options`.
    ///
    /// Closed issues are never listed. Issues come back in the tracker's default order, newest first. All
    /// pages are followed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the repository does not exist, or
    /// [`Error::Api`] for transport and authentication failures.
    #[instrument(skip(self, options), fields(owner = %owner, repo = %repo))]
    pub async fn list_issues(
        &self,
        owner: &str,
        repo: &str,
        options: &FetchOptions,
    ) -> Result<Vec<Issue>> {
        debug!(
            labels = ?options.labels,
            per_page = options.effective_per_page(),
            "listing issues"
        );

        let resource = || format!("repository {owner}/{repo}");
        let issues_handler = self.inner().issues(owner, repo);
        let page = if options.labels.is_empty() {
            issues_handler
                .list()
                .state(State::Open)
                .per_page(options.effective_per_page())
                .send()
                .await
        } else {
            issues_handler
                .list()
                .state(State::Open)
                .per_page(options.effective_per_page())
                .labels(&options.labels)
                .send()
                .await
        }
        .map_err(|e| Error::from_api(e, resource))?;

        let issues: Vec<Issue> = self
            .inner()
            .all_pages(page)
            .await
            .map_err(|e| Error::from_api(e, resource))?
            .into_iter()
            .map(issue_from_octocrab)
            .collect();

        debug!(count = issues.len(), "listed issues");
        Ok(issues)
    }

    /// Fetches a single issue by number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no such issue exists.
    #[instrument(skip(self), fields(owner = %owner, repo = %repo))]
    pub async fn get_issue(&self, owner: &str, repo: &str, number: u64) -> Result<Issue> {
        let issue = self
            .inner()
            .issues(owner, repo)
            .get(number)
            .await
            .map_err(|e| Error::from_api(e, || format!("issue {owner}/{repo}#{number}")))?;

        Ok(issue_from_octocrab(issue))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_options_default() {
        let opts = FetchOptions::default();
        assert!(opts.labels.is_empty());
        assert_eq!(opts.per_page, 0);
    }

    #[test]
    fn fetch_options_effective_per_page_default() {
        let opts = FetchOptions::default();
        assert_eq!(opts.effective_per_page(), 100);
    }

    #[test]
    fn fetch_options_effective_per_page_custom() {
        let opts = FetchOptions {
            per_page: 50,
            ..Default::default()
        };
        assert_eq!(opts.effective_per_page(), 50);
    }

    #[test]
    fn fetch_options_effective_per_page_clamped() {
        let opts = FetchOptions {
            per_page: 200,
            ..Default::default()
        };
        assert_eq!(opts.effective_per_page(), 100);
    }

    #[test]
    fn fetch_options_with_labels() {
        let opts = FetchOptions::with_labels(vec!["Top".to_string(), "Rust".to_string()]);
        assert_eq!(opts.labels, ["Top", "Rust"]);
        assert_eq!(opts.per_page, 0);
    }

    /// Creates a minimal valid JSON document for an octocrab Issue.
    fn mock_issue_json(
        number: u64,
        title: &str,
        body: Option<&str>,
        user_login: &str,
        labels: &[&str],
        pull_request: bool,
    ) -> String {
        let body_json = match body {
            Some(b) => format!(r#""{b}""#),
            None => "null".to_string(),
        };

        let labels_json: Vec<String> = labels
            .iter()
            .enumerate()
            .map(|(i, name)| {
                format!(
                    r#"{{ "id": {}, "node_id": "L{}", "url": "https://api.github.com/labels/{}", "name": "{}", "color": "d73a4a", "default": false }}"#,
                    i + 1, i + 1, name, name
                )
            })
            .collect();

        let pull_request_json = if pull_request {
            format!(
                r#""pull_request": {{
                "url": "https://api.github.com/repos/octocat/blog/pulls/{number}",
                "html_url": "https://github.com/octocat/blog/pull/{number}",
                "diff_url": "https://github.com/octocat/blog/pull/{number}.diff",
                "patch_url": "https://github.com/octocat/blog/pull/{number}.patch"
            }},"#
            )
        } else {
            String::new()
        };

        format!(
            r#"{{
            "id": 1,
            "node_id": "I_test123",
            "url": "https://api.github.com/repos/octocat/blog/issues/{number}",
            "repository_url": "https://api.github.com/repos/octocat/blog",
            "labels_url": "https://api.github.com/repos/octocat/blog/issues/{number}/labels",
            "comments_url": "https://api.github.com/repos/octocat/blog/issues/{number}/comments",
            "events_url": "https://api.github.com/repos/octocat/blog/issues/{number}/events",
            "html_url": "https://github.com/octocat/blog/issues/{number}",
            "number": {number},
            "state": "open",
            "title": "{title}",
            "body": {body_json},
            "user": {{
                "login": "{user_login}",
                "id": 123,
                "node_id": "U_test123",
                "avatar_url": "https://avatars.githubusercontent.com/u/123",
                "gravatar_id": "",
                "url": "https://api.github.com/users/{user_login}",
                "html_url": "https://github.com/{user_login}",
                "followers_url": "https://api.github.com/users/{user_login}/followers",
                "following_url": "https://api.github.com/users/{user_login}/following{{/other_user}}",
                "gists_url": "https://api.github.com/users/{user_login}/gists{{/gist_id}}",
                "starred_url": "https://api.github.com/users/{user_login}/starred{{/owner}}{{/repo}}",
                "subscriptions_url": "https://api.github.com/users/{user_login}/subscriptions",
                "organizations_url": "https://api.github.com/users/{user_login}/orgs",
                "repos_url": "https://api.github.com/users/{user_login}/repos",
                "events_url": "https://api.github.com/users/{user_login}/events{{/privacy}}",
                "received_events_url": "https://api.github.com/users/{user_login}/received_events",
                "type": "User",
                "site_admin": false
            }},
            "labels": [{}],
            "assignees": [],
            "locked": false,
            {pull_request_json}
            "comments": 3,
            "created_at": "2024-01-15T10:30:00Z",
            "updated_at": "2024-01-20T14:45:00Z"
        }}"#,
            labels_json.join(", ")
        )
    }

    fn parse(json: &str) -> octocrab::models::issues::Issue {
        serde_json::from_str(json).expect("Failed to deserialize mock issue")
    }

    #[test]
    fn issue_from_octocrab_converts_all_fields() {
        let issue = issue_from_octocrab(parse(&mock_issue_json(
            42,
            "Hello world",
            Some("First post"),
            "octocat",
            &["Rust", "Top"],
            false,
        )));

        assert_eq!(issue.number, 42);
        assert_eq!(issue.title, "Hello world");
        assert_eq!(issue.body, "First post");
        assert_eq!(issue.author, "octocat");
        assert_eq!(issue.labels, ["Rust", "Top"]);
        assert_eq!(issue.html_url, "https://github.com/octocat/blog/issues/42");
        assert!(!issue.is_pull_request);
        assert_eq!(issue.comment_count, 3);
        assert_eq!(issue.created_at.to_rfc3339(), "2024-01-15T10:30:00+00:00");
        assert_eq!(issue.updated_at.to_rfc3339(), "2024-01-20T14:45:00+00:00");
    }

    #[test]
    fn issue_from_octocrab_handles_missing_body() {
        let issue = issue_from_octocrab(parse(&mock_issue_json(
            7, "Empty", None, "octocat", &[], false,
        )));
        assert_eq!(issue.body, "");
        assert!(issue.labels.is_empty());
    }

    #[test]
    fn issue_from_octocrab_flags_pull_requests() {
        let issue = issue_from_octocrab(parse(&mock_issue_json(
            8,
            "A pull request",
            Some("diff"),
            "octocat",
            &[],
            true,
        )));
        assert!(issue.is_pull_request);
    }
}
