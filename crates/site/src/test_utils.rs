//! Test utilities for the site crate.
//!
//! [`FakeSource`] is an in-memory [`IssueSource`] assembled with builder
//! calls, so classifier and pipeline tests run without a network.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, TimeZone, Utc};
use issueblog_github::{Error, FetchOptions, IssueSource, Result};
use issueblog_protocol::{Comment, Issue, Label, Reaction, RepoInfo};

/// Midnight UTC on the given day of January 2024.
pub(crate) fn at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap()
}

/// Parses the `+++` block at the top of a rendered post.
pub(crate) fn front_matter(post: &str) -> toml::Table {
    let rest = post.strip_prefix("+++\n").unwrap();
    let (front, _) = rest.split_once("+++\n").unwrap();
    toml::from_str(front).unwrap()
}

/// An issue tracker held in memory.
///
/// Issues are listed in insertion order, so tests insert them newest first
/// like the real tracker returns them.
#[derive(Debug, Default)]
pub(crate) struct FakeSource {
    me: String,
    issues: Vec<Issue>,
    labels: Vec<Label>,
    comments: HashMap<u64, Vec<Comment>>,
    reactions: HashMap<u64, Vec<Reaction>>,
    failing_labels: HashSet<String>,
    fail_labels: bool,
}

impl FakeSource {
    pub(crate) fn new(me: &str) -> Self {
        Self {
            me: me.to_string(),
            ..Self::default()
        }
    }

    pub(crate) fn issue(mut self, issue: Issue) -> Self {
        self.issues.push(issue);
        self
    }

    pub(crate) fn label(mut self, name: &str, description: Option<&str>) -> Self {
        self.labels.push(Label::new(name, description));
        self
    }

    pub(crate) fn comment(mut self, issue: u64, comment: Comment) -> Self {
        self.comments.entry(issue).or_default().push(comment);
        self
    }

    pub(crate) fn reaction(mut self, comment_id: u64, reaction: Reaction) -> Self {
        self.reactions.entry(comment_id).or_default().push(reaction);
        self
    }

    /// Listing issues filtered by `name` fails.
    pub(crate) fn failing_label(mut self, name: &str) -> Self {
        self.failing_labels.insert(name.to_string());
        self
    }

    /// Listing the repository's labels fails.
    pub(crate) fn fail_labels(mut self) -> Self {
        self.fail_labels = true;
        self
    }
}

fn not_found(resource: String) -> Error {
    Error::NotFound { resource }
}

impl IssueSource for FakeSource {
    async fn current_user(&self) -> Result<String> {
        Ok(self.me.clone())
    }

    async fn repository(&self, owner: &str, repo: &str) -> Result<RepoInfo> {
        Ok(RepoInfo::github(owner, repo))
    }

    async fn list_issues(
        &self,
        _owner: &str,
        _repo: &str,
        options: &FetchOptions,
    ) -> Result<Vec<Issue>> {
        if let Some(bad) = options.labels.iter().find(|l| self.failing_labels.contains(*l)) {
            return Err(not_found(format!("label {bad}")));
        }
        Ok(self
            .issues
            .iter()
            .filter(|i| options.labels.iter().all(|l| i.has_label(l)))
            .cloned()
            .collect())
    }

    async fn get_issue(&self, owner: &str, repo: &str, number: u64) -> Result<Issue> {
        self.issues
            .iter()
            .find(|i| i.number == number)
            .cloned()
            .ok_or_else(|| not_found(format!("issue {owner}/{repo}#{number}")))
    }

    async fn list_comments(&self, _owner: &str, _repo: &str, number: u64) -> Result<Vec<Comment>> {
        Ok(self.comments.get(&number).cloned().unwrap_or_default())
    }

    async fn list_labels(&self, owner: &str, repo: &str) -> Result<Vec<Label>> {
        if self.fail_labels {
            return Err(not_found(format!("labels of {owner}/{repo}")));
        }
        Ok(self.labels.clone())
    }

    async fn list_reactions(
        &self,
        _owner: &str,
        _repo: &str,
        comment_id: u64,
    ) -> Result<Vec<Reaction>> {
        Ok(self.reactions.get(&comment_id).cloned().unwrap_or_default())
    }
}
