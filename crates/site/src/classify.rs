//! Issue classification.
//!
//! The [`Classifier`] queries an [`IssueSource`] and sorts the repository's
//! issues into the sections of the index page: pinned posts, recent posts,
//! one group per ordinary label, TODO checklists and friend links.
//!
//! Each query goes to the tracker on its own; nothing is cached between
//! them, so an issue can legitimately show up in several sections.

use issueblog_config::{Config, Repository};
use issueblog_github::{FetchOptions, IssueSource};
use issueblog_protocol::{Authored, Issue, Label, sort_for_index};
use tracing::{debug, instrument, warn};

use crate::error::Result;
use crate::friends::FriendLink;

/// The issues of one ordinary label, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelGroup {
    /// The label.
    pub label: Label,
    /// Self-authored issues carrying the label.
    pub issues: Vec<Issue>,
}

/// Everything the index page is rendered from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedView {
    /// Pinned posts.
    pub top: Vec<Issue>,
    /// Latest posts, pull requests excluded.
    pub recent: Vec<Issue>,
    /// One group per non-reserved label, in index order.
    pub label_groups: Vec<LabelGroup>,
    /// Checklist issues.
    pub todo: Vec<Issue>,
    /// Approved friend links; `None` when the repository has no friends issue.
    pub friends: Option<Vec<FriendLink>>,
}

/// Sorts issues of `repo` into index sections on behalf of `me`.
#[derive(Debug)]
pub struct Classifier<'a, S> {
    source: &'a S,
    repo: &'a Repository,
    me: &'a str,
    config: &'a Config,
}

impl<'a, S: IssueSource> Classifier<'a, S> {
    /// Creates a classifier reading from `source`.
    #[must_use]
    pub fn new(source: &'a S, repo: &'a Repository, me: &'a str, config: &'a Config) -> Self {
        Self {
            source,
            repo,
            me,
            config,
        }
    }

    async fn issues_labelled(&self, labels: &[String]) -> Result<Vec<Issue>> {
        let options = FetchOptions::with_labels(labels.iter().cloned());
        Ok(self
            .source
            .list_issues(self.repo.owner(), self.repo.repo(), &options)
            .await?)
    }

    fn mine(&self, issues: Vec<Issue>) -> Vec<Issue> {
        issues.into_iter().filter(|i| i.is_mine(self.me)).collect()
    }

    /// Self-authored issues carrying every top label.
    ///
    /// # Errors
    ///
    /// Fails if the tracker cannot be queried.
    pub async fn top_issues(&self) -> Result<Vec<Issue>> {
        let issues = self.issues_labelled(&self.config.labels.top).await?;
        Ok(self.mine(issues))
    }

    /// Self-authored issues carrying every TODO label.
    ///
    /// # Errors
    ///
    /// Fails if the tracker cannot be queried.
    pub async fn todo_issues(&self) -> Result<Vec<Issue>> {
        let issues = self.issues_labelled(&self.config.labels.todo).await?;
        Ok(self.mine(issues))
    }

    /// Issues carrying every friends label, whoever opened them.
    ///
    /// # Errors
    ///
    /// Fails if the tracker cannot be queried.
    pub async fn friend_issues(&self) -> Result<Vec<Issue>> {
        self.issues_labelled(&self.config.labels.friends).await
    }

    /// One group per non-reserved label that has self-authored issues.
    ///
    /// Labels are visited in index order. A label whose issues cannot be
    /// listed is skipped with a warning.
    ///
    /// # Errors
    ///
    /// Fails if the label list itself cannot be fetched.
    #[instrument(skip(self), fields(repo = %self.repo))]
    pub async fn label_groups(&self) -> Result<Vec<LabelGroup>> {
        let mut labels = self
            .source
            .list_labels(self.repo.owner(), self.repo.repo())
            .await?;
        sort_for_index(&mut labels);

        let reserved = self.config.labels.reserved();
        let mut groups = Vec::new();
        for label in labels {
            if label.is_reserved(&reserved) {
                continue;
            }

            let issues = match self.issues_labelled(std::slice::from_ref(&label.name)).await {
                Ok(issues) => issues,
                Err(e) => {
                    warn!(label = %label.name, error = %e, "skipping label");
                    continue;
                }
            };

            let mut issues = self.mine(issues);
            if issues.is_empty() {
                debug!(label = %label.name, "no posts under label");
                continue;
            }
            issues.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            groups.push(LabelGroup { label, issues });
        }
        Ok(groups)
    }

    /// The newest self-authored issues, pull requests excluded, at most
    /// `index.recent_limit` of them.
    ///
    /// # Errors
    ///
    /// Fails if the tracker cannot be queried.
    pub async fn recent_issues(&self) -> Result<Vec<Issue>> {
        let issues = self
            .source
            .list_issues(self.repo.owner(), self.repo.repo(), &FetchOptions::default())
            .await?;
        Ok(issues
            .into_iter()
            .filter(|i| i.is_mine(self.me) && !i.is_pull_request)
            .take(self.config.index.recent_limit)
            .collect())
    }

    /// Friend links approved by the owner.
    ///
    /// A comment on one of `friend_issues` counts as approved when the owner
    /// reacted to it with a heart. An approved comment without any recognized
    /// field still gets an (empty) row.
    ///
    /// # Errors
    ///
    /// Fails if comments or reactions cannot be listed.
    #[instrument(skip_all, fields(repo = %self.repo))]
    pub async fn friend_links(&self, friend_issues: &[Issue]) -> Result<Vec<FriendLink>> {
        let (owner, repo) = (self.repo.owner(), self.repo.repo());
        let mut links = Vec::new();

        for issue in friend_issues {
            for comment in self.source.list_comments(owner, repo, issue.number).await? {
                let reactions = self.source.list_reactions(owner, repo, comment.id).await?;
                if !reactions.iter().any(|r| r.is_heart_from(self.me)) {
                    continue;
                }
                let link = FriendLink::parse(&comment.body);
                if link == FriendLink::default() {
                    debug!(issue = issue.number, comment = comment.id, "friend link has no fields");
                }
                links.push(link);
            }
        }
        Ok(links)
    }

    /// Runs every query and assembles the index view.
    ///
    /// # Errors
    ///
    /// Fails on the first tracker error that is not recovered locally.
    pub async fn classify(&self) -> Result<ClassifiedView> {
        let top = self.top_issues().await?;
        let recent = self.recent_issues().await?;
        let label_groups = self.label_groups().await?;
        let todo = self.todo_issues().await?;

        let friend_issues = self.friend_issues().await?;
        let friends = if friend_issues.is_empty() {
            None
        } else {
            Some(self.friend_links(&friend_issues).await?)
        };

        debug!(
            top = top.len(),
            recent = recent.len(),
            labels = label_groups.len(),
            todo = todo.len(),
            "classified issues"
        );
        Ok(ClassifiedView {
            top,
            recent,
            label_groups,
            todo,
            friends,
        })
    }
}
