//! Issue, comment, and reaction records.
//!
//! These are immutable snapshots of tracker state, populated once by the
//! GitHub adapter and never sent back. Everything issueblog renders is a pure
//! function of these values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Anything with an author login that can be matched against the blog owner.
///
/// # Examples
///
/// ```
/// use issueblog_protocol::{Authored, Comment};
///
/// let comment = Comment::new(7, "octocat", "Addendum");
/// assert!(comment.is_mine("octocat"));
/// ```
pub trait Authored {
    /// Returns the login of the author.
    fn author(&self) -> &str;

    /// Returns `true` if the author login equals `me`.
    ///
    /// Labels, pull-request state and everything else are irrelevant here.
    fn is_mine(&self, me: &str) -> bool {
        self.author() == me
    }
}

/// A tracked issue, the source of truth for one blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// The issue number within its repository.
    pub number: u64,
    /// The issue title.
    pub title: String,
    /// The Markdown body; empty when the issue has no body.
    pub body: String,
    /// When the issue was opened.
    pub created_at: DateTime<Utc>,
    /// When the issue was last modified.
    pub updated_at: DateTime<Utc>,
    /// Login of the issue author.
    pub author: String,
    /// Names of the labels attached to the issue.
    pub labels: Vec<String>,
    /// Web URL of the issue.
    pub html_url: String,
    /// Whether this "issue" is actually a pull request.
    pub is_pull_request: bool,
    /// Number of comments on the issue.
    pub comment_count: u32,
}

impl Issue {
    /// Starts building an issue with the given number and title.
    ///
    /// Unset fields default to an empty body, no labels, the Unix epoch for
    /// both timestamps, and a `https://github.com/owner/repo/issues/{number}`
    /// URL. Mostly useful in tests and examples.
    ///
    /// # Examples
    ///
    /// ```
    /// use issueblog_protocol::Issue;
    ///
    /// let issue = Issue::builder(42, "Notes")
    ///     .body("- [ ] write more")
    ///     .labels(["Rust"])
    ///     .build();
    /// assert_eq!(issue.number, 42);
    /// assert!(issue.has_label("Rust"));
    /// ```
    #[must_use]
    pub fn builder(number: u64, title: impl Into<String>) -> IssueBuilder {
        IssueBuilder::new(number, title)
    }

    /// Returns `true` if the issue carries a label with the given name.
    #[must_use]
    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|l| l == name)
    }

    /// Returns `true` if the body is not empty. Whitespace counts as content.
    #[must_use]
    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }

    /// Returns the creation date as `YYYY-MM-DD`.
    #[must_use]
    pub fn created_date(&self) -> String {
        self.created_at.format("%Y-%m-%d").to_string()
    }
}

impl Authored for Issue {
    fn author(&self) -> &str {
        &self.author
    }
}

/// Builder for [`Issue`] values.
#[derive(Debug, Clone)]
pub struct IssueBuilder {
    issue: Issue,
}

impl IssueBuilder {
    fn new(number: u64, title: impl Into<String>) -> Self {
        let epoch = DateTime::<Utc>::UNIX_EPOCH;
        Self {
            issue: Issue {
                number,
                title: title.into(),
                body: String::new(),
                created_at: epoch,
                updated_at: epoch,
                author: String::new(),
                labels: Vec::new(),
                html_url: format!("https://github.com/owner/repo/issues/{number}"),
                is_pull_request: false,
                comment_count: 0,
            },
        }
    }

    /// Sets the body.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.issue.body = body.into();
        self
    }

    /// Sets the author login.
    #[must_use]
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.issue.author = author.into();
        self
    }

    /// Sets the creation time; the update time follows unless set later.
    #[must_use]
    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.issue.created_at = at;
        self.issue.updated_at = at;
        self
    }

    /// Sets the update time.
    #[must_use]
    pub fn updated_at(mut self, at: DateTime<Utc>) -> Self {
        self.issue.updated_at = at;
        self
    }

    /// Sets the label names.
    #[must_use]
    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.issue.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the web URL.
    #[must_use]
    pub fn html_url(mut self, url: impl Into<String>) -> Self {
        self.issue.html_url = url.into();
        self
    }

    /// Marks the issue as a pull request.
    #[must_use]
    pub fn pull_request(mut self, is_pull_request: bool) -> Self {
        self.issue.is_pull_request = is_pull_request;
        self
    }

    /// Sets the comment count.
    #[must_use]
    pub fn comment_count(mut self, count: u32) -> Self {
        self.issue.comment_count = count;
        self
    }

    /// Finishes the issue.
    #[must_use]
    pub fn build(self) -> Issue {
        self.issue
    }
}

/// A comment on an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// The comment id, used to look up reactions.
    pub id: u64,
    /// Login of the comment author.
    pub author: String,
    /// The Markdown body; empty when absent.
    pub body: String,
}

impl Comment {
    /// Creates a comment.
    #[must_use]
    pub fn new(id: u64, author: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            author: author.into(),
            body: body.into(),
        }
    }
}

impl Authored for Comment {
    fn author(&self) -> &str {
        &self.author
    }
}

/// The kind of an emoji reaction, as named by the GitHub API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReactionContent {
    /// `+1`
    ThumbsUp,
    /// `-1`
    ThumbsDown,
    Laugh,
    Confused,
    Heart,
    Hooray,
    Rocket,
    Eyes,
    /// A reaction kind this crate does not know about.
    Other(String),
}

impl ReactionContent {
    /// Returns the API name of the reaction.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::ThumbsUp => "+1",
            Self::ThumbsDown => "-1",
            Self::Laugh => "laugh",
            Self::Confused => "confused",
            Self::Heart => "heart",
            Self::Hooray => "hooray",
            Self::Rocket => "rocket",
            Self::Eyes => "eyes",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for ReactionContent {
    fn from(s: String) -> Self {
        match s.as_str() {
            "+1" => Self::ThumbsUp,
            "-1" => Self::ThumbsDown,
            "laugh" => Self::Laugh,
            "confused" => Self::Confused,
            "heart" => Self::Heart,
            "hooray" => Self::Hooray,
            "rocket" => Self::Rocket,
            "eyes" => Self::Eyes,
            _ => Self::Other(s),
        }
    }
}

impl From<ReactionContent> for String {
    fn from(content: ReactionContent) -> Self {
        content.as_str().to_string()
    }
}

/// An emoji reaction left by a user on a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    /// What kind of reaction this is.
    pub content: ReactionContent,
    /// Login of the user who reacted.
    pub user: String,
}

impl Reaction {
    /// Creates a reaction.
    #[must_use]
    pub fn new(content: ReactionContent, user: impl Into<String>) -> Self {
        Self {
            content,
            user: user.into(),
        }
    }

    /// Returns `true` if this is a heart left by `me`.
    #[must_use]
    pub fn is_heart_from(&self, me: &str) -> bool {
        self.content == ReactionContent::Heart && self.user == me
    }
}

/// Identity of the mirrored repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoInfo {
    /// `owner/name`.
    pub full_name: String,
    /// Login of the repository owner.
    pub owner: String,
    /// Web URL of the repository.
    pub html_url: String,
}

impl RepoInfo {
    /// Builds the identity of `owner/repo` on github.com.
    #[must_use]
    pub fn github(owner: &str, repo: &str) -> Self {
        Self {
            full_name: format!("{owner}/{repo}"),
            owner: owner.to_string(),
            html_url: format!("https://github.com/{owner}/{repo}"),
        }
    }
}
