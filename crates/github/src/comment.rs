//! Issue comments and comment reactions.
//!
//! Comments are how authors append addenda to a post, and how visitors
//! submit friend links; reactions tell which submissions the blog owner
//! approved.

use issueblog_protocol::{Comment, Reaction, ReactionContent};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::client::GitHubClient;
use crate::error::Result;

/// The subset of a user object the blog needs.
#[derive(Debug, Deserialize)]
struct ApiUser {
    login: String,
}

/// A comment as returned by `/repos/{owner}/{repo}/issues/{number}/comments`.
#[derive(Debug, Deserialize)]
struct ApiComment {
    id: u64,
    #[serde(default)]
    body: Option<String>,
    user: Option<ApiUser>,
}

impl From<ApiComment> for Comment {
    fn from(c: ApiComment) -> Self {
        Comment {
            id: c.id,
            author: c.user.map(|u| u.login).unwrap_or_default(),
            body: c.body.unwrap_or_default(),
        }
    }
}

/// A reaction as returned by `/repos/{owner}/{repo}/issues/comments/{id}/reactions`.
#[derive(Debug, Deserialize)]
struct ApiReaction {
    content: ReactionContent,
    user: Option<ApiUser>,
}

impl From<ApiReaction> for Reaction {
    fn from(r: ApiReaction) -> Self {
        Reaction {
            content: r.content,
            user: r.user.map(|u| u.login).unwrap_or_default(),
        }
    }
}

impl GitHubClient {
    /// Lists the comments of an issue, oldest first.
    ///
    /// Comments from deleted accounts get an empty author.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`](crate::Error::NotFound) if the issue does
    /// not exist.
    #[instrument(skip(self), fields(owner = %owner, repo = %repo))]
    pub async fn list_comments(&self, owner: &str, repo: &str, number: u64) -> Result<Vec<Comment>> {
        let path = format!("/repos/{owner}/{repo}/issues/{number}/comments");
        let comments: Vec<ApiComment> = self
            .get_all_pages(&path, || format!("issue {owner}/{repo}#{number}"))
            .await?;

        debug!(count = comments.len(), "listed comments");
        Ok(comments.into_iter().map(Comment::from).collect())
    }

    /// Lists the reactions left on an issue comment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`](crate::Error::NotFound) if the comment
    /// does not exist.
    #[instrument(skip(self), fields(owner = %owner, repo = %repo))]
    pub async fn list_reactions(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
    ) -> Result<Vec<Reaction>> {
        let path = format!("/repos/{owner}/{repo}/issues/comments/{comment_id}/reactions");
        let reactions: Vec<ApiReaction> = self
            .get_all_pages(&path, || format!("comment {comment_id} in {owner}/{repo}"))
            .await?;

        debug!(count = reactions.len(), "listed reactions");
        Ok(reactions.into_iter().map(Reaction::from).collect())
    }
}
