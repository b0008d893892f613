//! GitHub API adapter for issueblog.
//!
//! This crate reads everything the blog generator needs from GitHub:
//! issues, their comments and comment reactions, repository labels, and the
//! identity behind the access token. It never writes to the tracker.
//!
//! # Overview
//!
//! The crate provides:
//!
//! - [`GitHubClient`]: The octocrab-backed API client
//! - [`IssueSource`]: The read-only tracker interface the generator is
//!   written against
//! - [`FetchOptions`]: Options for filtering issues
//! - [`Error`]: Error types for GitHub API operations
//!
//! Pagination is followed for every list call; retries and backoff are left
//! to the HTTP layer.
//!
//! # Authentication
//!
//! Tokens are handled using [`secrecy::SecretString`] to prevent
//! accidental logging of sensitive credentials.
//!
//! # Examples
//!
//! ```no_run
//! use secrecy::SecretString;
//! use issueblog_github::{FetchOptions, GitHubClient, IssueSource};
//!
//! # async fn example() -> issueblog_github::Result<()> {
//! let token = SecretString::from("ghp_your_token_here".to_string());
//! let client = GitHubClient::new(Some(token)).await?;
//!
//! let me = client.current_user().await?;
//! let issues = client
//!     .list_issues("octocat", "blog", &FetchOptions::default())
//!     .await?;
//! let mine = issues.iter().filter(|i| i.author == me).count();
//! println!("{mine} of {} issues are mine", issues.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod comment;
pub mod error;
pub mod issue;
pub mod label;
pub mod source;

pub use client::GitHubClient;
pub use error::{Error, Result};
pub use issue::{FetchOptions, issue_from_octocrab};
pub use source::IssueSource;
