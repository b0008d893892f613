//! Blog generation for issueblog.
//!
//! This crate turns the issues of a repository into a blog: it classifies
//! issues into index sections and renders the `README.md` index, the RSS
//! feed, Markdown backups and Zola posts.
//!
//! # Overview
//!
//! - [`classify`]: Sorts issues into pinned, recent, per-label, TODO and
//!   friend-link sections
//! - [`index`]: Renders the index page
//! - [`feed`]: Renders the RSS feed
//! - [`backup`]: Backup documents and the directory listing that tracks them
//! - [`post`]: Zola posts with TOML front-matter
//! - [`friends`]: Parses friend-link submissions
//! - [`pipeline`]: The index and posts runs, end to end
//!
//! Every tracker access goes through [`IssueSource`](issueblog_github::IssueSource),
//! so the whole crate can run against an in-memory tracker.
//!
//! # Example
//!
//! ```no_run
//! use chrono::Utc;
//! use issueblog_config::{Config, Repository};
//! use issueblog_github::GitHubClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GitHubClient::new(None).await?;
//! let config = Config::load()?;
//! let repo: Repository = "octocat/blog".parse()?;
//!
//! let report = issueblog_site::build_index(&client, &config, &repo, None, Utc::now()).await?;
//! println!("{} feed entries", report.feed_items);
//! # Ok(())
//! # }
//! ```

pub mod backup;
pub mod classify;
pub mod error;
pub mod feed;
pub mod friends;
pub mod index;
pub mod markdown;
pub mod pipeline;
pub mod post;
pub mod todo;
pub mod write;
pub mod xml;

#[cfg(test)]
mod test_utils;

pub use classify::{ClassifiedView, Classifier, LabelGroup};
pub use error::{Error, Result};
pub use feed::Feed;
pub use friends::FriendLink;
pub use index::{IndexHeader, render_index};
pub use pipeline::{IndexReport, PostsReport, build_index, generate_posts};
pub use todo::TodoChecklist;
