//! Output locations and rendering knobs.
//!
//! - [`IndexConfig`]: the README index and the backup directory
//! - [`FeedConfig`]: the RSS feed
//! - [`PostsConfig`]: Zola posts and their front-matter `[extra]` options
//!
//! All three deserialize from partial objects; missing fields take the
//! defaults documented on each field.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Settings for the generated index page and issue backups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Where the index is written (default `README.md`).
    pub readme_path: PathBuf,

    /// Directory holding one backup document per issue (default `BACKUP`).
    pub backup_dir: PathBuf,

    /// Number of posts shown in a label section before the rest is folded
    /// into a "show more" block (default 5).
    pub anchor_threshold: usize,

    /// Number of posts listed under "recent" (default 10).
    pub recent_limit: usize,

    /// Branch the generated files are committed to; used to build raw
    /// content links (default `master`).
    pub branch: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            readme_path: PathBuf::from("README.md"),
            backup_dir: PathBuf::from("BACKUP"),
            anchor_threshold: 5,
            recent_limit: 10,
            branch: "master".to_string(),
        }
    }
}

impl IndexConfig {
    /// Validates thresholds and paths.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero threshold or limit,
    /// or an empty path or branch.
    pub fn validate(&self) -> Result<()> {
        if self.anchor_threshold == 0 {
            return Err(invalid("index.anchor_threshold", "must be at least 1"));
        }
        if self.recent_limit == 0 {
            return Err(invalid("index.recent_limit", "must be at least 1"));
        }
        if self.readme_path.as_os_str().is_empty() {
            return Err(invalid("index.readme_path", "cannot be empty"));
        }
        if self.backup_dir.as_os_str().is_empty() {
            return Err(invalid("index.backup_dir", "cannot be empty"));
        }
        if self.branch.trim().is_empty() {
            return Err(invalid("index.branch", "cannot be empty"));
        }
        Ok(())
    }
}

/// Settings for the RSS feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Where the feed is written (default `feed.xml`).
    pub path: PathBuf,

    /// Channel description.
    pub subtitle: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("feed.xml"),
            subtitle: "技术博客文章订阅".to_string(),
        }
    }
}

impl FeedConfig {
    /// Returns the feed's file name as it appears in raw content links.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "feed.xml".to_string())
    }

    /// Validates the feed path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the path has no file name.
    pub fn validate(&self) -> Result<()> {
        if self.path.file_name().is_none() {
            return Err(invalid("feed.path", "must name a file"));
        }
        Ok(())
    }
}

/// Settings for Zola posts.
///
/// The boolean fields are copied verbatim into the `[extra]` table of each
/// post's front-matter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostsConfig {
    /// Directory receiving the posts (default `content/posts`).
    pub dir: PathBuf,

    /// Maximum length of the front-matter description, in characters
    /// (default 100).
    pub description_length: usize,

    /// Maximum length of the title fragment in file names, in characters
    /// (default 50).
    pub slug_length: usize,

    /// Page language (default `zh-CN`).
    pub lang: String,
    /// Render a table of contents (default true).
    pub toc: bool,
    /// Enable the comment widget (default false).
    pub comment: bool,
    /// Show copy buttons on code blocks (default true).
    pub copy: bool,
    /// Enable math rendering (default false).
    pub math: bool,
    /// Enable mermaid diagrams (default false).
    pub mermaid: bool,
    /// Feature the post on the home page (default false).
    pub featured: bool,
    /// Show tags on the post (default true).
    pub display_tags: bool,
    /// Truncate the summary on listing pages (default false).
    pub truncate_summary: bool,
}

impl Default for PostsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("content/posts"),
            description_length: 100,
            slug_length: 50,
            lang: "zh-CN".to_string(),
            toc: true,
            comment: false,
            copy: true,
            math: false,
            mermaid: false,
            featured: false,
            display_tags: true,
            truncate_summary: false,
        }
    }
}

impl PostsConfig {
    /// Validates lengths and the output directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero slug length or an
    /// empty directory.
    pub fn validate(&self) -> Result<()> {
        if self.dir.as_os_str().is_empty() {
            return Err(invalid("posts.dir", "cannot be empty"));
        }
        if self.slug_length == 0 {
            return Err(invalid("posts.slug_length", "must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field,
        reason: reason.to_string(),
    }
}
