//! Configuration management for issueblog.
//!
//! This crate holds every tunable of the blog generator in one immutable
//! [`Config`] value: the reserved label sets, output locations, index
//! thresholds and the front-matter defaults of generated posts.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`labels`]: The reserved label sets (Top, TODO, Friends)
//! - [`output`]: Index, feed and post settings
//! - [`repository`]: The `owner/repo` identifier
//! - [`persistence`]: Config file discovery, reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. Command-line flags (applied by the binary on top of the loaded value)
//! 2. Local config (`./issueblog.json5` or `./issueblog.json`)
//! 3. User config (`~/.config/issueblog/config.json5` or `.json`)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```json5
//! {
//!   labels: { top: ["Top"], todo: ["TODO"], friends: ["Friends"] },
//!   index: { backup_dir: "BACKUP", anchor_threshold: 5, recent_limit: 10 },
//!   feed: { path: "feed.xml" },
//!   posts: { dir: "content/posts", lang: "zh-CN", toc: true },
//! }
//! ```
//!
//! ```no_run
//! use issueblog_config::Config;
//!
//! # fn example() -> issueblog_config::Result<()> {
//! let config = Config::load()?;
//! for label in config.labels.reserved() {
//!     println!("reserved: {label}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod labels;
pub mod output;
pub mod persistence;
pub mod repository;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use error::{ConfigError, Result};
pub use labels::LabelConfig;
pub use output::{FeedConfig, IndexConfig, PostsConfig};
pub use repository::Repository;
