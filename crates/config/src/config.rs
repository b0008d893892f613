//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates every
//! setting the generator needs. A `Config` is built once at startup and
//! passed by reference to each component; nothing reads settings from
//! globals.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::labels::LabelConfig;
use crate::output::{FeedConfig, IndexConfig, PostsConfig};
use crate::persistence::{find_config_file, read_config_file};

/// The main configuration struct for issueblog.
///
/// # Examples
///
/// ```
/// use issueblog_config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.index.recent_limit, 10);
/// assert_eq!(config.labels.top, ["Top"]);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Reserved label sets.
    #[serde(default)]
    pub labels: LabelConfig,

    /// Index page and backup settings.
    #[serde(default)]
    pub index: IndexConfig,

    /// RSS feed settings.
    #[serde(default)]
    pub feed: FeedConfig,

    /// Zola post settings.
    #[serde(default)]
    pub posts: PostsConfig,
}

impl Config {
    /// Loads configuration from the default file locations.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./issueblog.json5` or `./issueblog.json`
    /// 2. User: `~/.config/issueblog/config.json5` or `~/.config/issueblog/config.json`
    ///
    /// If no configuration file is found, returns a default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed, or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use issueblog_config::Config;
    ///
    /// # fn example() -> issueblog_config::Result<()> {
    /// let config = Config::load()?;
    /// println!("Backups go to {}", config.index.backup_dir.display());
    /// # Ok(())
    /// # }
    /// ```
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates every section of the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first validation error found.
    ///
    /// # Examples
    ///
    /// ```
    /// use issueblog_config::Config;
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.index.anchor_threshold = 0;
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.labels.validate()?;
        self.index.validate()?;
        self.feed.validate()?;
        self.posts.validate()?;
        Ok(())
    }
}
