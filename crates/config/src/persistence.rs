//! Configuration file discovery and reading.
//!
//! Configuration files are JSON5 (comments and trailing commas allowed) or
//! plain JSON. They are searched in the following order:
//!
//! 1. Local: `./issueblog.json5` or `./issueblog.json`
//! 2. User: `~/.config/issueblog/config.json5` or `~/.config/issueblog/config.json`

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Configuration file names to search for in the working directory.
const CONFIG_FILE_NAMES: &[&str] = &["issueblog.json5", "issueblog.json"];

/// User config directory name.
const USER_CONFIG_DIR: &str = "issueblog";

/// File names to search for in the user config directory.
const USER_CONFIG_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Finds the configuration file, looking in the working directory and then
/// in the user's config directory.
///
/// # Examples
///
/// ```no_run
/// use issueblog_config::persistence::find_config_file;
///
/// if let Some(path) = find_config_file() {
///     println!("Found config at: {}", path.display());
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    find_config_file_in(Path::new("."), user_config_dir().ok().as_deref())
}

/// Searches `local_dir`, then `user_dir` if given, for a configuration file.
#[must_use]
pub fn find_config_file_in(local_dir: &Path, user_dir: Option<&Path>) -> Option<PathBuf> {
    let local = CONFIG_FILE_NAMES.iter().map(|name| local_dir.join(name));
    let user = user_dir
        .into_iter()
        .flat_map(|dir| USER_CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)));

    local.chain(user).find(|path| path.is_file())
}

/// Returns the user configuration directory, typically `~/.config/issueblog/`.
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDirectory`] if the platform config directory
/// cannot be determined.
pub fn user_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|d| d.join(USER_CONFIG_DIR))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Reads and parses a configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content cannot be
/// parsed into `T`.
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    // JSON5 parser handles both JSON5 and JSON
    serde_json5::from_str(&content).map_err(ConfigError::from)
}
