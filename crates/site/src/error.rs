//! Error types for blog generation.
//!
//! Tracker failures and filesystem failures both abort a run. Malformed
//! friend-link submissions and labels whose issues cannot be listed are not
//! errors at this level; they are logged and skipped where they occur.

use std::path::PathBuf;

/// Errors that abort blog generation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading from the issue tracker failed.
    #[error(transparent)]
    GitHub(#[from] issueblog_github::Error),

    /// An output directory could not be created or listed.
    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        /// The directory.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The front-matter of a post could not be serialized.
    #[error("failed to serialize post front-matter: {0}")]
    FrontMatter(#[from] toml::ser::Error),

    /// An output file could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        /// The file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// A specialized Result type for blog generation.
pub type Result<T> = std::result::Result<T, Error>;
