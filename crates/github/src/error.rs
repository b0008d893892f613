//! Error types for GitHub API operations.
//!
//! This module defines the error types that can occur while reading issues,
//! comments, labels and reactions from GitHub. None of them are retried here;
//! they propagate to the caller, which decides whether the run is aborted.

/// Errors that can occur during GitHub API operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An error occurred while calling the GitHub API (network, auth, decoding).
    #[error("GitHub API error: {0}")]
    Api(#[from] octocrab::Error),

    /// The requested repository, issue or comment does not exist.
    #[error("not found: {resource}")]
    NotFound {
        /// A description of what was looked up, e.g. `octocat/blog#12`.
        resource: String,
    },

    /// Token validation failed.
    ///
    /// This occurs when a provided token is invalid, expired, or lacks
    /// the necessary permissions.
    #[error("token validation failed: {reason}")]
    TokenValidation {
        /// A description of why validation failed.
        reason: String,
    },

    /// Rate limit exceeded.
    #[error("rate limit exceeded")]
    RateLimited,
}

impl Error {
    /// Maps an octocrab error to a more specific variant where the status
    /// code allows it.
    ///
    /// `resource` names what was being fetched and is only evaluated for
    /// 404 responses.
    pub(crate) fn from_api(err: octocrab::Error, resource: impl FnOnce() -> String) -> Self {
        match err {
            octocrab::Error::GitHub { source, .. } if source.status_code.as_u16() == 404 => {
                Self::NotFound {
                    resource: resource(),
                }
            }
            octocrab::Error::GitHub { source, .. }
                if matches!(source.status_code.as_u16(), 403 | 429)
                    && source.message.to_lowercase().contains("rate limit") =>
            {
                Self::RateLimited
            }
            other => Self::Api(other),
        }
    }

    /// Returns `true` if this error means the resource does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// A specialized Result type for GitHub API operations.
pub type Result<T> = std::result::Result<T, Error>;
