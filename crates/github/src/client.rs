//! GitHub API client implementation.
//!
//! This module provides the [`GitHubClient`] struct for reading from the
//! GitHub API, supporting both authenticated and unauthenticated access.

use issueblog_protocol::RepoInfo;
use octocrab::Octocrab;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::error::{Error, Result};

/// Page size used when following paginated endpoints.
pub(crate) const PAGE_SIZE: u8 = 100;

/// GitHub API client with optional authentication.
///
/// Authenticated clients have higher rate limits (5,000 req/hour vs 60 req/hour)
/// and can read private repositories. Blog generation needs the token anyway
/// to resolve the current user.
///
/// # Security
///
/// Tokens are stored using [`SecretString`] to prevent accidental logging
/// or exposure in debug output.
///
/// # Examples
///
/// ```no_run
/// use secrecy::SecretString;
/// use issueblog_github::GitHubClient;
///
/// # async fn example() -> issueblog_github::Result<()> {
/// let token = SecretString::from("ghp_your_token".to_string());
/// let client = GitHubClient::new(Some(token)).await?;
///
/// let me = client.current_user().await?;
/// println!("Generating the blog of {me}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct GitHubClient {
    /// The underlying octocrab client.
    inner: Octocrab,
    /// Whether this client is authenticated.
    authenticated: bool,
}

impl GitHubClient {
    /// Creates a new GitHub client.
    ///
    /// # Arguments
    ///
    /// * `token` - Optional GitHub personal access token. If `None`, the client
    ///   is unauthenticated and [`current_user`](Self::current_user) will fail.
    ///
    /// # Errors
    ///
    /// Returns an error if the octocrab client fails to initialize.
    #[instrument(skip(token), fields(authenticated = token.is_some()))]
    pub async fn new(token: Option<SecretString>) -> Result<Self> {
        let (inner, authenticated) = match token {
            Some(token) => {
                debug!("creating authenticated GitHub client");
                let client = Octocrab::builder()
                    .personal_token(token.expose_secret())
                    .build()
                    .map_err(Error::Api)?;
                (client, true)
            }
            None => {
                debug!("creating unauthenticated GitHub client");
                let client = Octocrab::builder().build().map_err(Error::Api)?;
                (client, false)
            }
        };

        Ok(Self {
            inner,
            authenticated,
        })
    }

    /// Returns the login of the user owning the token.
    ///
    /// This is the identity every "is this mine?" check compares against, and
    /// the first call of a run, so it doubles as the token check.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TokenValidation`] if the API rejects the token, or
    /// if the client was built without one.
    #[instrument(skip(self))]
    pub async fn current_user(&self) -> Result<String> {
        if !self.authenticated {
            return Err(Error::TokenValidation {
                reason: "no token provided".to_string(),
            });
        }

        debug!("resolving current user via /user");
        match self.inner.current().user().await {
            Ok(user) => {
                debug!(login = %user.login, "token validated successfully");
                Ok(user.login)
            }
            Err(octocrab::Error::GitHub { source, .. }) => {
                warn!(message = %source.message, "token validation failed");
                Err(Error::TokenValidation {
                    reason: source.message,
                })
            }
            Err(e) => {
                warn!(error = %e, "API error during token validation");
                Err(Error::Api(e))
            }
        }
    }

    /// Fetches the identity of a repository.
    ///
    /// Fields missing from the API response fall back to values derived from
    /// `owner` and `repo`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the repository does not exist or is not
    /// visible with the current token.
    #[instrument(skip(self), fields(owner = %owner, repo = %repo))]
    pub async fn repository(&self, owner: &str, repo: &str) -> Result<RepoInfo> {
        let fetched = self
            .inner
            .repos(owner, repo)
            .get()
            .await
            .map_err(|e| Error::from_api(e, || format!("repository {owner}/{repo}")))?;

        let fallback = RepoInfo::github(owner, repo);
        Ok(RepoInfo {
            full_name: fetched.full_name.unwrap_or(fallback.full_name),
            owner: fetched.owner.map(|o| o.login).unwrap_or(fallback.owner),
            html_url: fetched
                .html_url
                .map(|u| u.to_string())
                .unwrap_or(fallback.html_url),
        })
    }

    /// Returns a reference to the underlying octocrab client.
    #[must_use]
    pub fn inner(&self) -> &Octocrab {
        &self.inner
    }

    /// GETs every page of a list endpoint that octocrab has no typed
    /// handler for.
    ///
    /// `path` must not carry query parameters; `per_page` and `page` are
    /// appended here. Stops at the first short page.
    pub(crate) async fn get_all_pages<T: DeserializeOwned>(
        &self,
        path: &str,
        resource: impl Fn() -> String,
    ) -> Result<Vec<T>> {
        let mut items = Vec::new();
        for page in 1u32.. {
            let url = format!("{path}?per_page={PAGE_SIZE}&page={page}");
            let batch: Vec<T> = self
                .inner
                .get(&url, None::<&()>)
                .await
                .map_err(|e| Error::from_api(e, &resource))?;

            let len = batch.len();
            items.extend(batch);
            if len < usize::from(PAGE_SIZE) {
                break;
            }
        }

        debug!(path, count = items.len(), "fetched all pages");
        Ok(items)
    }
}
