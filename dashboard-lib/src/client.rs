//! Main AdminClient

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::auth::SessionHandle;
use crate::error::ApiError;
use crate::error::Error;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://bsmart.asynk.store";

/// Client for the platform's admin REST API.
///
/// Cheap to clone (uses `Arc` internally). The bearer token is read from the
/// [`SessionHandle`] on every request, so logging in or out through one clone
/// is visible to all of them.
///
/// # Example
///
/// ```no_run
/// use dashboard_lib::auth::SessionHandle;
/// use dashboard_lib::{AdminClient, DEFAULT_BASE_URL};
///
/// # async fn run() -> Result<(), dashboard_lib::error::Error> {
/// let client = AdminClient::builder()
///     .url(DEFAULT_BASE_URL)
///     .session(SessionHandle::in_memory())
///     .build()?;
///
/// client.login("admin@example.com", "secret").await?;
/// let users = client.list_users().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AdminClient {
    pub(crate) inner: Arc<AdminClientInner>,
}

pub(crate) struct AdminClientInner {
    pub(crate) base_url: String,
    pub(crate) session: SessionHandle,
    pub(crate) http_client: Client,
    pub(crate) timeout: Option<Duration>,
}

impl AdminClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> AdminClientBuilder<Missing, Missing> {
        AdminClientBuilder::new()
    }

    /// Returns the API root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Returns the session handle the client reads its token from.
    pub fn session(&self) -> &SessionHandle {
        &self.inner.session
    }
}

impl std::fmt::Debug for AdminClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminClient")
            .field("base_url", &self.inner.base_url)
            .field("timeout", &self.inner.timeout)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing an [`AdminClient`].
///
/// Uses the typestate pattern to ensure required fields are set at compile time.
///
/// # Required Fields
///
/// - `url` - The API root, e.g. [`DEFAULT_BASE_URL`]
/// - `session` - The [`SessionHandle`] holding the bearer token
pub struct AdminClientBuilder<U, S> {
    url: U,
    session: S,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl AdminClientBuilder<Missing, Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            url: Missing,
            session: Missing,
            timeout: None,
            connect_timeout: None,
            http_client: None,
        }
    }
}

impl Default for AdminClientBuilder<Missing, Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> AdminClientBuilder<Missing, S> {
    /// Sets the API root.
    pub fn url(self, url: impl Into<String>) -> AdminClientBuilder<Set<String>, S> {
        AdminClientBuilder {
            url: Set(url.into()),
            session: self.session,
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
        }
    }
}

impl<U> AdminClientBuilder<U, Missing> {
    /// Sets the session handle.
    pub fn session(self, session: SessionHandle) -> AdminClientBuilder<U, Set<SessionHandle>> {
        AdminClientBuilder {
            url: self.url,
            session: Set(session),
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
        }
    }
}

impl<U, S> AdminClientBuilder<U, S> {
    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl AdminClientBuilder<Set<String>, Set<SessionHandle>> {
    /// Builds the [`AdminClient`].
    ///
    /// Fails if the URL is not an absolute `http(s)` URL or the HTTP client
    /// cannot be created.
    pub fn build(self) -> Result<AdminClient, Error> {
        let base_url = self.url.0.trim().trim_end_matches('/').to_string();
        let parsed = Url::parse(&base_url).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidUrl(format!("{}: unsupported scheme", base_url)).into());
        }

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                builder.build().map_err(ApiError::from)?
            }
        };

        Ok(AdminClient {
            inner: Arc::new(AdminClientInner {
                base_url,
                session: self.session.0,
                http_client,
                timeout: self.timeout,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_trims_trailing_slash() {
        let client = AdminClient::builder()
            .url("https://bsmart.asynk.store/")
            .session(SessionHandle::in_memory())
            .build()
            .unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_build_rejects_bad_url() {
        let err = AdminClient::builder()
            .url("not a url")
            .session(SessionHandle::in_memory())
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::InvalidUrl(_))));

        let err = AdminClient::builder()
            .url("ftp://files.example.com")
            .session(SessionHandle::in_memory())
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::InvalidUrl(_))));
    }
}
