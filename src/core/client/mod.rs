//! Public client surface + builder.
//! Request plumbing lives in `core::net` (transport) and `core::paginate` (page loop).

mod constants;

use crate::core::JqError;
use constants::{DEFAULT_BASE_URL, USER_AGENT};
use reqwest::Client;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// The session shared by every endpoint binding: base URL, bearer token and HTTP pool.
///
/// Cloning is cheap; clones share the same connection pool and token. The client is
/// immutable once built, so it can be used from any number of tasks at once.
#[derive(Clone)]
pub struct JqClient {
    http: Client,
    base_url: Url,
    id_token: Arc<str>,
}

impl fmt::Debug for JqClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JqClient")
            .field("base_url", &self.base_url.as_str())
            .field("id_token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl JqClient {
    /// Create a new builder.
    #[must_use]
    pub fn builder() -> JqClientBuilder {
        JqClientBuilder::default()
    }

    /// Shorthand for a client with default settings and the given bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`JqError::InvalidArgument`] if the token is empty, or [`JqError::Network`]
    /// if the HTTP client cannot be constructed.
    pub fn new(id_token: impl Into<String>) -> Result<Self, JqError> {
        Self::builder().id_token(id_token).build()
    }

    /// The base URL every endpoint path is appended to.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) const fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn id_token(&self) -> &str {
        &self.id_token
    }
}

/* ----------------------- Builder ----------------------- */

/// Configures and builds a [`JqClient`].
#[derive(Default)]
pub struct JqClientBuilder {
    id_token: Option<String>,
    base_url: Option<Url>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http: Option<Client>,
}

impl fmt::Debug for JqClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JqClientBuilder")
            .field("base_url", &self.base_url.as_ref().map(Url::as_str))
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("custom_http", &self.http.is_some())
            .finish_non_exhaustive()
    }
}

impl JqClientBuilder {
    /// The pre-obtained ID token sent as `Authorization: Bearer <token>`. Required.
    #[must_use]
    pub fn id_token(mut self, token: impl Into<String>) -> Self {
        self.id_token = Some(token.into());
        self
    }

    /// Override the API base (default `https://api.jquants.com/v1`). Mostly useful for tests.
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a total per-request timeout. Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Use a pre-configured `reqwest::Client` (proxy, custom TLS roots, ...).
    ///
    /// The builder's own `user_agent`, `timeout` and `connect_timeout` are ignored when a
    /// custom client is supplied. Note that the supplied client is responsible for its own
    /// redirect policy.
    #[must_use]
    pub fn http_client(mut self, client: Client) -> Self {
        self.http = Some(client);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`JqError::InvalidArgument`] if no (or an empty) ID token was given, and
    /// [`JqError::Network`] if the underlying HTTP client fails to initialize.
    pub fn build(self) -> Result<JqClient, JqError> {
        let id_token = self
            .id_token
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| JqError::InvalidArgument("an ID token is required".into()))?;

        let base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        if base_url.cannot_be_a_base() {
            return Err(JqError::InvalidArgument(format!(
                "base URL cannot be a base: {base_url}"
            )));
        }

        let http = match self.http {
            Some(c) => c,
            None => {
                let mut httpb = Client::builder()
                    .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
                    .redirect(reqwest::redirect::Policy::none());
                if let Some(t) = self.timeout {
                    httpb = httpb.timeout(t);
                }
                if let Some(ct) = self.connect_timeout {
                    httpb = httpb.connect_timeout(ct);
                }
                httpb.build()?
            }
        };

        Ok(JqClient {
            http,
            base_url,
            id_token: Arc::from(id_token),
        })
    }
}
