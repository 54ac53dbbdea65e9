//! Session construction
//!
//! A [`Session`] pairs a FRIS Solutions API key with a reusable HTTP
//! transport. Callers should re-use the same session as much as possible,
//! even across different tasks; the transport pools connections internally.

use crate::{Error, Result};
use once_cell::sync::Lazy;
use reqwest::Client;
use std::time::Duration;

/// Base URL of the FRIS Solutions API
pub const DEFAULT_BASE_URL: &str = "https://api.frisapi.dev";

/// Environment variable holding the API key for [`Session::from_env`]
const API_KEY_ENV: &str = "FRIS_API_KEY";

/// Request timeout applied to the shared default transport
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Process-wide default transport: created once, reused by every session
/// built without an explicit client, never implicitly replaced.
static DEFAULT_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(DEFAULT_TIMEOUT)
        .build()
        .expect("Failed to create HTTP client")
});

/// An API session for the FRIS Solutions PerimeterX API
///
/// Immutable after construction and cheap to clone; clones share the same
/// underlying connection pool. `Session` is `Send + Sync` and safe to use
/// from concurrent tasks.
#[derive(Debug, Clone)]
pub struct Session {
    /// The API key injected into every outgoing request
    pub(crate) api_key: String,
    /// The HTTP transport used for API requests
    pub(crate) client: Client,
    /// Base URL of the API, overridable for testing
    pub(crate) base_url: String,
}

impl Session {
    /// Create a new session with the given API key and the shared default
    /// transport.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::builder(api_key).build()
    }

    /// Create a new session with the given API key and a caller-supplied
    /// transport.
    ///
    /// The given client is responsible for making requests to the FRIS
    /// Solutions API. Because `reqwest::Client` is non-nullable, an absent
    /// transport is unrepresentable here.
    pub fn with_client(api_key: impl Into<String>, client: Client) -> Self {
        Self::builder(api_key).client(client).build()
    }

    /// Create a new session with the API key read from the `FRIS_API_KEY`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the variable is unset or empty.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::config(format!("{} is not set", API_KEY_ENV)))?;
        Ok(Self::new(api_key))
    }

    /// Start building a session with custom transport or base URL.
    pub fn builder(api_key: impl Into<String>) -> SessionBuilder {
        SessionBuilder {
            api_key: api_key.into(),
            client: None,
            base_url: None,
            timeout: None,
        }
    }
}

/// Builder for [`Session`]
#[derive(Debug)]
pub struct SessionBuilder {
    api_key: String,
    client: Option<Client>,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl SessionBuilder {
    /// Use a caller-supplied transport instead of the shared default.
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Override the API base URL. Intended for tests against a mock server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the request timeout for the built transport.
    ///
    /// Ignored when an explicit client was supplied; configure the timeout
    /// on that client instead.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the session.
    pub fn build(self) -> Session {
        let client = match (self.client, self.timeout) {
            (Some(client), _) => client,
            (None, Some(timeout)) => Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
            (None, None) => DEFAULT_CLIENT.clone(),
        };

        Session {
            api_key: self.api_key,
            client,
            base_url: self
                .base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }
}
