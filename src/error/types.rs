//! Error type definitions
//!
//! Defines the main error type used throughout the PerimeterX API client.

use thiserror::Error;

/// Main error type for the PerimeterX API client
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors (missing API key, bad builder input)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The page URL is not a valid absolute http(s) URL
    #[error("Invalid page URL: {url}")]
    InvalidPageUrl {
        /// The rejected URL as supplied by the caller
        url: String,
    },

    /// The remote endpoint answered with a non-200 status
    #[error("API error ({status_code}): {message}")]
    Api {
        /// HTTP status code of the failed response
        status_code: u16,
        /// Message extracted from the error response body
        message: String,
    },

    /// The outgoing request could not be encoded as JSON
    #[error("Request serialization error: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A 200 response body did not match the expected schema
    #[error("Response deserialization error: {0}")]
    Deserialize(#[source] serde_json::Error),

    /// Network/HTTP transport errors, including timeouts
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid page URL error
    pub fn invalid_page_url(url: impl Into<String>) -> Self {
        Self::InvalidPageUrl { url: url.into() }
    }

    /// Create an API operation error
    pub fn api(status_code: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status_code,
            message: message.into(),
        }
    }

    /// The HTTP status code of a failed API operation, if this is an
    /// [`Error::Api`]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Whether the underlying transport reported a timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Network(e) if e.is_timeout())
    }
}
