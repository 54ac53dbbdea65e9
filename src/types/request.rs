//! Request type definitions
//!
//! Defines the structure for cookie generation and hold-captcha requests.

use serde::{Deserialize, Serialize};

/// Request for PerimeterX cookie generation and hold-captcha solving
///
/// Both API operations share this schema; `data` and `_pxhd` are optional
/// for cookie generation but required when solving a hold captcha.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerateRequest {
    /// The API key to use when authorizing with the FRIS Solutions API.
    ///
    /// This field is always overwritten with the [`Session`] key before the
    /// request is sent; a caller-set value is ignored.
    ///
    /// [`Session`]: crate::Session
    #[serde(rename = "apiKey", default)]
    pub api_key: String,

    /// The user agent to generate sensor data for.
    ///
    /// The remote service currently restricts this to Google Chrome v114 or
    /// v119 user agents. Any platform works, but Windows is recommended.
    #[serde(rename = "ua")]
    pub user_agent: String,

    /// The URL of the page to generate sensor data for.
    #[serde(rename = "pageUrl")]
    pub page_url: String,

    /// The proxy the remote service uses when generating cookies.
    /// Empty means no proxy.
    pub proxy: String,

    /// PerimeterX state carried into a hold-captcha request, taken from the
    /// `data` header of a prior generate response.
    ///
    /// Optional for cookie generation, required for hold captcha.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    /// The `_pxhd` session-continuation value.
    ///
    /// Optional for cookie generation, required for hold captcha.
    #[serde(rename = "_pxhd", default, skip_serializing_if = "Option::is_none")]
    pub pxhd: Option<String>,
}

impl GenerateRequest {
    /// Create a new request with the required user agent and page URL
    pub fn new(user_agent: impl Into<String>, page_url: impl Into<String>) -> Self {
        Self {
            api_key: String::new(),
            user_agent: user_agent.into(),
            page_url: page_url.into(),
            proxy: String::new(),
            data: None,
            pxhd: None,
        }
    }

    /// Set the proxy for the remote service to use
    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = proxy.into();
        self
    }

    /// Set the PerimeterX data blob for a hold-captcha request
    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Set the `_pxhd` value for a hold-captcha request
    pub fn with_pxhd(mut self, pxhd: impl Into<String>) -> Self {
        self.pxhd = Some(pxhd.into());
        self
    }
}
