//! Cookie generation and hold-captcha operations
//!
//! Both operations share one request/response exchange: inject the session
//! API key, POST the JSON payload to the endpoint, and either decode the
//! response or map a non-200 status to [`Error::Api`].
//!
//! Cancellation is cooperative: dropping an operation future (for example
//! via `tokio::time::timeout` or `select!`) aborts the in-flight request.

use crate::{
    Error, Result,
    types::{ErrorResponse, GenerateRequest, GenerateResponse},
};
use reqwest::{StatusCode, header::CONTENT_TYPE};
use url::Url;

use super::Session;

/// Path of the cookie generation endpoint
const GENERATE_PATH: &str = "/pxweb/init";

/// Path of the hold-captcha endpoint
const HOLD_CAPTCHA_PATH: &str = "/pxweb/holdcap";

impl Session {
    /// Generate a PerimeterX sensor cookie.
    ///
    /// `user_agent` and `page_url` are required on the request; `proxy` is
    /// optional (empty means no proxy) and `data`/`pxhd` are unused for this
    /// call. The request's `api_key` field is overwritten with the session
    /// key before dispatch.
    ///
    /// The returned [`GenerateResponse`] carries `success`/`flagged` flags
    /// reflecting whether PerimeterX accepted the sensor data; this method
    /// does not interpret them.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPageUrl`] when `page_url` is not an absolute
    ///   http(s) URL
    /// - [`Error::Network`] for transport failures, including timeouts
    /// - [`Error::Api`] for non-200 responses
    /// - [`Error::Deserialize`] when a 200 body does not match the schema
    pub async fn generate_cookie(&self, request: &GenerateRequest) -> Result<GenerateResponse> {
        validate_page_url(&request.page_url)?;
        self.post_generate(GENERATE_PATH, request).await
    }

    /// Solve a hold-captcha challenge.
    ///
    /// Identical control flow to [`Session::generate_cookie`], but `data`
    /// and `pxhd` are meaningful here: `data` carries the value of the
    /// `data` header from a prior generate response (see
    /// [`GenerateResponse::data_header`]). The response's `data` field holds
    /// the solved challenge payload.
    pub async fn solve_hold_captcha(&self, request: &GenerateRequest) -> Result<GenerateResponse> {
        self.post_generate(HOLD_CAPTCHA_PATH, request).await
    }

    /// Shared exchange for both endpoints.
    async fn post_generate(&self, path: &str, request: &GenerateRequest) -> Result<GenerateResponse> {
        let mut payload = request.clone();
        payload.api_key = self.api_key.clone();

        let encoded = serde_json::to_vec(&payload).map_err(Error::Serialize)?;

        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, page_url = %payload.page_url, "dispatching PerimeterX API request");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(encoded)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        tracing::debug!(%url, status = status.as_u16(), "PerimeterX API response received");

        if status != StatusCode::OK {
            return Err(Error::Api {
                status_code: status.as_u16(),
                message: message_from_error_body(&body),
            });
        }

        serde_json::from_slice(&body).map_err(Error::Deserialize)
    }
}

/// Extract a human-readable message from an error response body.
///
/// Best effort: parse the conventional `{"error": "..."}` shape, falling
/// back to the raw body as lossy UTF-8 text (empty for an empty body). This
/// never fails.
pub(crate) fn message_from_error_body(body: &[u8]) -> String {
    if let Ok(parsed) = serde_json::from_slice::<ErrorResponse>(body)
        && !parsed.error.is_empty()
    {
        return parsed.error;
    }

    String::from_utf8_lossy(body).into_owned()
}

/// Check that the page URL is an absolute http(s) URL with a host.
fn validate_page_url(raw: &str) -> Result<()> {
    let parsed = Url::parse(raw).map_err(|_| Error::invalid_page_url(raw))?;

    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(Error::invalid_page_url(raw));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_from_json_error_body() {
        let message = message_from_error_body(br#"{"error":"invalid key"}"#);
        assert_eq!(message, "invalid key");
    }

    #[test]
    fn test_message_falls_back_to_raw_text() {
        let message = message_from_error_body(b"internal error");
        assert_eq!(message, "internal error");
    }

    #[test]
    fn test_message_falls_back_when_error_field_missing() {
        let message = message_from_error_body(br#"{"message":"nope"}"#);
        assert_eq!(message, r#"{"message":"nope"}"#);
    }

    #[test]
    fn test_message_falls_back_when_error_field_empty() {
        let message = message_from_error_body(br#"{"error":""}"#);
        assert_eq!(message, r#"{"error":""}"#);
    }

    #[test]
    fn test_message_from_empty_body() {
        assert_eq!(message_from_error_body(b""), "");
    }

    #[test]
    fn test_validate_page_url_accepts_absolute_http() {
        assert!(validate_page_url("https://auth.ticketmaster.com/").is_ok());
        assert!(validate_page_url("http://example.com/path?q=1").is_ok());
    }

    #[test]
    fn test_validate_page_url_rejects_relative_and_other_schemes() {
        assert!(matches!(
            validate_page_url("/relative/path"),
            Err(Error::InvalidPageUrl { .. })
        ));
        assert!(matches!(
            validate_page_url("ftp://example.com/"),
            Err(Error::InvalidPageUrl { .. })
        ));
        assert!(matches!(
            validate_page_url("not a url"),
            Err(Error::InvalidPageUrl { .. })
        ));
    }
}
