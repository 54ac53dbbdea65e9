//! Response type definitions
//!
//! Defines the structure for cookie generation responses and the
//! conventional error body shape.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Response for cookie generation and hold-captcha solving
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateResponse {
    /// The generated PerimeterX cookie
    pub cookie: String,

    /// The PerimeterX `cts` value
    pub cts: String,

    /// The PerimeterX `vid` value
    pub vid: String,

    /// Headers returned by the service. The shape is not fixed by the API
    /// contract; callers extract values such as `data` by key.
    #[serde(default)]
    pub headers: HashMap<String, serde_json::Value>,

    /// Whether PerimeterX accepted the generated sensor data
    pub success: bool,

    /// Whether the generated sensor data was flagged
    pub flagged: bool,

    /// The solved challenge payload.
    ///
    /// Only returned by the hold-captcha endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl GenerateResponse {
    /// The `data` value from the response headers, when present as a string.
    ///
    /// This is the value chained into a subsequent hold-captcha request via
    /// [`GenerateRequest::with_data`].
    ///
    /// [`GenerateRequest::with_data`]: crate::GenerateRequest::with_data
    pub fn data_header(&self) -> Option<&str> {
        self.headers.get("data").and_then(|v| v.as_str())
    }
}

/// Conventional error body returned by the API on non-200 responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_deserialization() {
        let body = r#"{
            "cookie": "_px3=abc",
            "cts": "cts-value",
            "vid": "vid-value",
            "headers": {"data": "px-blob", "retries": 2},
            "success": true,
            "flagged": false
        }"#;

        let response: GenerateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.cookie, "_px3=abc");
        assert_eq!(response.cts, "cts-value");
        assert_eq!(response.vid, "vid-value");
        assert!(response.success);
        assert!(!response.flagged);
        assert_eq!(response.data, None);
    }

    #[test]
    fn test_data_header_extraction() {
        let body = r#"{
            "cookie": "c", "cts": "", "vid": "",
            "headers": {"data": "px-blob", "count": 3},
            "success": false, "flagged": true
        }"#;

        let response: GenerateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.data_header(), Some("px-blob"));
    }

    #[test]
    fn test_data_header_missing_or_non_string() {
        let body = r#"{
            "cookie": "c", "cts": "", "vid": "",
            "headers": {"count": 3},
            "success": true, "flagged": false
        }"#;

        let response: GenerateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.data_header(), None);
    }

    #[test]
    fn test_headers_default_to_empty() {
        let body = r#"{"cookie":"c","cts":"","vid":"","success":true,"flagged":false}"#;
        let response: GenerateResponse = serde_json::from_str(body).unwrap();
        assert!(response.headers.is_empty());
    }

    #[test]
    fn test_hold_captcha_data_field() {
        let body = r#"{
            "cookie": "c", "cts": "", "vid": "",
            "headers": {},
            "success": true, "flagged": false,
            "data": "solved-payload"
        }"#;

        let response: GenerateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.data, Some("solved-payload".to_string()));
    }

    #[test]
    fn test_error_response() {
        let response = ErrorResponse::new("Test error");
        assert_eq!(response.error, "Test error");

        let decoded: ErrorResponse = serde_json::from_str(r#"{"error":"invalid key"}"#).unwrap();
        assert_eq!(decoded.error, "invalid key");
    }
}
