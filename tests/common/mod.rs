//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

/// Test helper functions
pub mod helpers {
    use px_sdk::Session;
    use wiremock::MockServer;

    /// API key used by sessions built for mock-server tests
    pub const TEST_API_KEY: &str = "session-key";

    /// A Chrome user agent accepted by the remote service
    pub const TEST_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
         AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36";

    /// Create a session pointed at the given mock server
    pub fn mock_session(server: &MockServer) -> Session {
        Session::builder(TEST_API_KEY).base_url(server.uri()).build()
    }

    /// A well-formed generate response body with a chained `data` header
    pub fn sensor_body() -> serde_json::Value {
        serde_json::json!({
            "cookie": "_px3=cookie-value",
            "cts": "cts-value",
            "vid": "vid-value",
            "headers": {"data": "px-data-blob"},
            "success": true,
            "flagged": false
        })
    }
}
