//! HTTP authentication utilities

use base64::Engine;

/// Authentication helper
pub struct Auth;

impl Auth {
    /// Base64-encode `username:password` for storage on a connection.
    pub fn encode_credentials(username: &str, password: &str) -> String {
        let credentials = format!("{}:{}", username, password);
        base64::engine::general_purpose::STANDARD.encode(credentials.as_bytes())
    }

    /// Create a basic auth header value from an encoded credential blob.
    pub fn header_value(credentials: &str) -> String {
        format!("Basic {}", credentials)
    }
}
