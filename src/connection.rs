//! Endpoint configuration and credential state.
//!
//! A [`Connection`] holds everything that outlives a single request: the
//! parsed base URL, custom headers, and the basic-auth credential blob.
//! It performs no I/O itself; requests are issued through
//! [`RestClient`](crate::http::RestClient).

use std::collections::HashMap;

use url::{Position, Url};

use crate::error::{RestError, Result};
use crate::http::auth::Auth;

/// A configured API endpoint.
///
/// Created unready; [`Connection::connect`] stores credentials and marks the
/// connection ready. There is no reverse transition - construct a new
/// connection to reset.
#[derive(Debug, Clone)]
pub struct Connection {
    base_url: Url,
    connected: bool,
    credentials: String,
    headers: HashMap<String, String>,
}

impl Connection {
    /// Create a connection from an absolute base URL.
    ///
    /// The URL's path component becomes the request path prefix; use
    /// [`Connection::set_path`] to change it later.
    pub fn new(base_url: &str) -> Result<Self> {
        let url = Url::parse(base_url)
            .map_err(|e| RestError::InvalidUrl(format!("Invalid URL '{}': {}", base_url, e)))?;

        if !url.has_host() {
            return Err(RestError::InvalidUrl(format!(
                "Invalid URL '{}': missing host",
                base_url
            )));
        }

        Ok(Self {
            base_url: url,
            connected: false,
            credentials: String::new(),
            headers: HashMap::new(),
        })
    }

    /// Store basic-auth credentials and mark the connection ready.
    ///
    /// Performs no network I/O and cannot fail; use
    /// [`RestClient::ping`](crate::http::RestClient::ping) when liveness
    /// verification is needed.
    pub fn connect(&mut self, username: &str, password: &str) {
        self.credentials = Auth::encode_credentials(username, password);
        self.connected = true;
    }

    /// Whether [`Connection::connect`] has been called.
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Set or replace a custom header sent with every request.
    pub fn set_header(&mut self, key: &str, value: &str) {
        self.headers.insert(key.to_string(), value.to_string());
    }

    /// Look up a custom header by exact key.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }

    /// Remove a custom header, returning its previous value.
    pub fn remove_header(&mut self, key: &str) -> Option<String> {
        self.headers.remove(key)
    }

    /// All custom headers for this connection.
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Replace the path prefix under which resources are addressed.
    pub fn set_path(&mut self, path: &str) {
        self.base_url.set_path(path);
    }

    /// The current path prefix, always starting with `/`.
    pub fn path(&self) -> &str {
        self.base_url.path()
    }

    /// `scheme://host[:port]` without the path.
    pub fn base_url(&self) -> String {
        self.base_url[..Position::BeforePath].to_string()
    }

    /// `scheme://host[:port]/path` - the prefix every request URL starts with.
    pub fn full_path(&self) -> String {
        self.base_url[..Position::AfterPath].to_string()
    }

    /// The stored base64 credential blob, empty until connected.
    pub fn credentials(&self) -> &str {
        &self.credentials
    }
}
