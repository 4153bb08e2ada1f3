//! HTTP execution layer.
//!
//! [`RestClient`] owns the underlying transport and turns a
//! [`Connection`](crate::Connection) plus a method, resource and parameters
//! into an outgoing HTTP call.

use std::time::Duration;

use log::{debug, info};
use reqwest::{Client, ClientBuilder};

use crate::connection::Connection;
use crate::error::{RestError, Result};

pub mod auth;
pub mod request;

use request::{build_url, compose_headers, Method, QueryParameter, DEFAULT_HEADERS};

/// Fixed per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client wrapper
///
/// One instance may serve many connections; it holds no per-connection state.
pub struct RestClient {
    client: Client,
}

impl RestClient {
    /// Create a new client with the fixed request timeout.
    pub fn new() -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(RestError::Http)?;

        Ok(Self { client })
    }

    /// Execute a request against a connected endpoint.
    ///
    /// Fails with [`RestError::NotConnected`] before anything is sent if the
    /// connection was never connected. Transport failures and non-2xx
    /// statuses are returned as-is; classification is left to the caller.
    pub async fn execute(
        &self,
        con: &Connection,
        method: Method,
        resource: &str,
        value: Option<&str>,
        params: &[QueryParameter],
    ) -> Result<reqwest::Response> {
        if !con.is_connected() {
            return Err(RestError::NotConnected);
        }

        let url = build_url(&con.full_path(), resource, value, params)?;
        let headers = compose_headers(DEFAULT_HEADERS, con.headers(), con.credentials());

        let mut request = self.client.request(method.as_reqwest(), &url);
        for (key, value) in &headers {
            request = request.header(key, value);
        }

        info!("{} {}", method, url);
        debug!("sending {} composed headers", headers.len());

        request.send().await.map_err(RestError::Http)
    }

    /// Verify that the endpoint answers at all.
    ///
    /// Issues a GET against the connection's full path with the composed
    /// header set. Any HTTP response counts as alive; only transport-level
    /// failures surface as errors.
    pub async fn ping(&self, con: &Connection) -> Result<()> {
        if !con.is_connected() {
            return Err(RestError::NotConnected);
        }

        let url = con.full_path();
        let headers = compose_headers(DEFAULT_HEADERS, con.headers(), con.credentials());

        let mut request = self.client.request(reqwest::Method::GET, &url);
        for (key, value) in &headers {
            request = request.header(key, value);
        }

        info!("GET {} (ping)", url);

        request.send().await.map_err(RestError::Http)?;
        Ok(())
    }
}
