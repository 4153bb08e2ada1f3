//! restnow - a minimal helper for authenticated REST requests
//!
//! This crate builds correctly-escaped request URLs and basic-auth header
//! sets for a single REST-style API endpoint family, and executes the
//! resulting requests over a shared async HTTP client.

pub mod connection;
pub mod error;
pub mod http;
pub mod logging;

pub use connection::Connection;
pub use error::{RestError, Result};
pub use http::request::{build_url, compose_headers, Method, QueryParameter, DEFAULT_HEADERS};
pub use http::RestClient;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
