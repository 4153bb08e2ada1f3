//! Error handling for restnow

use thiserror::Error;

/// Main error type for restnow operations
#[derive(Error, Debug)]
pub enum RestError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid resource: {0}")]
    InvalidResource(String),

    #[error("Not connected: call connect() before issuing requests")]
    NotConnected,
}

/// Result type alias for restnow operations
pub type Result<T> = std::result::Result<T, RestError>;
