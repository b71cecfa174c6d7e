//! Error types for newsclip.
//!
//! All transport-level failures are classified at the fetch boundary into
//! one of the variants below; nothing past the fetcher raises network
//! errors. Report writing surfaces `Io`.

use reqwest::StatusCode;

/// Error type for harvest operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The server answered with a non-success status code.
    #[error("HTTP error occurred: status {status}")]
    Status {
        /// Status code returned by the server.
        status: StatusCode,
    },

    /// The request exceeded the fetch timeout.
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// The connection could not be established.
    #[error("Connection error: {0}")]
    Connect(String),

    /// Any other transport-level failure (DNS, TLS, body read, ...).
    #[error("An error occurred: {0}")]
    Network(String),

    /// The supplied URL is not an absolute http(s) URL with a host.
    #[error("Invalid article URL: {0}")]
    InvalidUrl(String),

    /// The HTTP client could not be constructed.
    #[error("Client build failed: {0}")]
    Client(String),

    /// Report file could not be written.
    #[error("Error writing to file: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for harvest operations.
pub type Result<T> = std::result::Result<T, Error>;
