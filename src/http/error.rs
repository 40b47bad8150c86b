//! Transport-level errors.

use thiserror::Error;

/// Error produced by an [`HttpClient`](super::HttpClient) implementation.
///
/// Only covers getting a request onto the wire and a response back;
/// what a given status code means is up to the caller.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Could not reach the server: name resolution, refused connection,
    /// broken transfer.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// No response within the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// The URL was rejected by the underlying client.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The client itself could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Build(String),
}
