//! Error types for the provider workflow.

use thiserror::Error;

use crate::http::HttpError;

/// Error type for the one.com session workflow.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The landing page did not contain the login form action URL.
    ///
    /// Usually means the provider changed its page structure.
    #[error("could not determine the login endpoint from the landing page")]
    LoginEndpointNotFound,

    /// The login POST returned an unexpected status code.
    #[error("login request returned status {status}")]
    LoginStatus {
        /// The response status code
        status: http::StatusCode,
    },

    /// The provider rejected the credentials.
    ///
    /// Carries the provider's own error text when the login page exposed
    /// one.
    #[error("login failed: {message}")]
    LoginRejected {
        /// Provider-supplied (or generic) failure message
        message: String,
    },

    /// The record listing request did not succeed.
    #[error("failed to get records (status {status})")]
    RecordListFailed {
        /// The response status code
        status: http::StatusCode,
    },

    /// The record PATCH did not succeed.
    #[error(
        "failed to update record {id} (status {status}); check that the \
         record id, username and password are correct"
    )]
    UpdateFailed {
        /// The provider record id
        id: String,
        /// The response status code
        status: http::StatusCode,
    },

    /// The candidate record content is not a valid dotted-quad address.
    ///
    /// Raised locally, before any network call is made.
    #[error("'{value}' is not a valid dotted-quad IPv4 address")]
    InvalidAddress {
        /// The rejected content
        value: String,
    },

    /// The record listing body was not the expected JSON shape.
    #[error("malformed record listing: {0}")]
    Json(#[from] serde_json::Error),

    /// A request failed at the transport level.
    #[error(transparent)]
    Http(#[from] HttpError),
}
