//! Public-IP lookup against a fixed IP-echo service.

use std::net::Ipv4Addr;

use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::http::{HttpClient, HttpError, HttpRequest};

/// IP-echo endpoint; responds 200 with the caller's address as plain text.
pub const PUBLIC_IP_ENDPOINT: &str = "https://api.ipify.org/";

/// Client for the public IP-echo service.
///
/// Issues exactly one GET per [`fetch`](Self::fetch) call; there is no
/// retry. Generic over [`HttpClient`] so the failure paths can be
/// exercised without a network.
pub struct PublicIpClient<H> {
    http: H,
    endpoint: Url,
}

impl<H: HttpClient> PublicIpClient<H> {
    /// Creates a client against the fixed echo endpoint.
    #[must_use]
    pub fn new(http: H) -> Self {
        // the endpoint is a compile-time constant, parsing cannot fail
        let endpoint = Url::parse(PUBLIC_IP_ENDPOINT).expect("endpoint constant is a valid URL");
        Self::with_endpoint(http, endpoint)
    }

    /// Creates a client against a custom echo endpoint.
    #[must_use]
    pub const fn with_endpoint(http: H, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    /// Fetches the caller's externally visible IPv4 address.
    ///
    /// # Errors
    ///
    /// Returns [`PublicIpError`] when the request fails, the service
    /// responds with a non-200 status, or the body is not an IPv4 address.
    pub async fn fetch(&self) -> Result<Ipv4Addr, PublicIpError> {
        let response = self
            .http
            .request(HttpRequest::get(self.endpoint.clone()))
            .await?;

        if response.status != http::StatusCode::OK {
            return Err(PublicIpError::Status {
                status: response.status,
            });
        }

        let body = response
            .body_text()
            .ok_or(PublicIpError::InvalidBody)?
            .trim();

        let address = body.parse().map_err(|_| PublicIpError::NotAnAddress {
            body: body.to_string(),
        })?;
        debug!("Public address is {address}");
        Ok(address)
    }
}

/// Error type for the public-IP lookup.
#[derive(Debug, Error)]
pub enum PublicIpError {
    /// The service responded with a non-success status.
    #[error("IP echo service returned status {status}")]
    Status {
        /// The response status code
        status: http::StatusCode,
    },

    /// The response body was not valid UTF-8.
    #[error("IP echo service returned a non-text body")]
    InvalidBody,

    /// The response body did not parse as an IPv4 address.
    #[error("IP echo service returned '{body}', not an IPv4 address")]
    NotAnAddress {
        /// The offending body
        body: String,
    },

    /// The request itself failed.
    #[error(transparent)]
    Http(#[from] HttpError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpResponse;
    use std::sync::Mutex;

    struct MockClient {
        responses: Mutex<Vec<Result<HttpResponse, HttpError>>>,
    }

    impl MockClient {
        fn respond_with(status: http::StatusCode, body: &str) -> Self {
            Self {
                responses: Mutex::new(vec![Ok(HttpResponse::new(
                    status,
                    http::HeaderMap::new(),
                    body.as_bytes().to_vec(),
                ))]),
            }
        }
    }

    impl HttpClient for MockClient {
        async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
            self.responses.lock().unwrap().remove(0)
        }
    }

    #[tokio::test]
    async fn parses_plain_text_address() {
        let client = PublicIpClient::new(MockClient::respond_with(http::StatusCode::OK, "1.2.3.4"));
        assert_eq!(client.fetch().await.unwrap(), Ipv4Addr::new(1, 2, 3, 4));
    }

    #[tokio::test]
    async fn trims_surrounding_whitespace() {
        let client =
            PublicIpClient::new(MockClient::respond_with(http::StatusCode::OK, "5.6.7.8\n"));
        assert_eq!(client.fetch().await.unwrap(), Ipv4Addr::new(5, 6, 7, 8));
    }

    #[tokio::test]
    async fn non_success_status_carries_the_code() {
        let client = PublicIpClient::new(MockClient::respond_with(
            http::StatusCode::SERVICE_UNAVAILABLE,
            "",
        ));
        match client.fetch().await {
            Err(PublicIpError::Status { status }) => {
                assert_eq!(status, http::StatusCode::SERVICE_UNAVAILABLE);
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn garbage_body_is_rejected() {
        let client = PublicIpClient::new(MockClient::respond_with(
            http::StatusCode::OK,
            "<html>not an ip</html>",
        ));
        assert!(matches!(
            client.fetch().await,
            Err(PublicIpError::NotAnAddress { .. })
        ));
    }

    #[tokio::test]
    async fn transport_errors_propagate() {
        let client = PublicIpClient::new(MockClient {
            responses: Mutex::new(vec![Err(HttpError::Timeout)]),
        });
        assert!(matches!(
            client.fetch().await,
            Err(PublicIpError::Http(HttpError::Timeout))
        ));
    }
}
