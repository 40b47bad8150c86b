//! HTTP transport layer shared by the public-IP lookup and the provider
//! session client.
//!
//! This module provides:
//! - Request/response value types ([`HttpRequest`], [`HttpResponse`])
//! - The client abstraction ([`HttpClient`])
//! - The production reqwest-backed client ([`ReqwestClient`])

mod client;
mod error;
mod types;

pub use client::ReqwestClient;
pub use error::HttpError;
pub use types::{HttpClient, HttpRequest, HttpResponse};
