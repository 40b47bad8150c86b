//! Error types for DNS resolution.

use thiserror::Error;

/// Error type for resolving the published record.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The DNS query itself failed (NXDOMAIN, SERVFAIL, timeout, ...).
    #[error("DNS lookup failed: {0}")]
    Lookup(#[from] hickory_resolver::error::ResolveError),

    /// The query succeeded but carried no A record.
    #[error("no address record published for {fqdn}")]
    NoAddress {
        /// The queried name
        fqdn: String,
    },
}
