//! Address resolution against fixed public resolvers.
//!
//! Queries go straight to a configured nameserver list instead of the
//! system resolver, so a stale or split-horizon local DNS view cannot mask
//! a real public-IP change.

use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;
use tracing::debug;

use super::{Fqdn, ResolveError};

/// Nameservers queried when the caller does not supply its own list.
pub const DEFAULT_NAMESERVERS: [IpAddr; 2] = [
    IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)),
    IpAddr::V4(Ipv4Addr::new(8, 8, 4, 4)),
];

/// DNS resolver bound to an explicit nameserver list.
pub struct RecursiveResolver {
    inner: TokioAsyncResolver,
}

impl RecursiveResolver {
    /// Creates a resolver querying the given nameservers over plain
    /// UDP/TCP on port 53, with the given per-query timeout.
    #[must_use]
    pub fn new(nameservers: &[IpAddr], timeout: Duration) -> Self {
        let group = NameServerConfigGroup::from_ips_clear(nameservers, 53, true);
        let config = ResolverConfig::from_parts(None, Vec::new(), group);

        let mut opts = ResolverOpts::default();
        opts.timeout = timeout;
        // one try per nameserver; a second server is already the fallback
        opts.attempts = 1;

        Self {
            inner: TokioAsyncResolver::tokio(config, opts),
        }
    }

    /// Resolves the currently published A record for the name.
    ///
    /// Returns the first address in the answer set.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] when the lookup fails (NXDOMAIN, SERVFAIL,
    /// timeout) or succeeds with an empty answer set.
    pub async fn resolve_a(&self, fqdn: &Fqdn) -> Result<Ipv4Addr, ResolveError> {
        // trailing dot: the name is absolute, no search-list expansion
        let name = format!("{fqdn}.");
        debug!("Querying A record for {name}");

        let lookup = self.inner.ipv4_lookup(name).await?;
        let address = lookup
            .iter()
            .next()
            .map(|record| record.0)
            .ok_or_else(|| ResolveError::NoAddress {
                fqdn: fqdn.to_string(),
            })?;

        debug!("{fqdn} currently resolves to {address}");
        Ok(address)
    }
}
