//! Default values for configuration options.

use std::time::Duration;

/// Default record TTL in seconds.
pub const TTL_SECS: u32 = 3600;

/// Default log verbosity.
pub const LOG_LEVEL: tracing::Level = tracing::Level::INFO;

/// Request timeout for HTTP and DNS traffic, in seconds.
///
/// Not user-configurable: a finite bound on every network call is a design
/// requirement (provider downtime must fail the run, not hang it), and the
/// record TTL is deliberately a separate setting.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Request timeout as a Duration.
#[must_use]
pub const fn http_timeout() -> Duration {
    Duration::from_secs(HTTP_TIMEOUT_SECS)
}
