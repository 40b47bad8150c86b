//! The update decision: whether the published record needs a new address.
//!
//! Kept free of any I/O so the policy is trivially unit-testable; the
//! orchestrator does the logging and invokes the provider client only when
//! [`UpdateDecision::requires_update`] says so.

use std::net::Ipv4Addr;

/// Outcome of comparing the published address against the public one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateDecision {
    /// Published and public addresses match; nothing to do.
    UpToDate,
    /// Addresses match but the caller asked to update anyway.
    Forced,
    /// The public address differs from the published one.
    Changed,
}

impl UpdateDecision {
    /// Returns true when the provider workflow should run.
    #[must_use]
    pub const fn requires_update(self) -> bool {
        !matches!(self, Self::UpToDate)
    }
}

/// Decides whether an update is required.
///
/// An update is triggered iff the addresses differ or `force` is set.
#[must_use]
pub fn evaluate(resolved: Ipv4Addr, public: Ipv4Addr, force: bool) -> UpdateDecision {
    if resolved != public {
        UpdateDecision::Changed
    } else if force {
        UpdateDecision::Forced
    } else {
        UpdateDecision::UpToDate
    }
}
