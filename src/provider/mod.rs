//! one.com web-console client.
//!
//! The provider has no documented API; record operations ride on the same
//! endpoints the admin console itself uses. This module provides:
//! - Landing-page scraping for the rotating login endpoint ([`login`])
//! - Record listing/lookup and the PATCH payload ([`RecordDescriptor`],
//!   [`RecordUpdate`], [`find_by_prefix`])
//! - The session workflow with guaranteed logout ([`OneComClient`],
//!   [`Session`])

mod error;
mod login;
mod records;
mod session;

#[cfg(test)]
mod records_tests;

pub use error::ProviderError;
pub use records::{find_by_prefix, RecordDescriptor, RecordType, RecordUpdate};
pub use session::{OneComClient, Session, UpdateOutcome};
