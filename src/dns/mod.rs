//! DNS layer: the target name type and the recursive resolver.
//!
//! This module provides:
//! - The validated three-label target name ([`Fqdn`])
//! - Address resolution against fixed public resolvers
//!   ([`RecursiveResolver`])

mod error;
mod fqdn;
mod resolver;


pub use error::ResolveError;
pub use fqdn::{Fqdn, FqdnError};
pub use resolver::{RecursiveResolver, DEFAULT_NAMESERVERS};
