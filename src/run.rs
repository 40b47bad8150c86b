//! Application execution logic.
//!
//! One pass: resolve the published address, look up the public one,
//! decide, and drive the provider workflow if an update is due.

use thiserror::Error;
use tracing::{error, info, warn};

use onecom_ddns::config::{defaults, ValidatedConfig};
use onecom_ddns::dns::{RecursiveResolver, ResolveError, DEFAULT_NAMESERVERS};
use onecom_ddns::http::{HttpError, ReqwestClient};
use onecom_ddns::ip::{PublicIpClient, PublicIpError};
use onecom_ddns::provider::{OneComClient, ProviderError, UpdateOutcome};
use onecom_ddns::update::{self, UpdateDecision};

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The HTTP client could not be constructed.
    #[error("Failed to set up the HTTP client: {0}")]
    Transport(#[source] HttpError),

    /// The published address could not be resolved.
    #[error("Failed to resolve the published address: {0}")]
    Resolve(#[source] ResolveError),

    /// The public address could not be determined.
    #[error("Failed to determine the public address: {0}")]
    PublicIp(#[source] PublicIpError),

    /// The provider workflow failed.
    #[error("Record update failed: {0}")]
    Provider(#[source] ProviderError),
}

/// Executes one update pass.
///
/// # Errors
///
/// Returns an error when resolution, the public-IP lookup, or any fatal
/// step of the provider workflow fails. A record that does not exist under
/// the domain is reported in the log but is not an error.
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let timeout = defaults::http_timeout();

    let resolver = RecursiveResolver::new(&DEFAULT_NAMESERVERS, timeout);
    let resolved = resolver
        .resolve_a(&config.fqdn)
        .await
        .map_err(RunError::Resolve)?;

    let http = ReqwestClient::new(timeout).map_err(RunError::Transport)?;
    let public = PublicIpClient::new(http.clone())
        .fetch()
        .await
        .map_err(RunError::PublicIp)?;

    match update::evaluate(resolved, public, config.force) {
        UpdateDecision::UpToDate => {
            info!(
                "Public and published addresses match ({resolved}), no update needed for {}",
                config.fqdn
            );
            return Ok(());
        }
        UpdateDecision::Forced => {
            warn!(
                "Addresses match ({resolved}) but an update of {} was forced",
                config.fqdn
            );
        }
        UpdateDecision::Changed => {
            info!(
                "Public address changed: {resolved} -> {public}, updating {}",
                config.fqdn
            );
        }
    }

    let provider = OneComClient::new(http);
    let outcome = provider
        .apply(
            &config.username,
            &config.password,
            &config.fqdn,
            &public.to_string(),
            config.ttl,
            config.simulate,
        )
        .await
        .map_err(RunError::Provider)?;

    if outcome == UpdateOutcome::RecordMissing {
        // reported, not fatal: there is nothing to update
        error!("Could not determine the record id for {}", config.fqdn);
    }

    Ok(())
}
