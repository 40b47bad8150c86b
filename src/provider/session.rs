//! The authenticated session workflow.

use http::header::CONTENT_TYPE;
use http::HeaderValue;
use tracing::{debug, error, info, warn};
use url::form_urlencoded;
use url::Url;

use crate::dns::Fqdn;
use crate::http::{HttpClient, HttpError, HttpRequest};
use crate::validation::is_valid_ipv4;

use super::login;
use super::records::{find_by_prefix, RecordDescriptor, RecordType, RecordUpdate};
use super::ProviderError;

/// Admin landing page; fetching it redirects through the login flow and
/// seeds the session cookies.
const ADMIN_URL: &str = "https://www.one.com/admin/";

/// Base of the console's record API.
const API_BASE: &str = "https://www.one.com/admin/api";

/// Logout endpoint terminating the server-side session.
const LOGOUT_URL: &str = "https://www.one.com/admin/logout.do";

/// What the provider workflow actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The record PATCH succeeded.
    Applied,
    /// Simulate mode: everything ran except the record write.
    Simulated,
    /// No record under the domain matches the subdomain prefix.
    RecordMissing,
}

/// Client for the one.com web console.
///
/// Generic over the HTTP transport; the production transport must keep a
/// cookie store, since the session exists only as cookies set during
/// login.
#[derive(Debug)]
pub struct OneComClient<H> {
    http: H,
}

impl<H: HttpClient> OneComClient<H> {
    /// Creates a client on top of the given transport.
    #[must_use]
    pub const fn new(http: H) -> Self {
        Self { http }
    }

    /// Runs the full update workflow: login, list, find, patch, logout.
    ///
    /// The logout is attempted on every path once the login succeeded:
    /// after a successful patch, after a simulated run, and after any
    /// listing/lookup/patch failure. No authenticated session is left
    /// behind on the provider.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] for login failures, listing failures,
    /// locally rejected record content, and failed patches. A missing
    /// record is not an error; it is reported as
    /// [`UpdateOutcome::RecordMissing`].
    pub async fn apply(
        &self,
        username: &str,
        password: &str,
        fqdn: &Fqdn,
        content: &str,
        ttl: u32,
        simulate: bool,
    ) -> Result<UpdateOutcome, ProviderError> {
        let session = self.login(username, password).await?;
        let outcome = session.run_update(fqdn, content, ttl, simulate).await;
        session.logout().await;
        outcome
    }

    /// Establishes an authenticated session.
    ///
    /// Fetches the landing page, extracts the rotating form action URL,
    /// and posts the credentials to it. Bad credentials come back as a
    /// 200 page carrying an error marker, so the body is inspected rather
    /// than the status alone.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::LoginEndpointNotFound`] when the form
    /// cannot be located, [`ProviderError::LoginStatus`] on an unexpected
    /// status, and [`ProviderError::LoginRejected`] when the provider
    /// refused the credentials.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Session<'_, H>, ProviderError> {
        debug!("Fetching the admin landing page");
        let landing = self.http.request(HttpRequest::get(parse_url(ADMIN_URL)?)).await?;

        let action = landing
            .body_text()
            .and_then(login::extract_login_action)
            .ok_or(ProviderError::LoginEndpointNotFound)?;
        debug!("Login endpoint for this visit: {action}");

        let form = form_urlencoded::Serializer::new(String::new())
            .append_pair("username", username)
            .append_pair("password", password)
            .append_pair("credentialId", "")
            .finish();

        let request = HttpRequest::post(parse_url(&action)?)
            .with_header(
                CONTENT_TYPE,
                HeaderValue::from_static("application/x-www-form-urlencoded"),
            )
            .with_body(form.into_bytes());

        let response = self.http.request(request).await?;
        debug!("Login response status is {}", response.status);

        if response.status != http::StatusCode::OK {
            return Err(ProviderError::LoginStatus {
                status: response.status,
            });
        }

        let body = response.body_text().unwrap_or_default();
        if login::has_error_marker(body) {
            let message = login::extract_error_message(body)
                .unwrap_or_else(|| "the provider did not say why".to_string());
            return Err(ProviderError::LoginRejected { message });
        }

        debug!("Login succeeded");
        Ok(Session { client: self })
    }
}

/// An authenticated session, valid until [`Session::logout`].
///
/// Borrowing the client keeps the session from outliving one run of the
/// workflow.
#[derive(Debug)]
pub struct Session<'a, H> {
    client: &'a OneComClient<H>,
}

impl<H: HttpClient> Session<'_, H> {
    /// Retrieves the custom records configured under the domain.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::RecordListFailed`] on a non-success
    /// response and [`ProviderError::Json`] when the body is not the
    /// expected envelope.
    pub async fn custom_records(
        &self,
        domain: &str,
    ) -> Result<Vec<RecordDescriptor>, ProviderError> {
        let url = parse_url(&format!("{API_BASE}/domains/{domain}/dns/custom_records"))?;
        let response = self.client.http.request(HttpRequest::get(url)).await?;

        if !response.is_success() {
            return Err(ProviderError::RecordListFailed {
                status: response.status,
            });
        }

        let records = super::records::parse_records(&response.body)?;
        for record in &records {
            debug!(
                "{}: {} ({}) - {}",
                record.id, record.prefix, record.record_type, record.content
            );
        }
        Ok(records)
    }

    /// Patches one record with new attributes.
    ///
    /// A-record content must look like a dotted-quad IPv4 address; the
    /// check runs before anything goes on the wire.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::InvalidAddress`] for content failing the
    /// local check and [`ProviderError::UpdateFailed`] on a non-200
    /// response.
    pub async fn update_record(
        &self,
        domain: &str,
        id: &str,
        update: &RecordUpdate,
    ) -> Result<(), ProviderError> {
        if update.record_type == RecordType::A && !is_valid_ipv4(&update.content) {
            return Err(ProviderError::InvalidAddress {
                value: update.content.clone(),
            });
        }

        let url = parse_url(&format!(
            "{API_BASE}/domains/{domain}/dns/custom_records/{id}"
        ))?;
        let request = HttpRequest::patch(url)
            .with_header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .with_body(update.to_payload(id)?);

        let response = self.client.http.request(request).await?;
        debug!("Update status code is {}", response.status);

        if response.status != http::StatusCode::OK {
            return Err(ProviderError::UpdateFailed {
                id: id.to_string(),
                status: response.status,
            });
        }
        Ok(())
    }

    /// Closes the session on the provider side.
    ///
    /// Failures are logged, never propagated; there is nothing the caller
    /// could do about them, and the run's real result must not be masked.
    pub async fn logout(self) {
        debug!("Logging out");
        let request = match parse_url(LOGOUT_URL) {
            Ok(url) => HttpRequest::get(url),
            Err(e) => {
                warn!("Logout skipped: {e}");
                return;
            }
        };
        match self.client.http.request(request).await {
            Ok(_) => debug!("Session closed"),
            Err(e) => warn!("Logout request failed: {e}"),
        }
    }

    /// The list, find, and patch part of the workflow.
    async fn run_update(
        &self,
        fqdn: &Fqdn,
        content: &str,
        ttl: u32,
        simulate: bool,
    ) -> Result<UpdateOutcome, ProviderError> {
        let records = self.custom_records(fqdn.domain()).await?;

        let Some(record) = find_by_prefix(&records, fqdn.subdomain()) else {
            error!(
                "No custom record with prefix '{}' under {}",
                fqdn.subdomain(),
                fqdn.domain()
            );
            return Ok(UpdateOutcome::RecordMissing);
        };

        if simulate {
            warn!(
                "Simulation only: not updating {fqdn} ({}) to {content}",
                record.id
            );
            return Ok(UpdateOutcome::Simulated);
        }

        let update = RecordUpdate::address(fqdn.subdomain(), content, ttl);
        self.update_record(fqdn.domain(), &record.id, &update)
            .await?;
        info!("Updated record: {fqdn} ({})  IN  A  {content}", record.id);
        Ok(UpdateOutcome::Applied)
    }
}

fn parse_url(raw: &str) -> Result<Url, ProviderError> {
    Url::parse(raw).map_err(|e| ProviderError::Http(HttpError::InvalidUrl(e.to_string())))
}
