//! Landing-page scraping for the login flow.
//!
//! The console's login form posts to a URL that rotates per visit (a
//! session code embedded in the action attribute), so it has to be pulled
//! out of the landing-page markup on every run. The extraction strategy is
//! isolated here; swapping the regexes for a DOM query would not touch the
//! session workflow.

use std::sync::OnceLock;

use regex::Regex;

/// Marker element rendered on the login page when credentials are bad.
const ERROR_MARKER: &str = r#"<div class="alert alert-error">"#;

fn form_action_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"<form id="kc-form-login"[^>]*action="([^"]+)""#)
            .expect("login form pattern is valid")
    })
}

fn feedback_text_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"<span class="kc-feedback-text">([^<]*)</span>"#)
            .expect("feedback text pattern is valid")
    })
}

/// Extracts the current login form action URL from the landing page.
///
/// Returns `None` when the form is missing, which the caller must treat
/// as a fatal login failure.
pub(crate) fn extract_login_action(html: &str) -> Option<String> {
    form_action_re()
        .captures(html)
        .map(|captures| captures[1].replace("&amp;", "&"))
}

/// Returns true when the response body carries the login-error marker.
///
/// The provider renders bad-credential pages with status 200; this marker
/// is the only reliable failure signal.
pub(crate) fn has_error_marker(html: &str) -> bool {
    html.contains(ERROR_MARKER)
}

/// Extracts the human-readable failure message from a login-error page.
pub(crate) fn extract_error_message(html: &str) -> Option<String> {
    feedback_text_re()
        .captures(html)
        .map(|captures| captures[1].trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LANDING: &str = r#"<html><body>
        <form id="kc-form-login" class="Login-form login autofill"
              action="https://account.example.com/auth/authenticate?session_code=Oj9Cmq&amp;execution=18715cea&amp;client_id=crm-appsrv"
              method="post">
        </form></body></html>"#;

    #[test]
    fn extracts_and_unescapes_the_action_url() {
        let action = extract_login_action(LANDING).unwrap();
        assert_eq!(
            action,
            "https://account.example.com/auth/authenticate?session_code=Oj9Cmq&execution=18715cea&client_id=crm-appsrv"
        );
    }

    #[test]
    fn missing_form_yields_none() {
        assert!(extract_login_action("<html><body>maintenance</body></html>").is_none());
        assert!(extract_login_action("").is_none());
    }

    #[test]
    fn detects_the_error_marker() {
        let body = r#"<div class="alert alert-error"><span class="kc-feedback-text">Invalid username or password.</span></div>"#;
        assert!(has_error_marker(body));
        assert!(!has_error_marker("<html>welcome back</html>"));
    }

    #[test]
    fn extracts_the_feedback_message() {
        let body = r#"<span class="kc-feedback-text">Invalid username or password.</span>"#;
        assert_eq!(
            extract_error_message(body).as_deref(),
            Some("Invalid username or password.")
        );
    }

    #[test]
    fn marker_without_feedback_text_yields_none() {
        let body = r#"<div class="alert alert-error"></div>"#;
        assert!(has_error_marker(body));
        assert!(extract_error_message(body).is_none());
    }
}
