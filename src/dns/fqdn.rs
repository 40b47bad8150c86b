//! The validated target name.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Maximum length of a DNS label.
const MAX_LABEL_LENGTH: usize = 63;

/// A fully qualified domain name of exactly three labels
/// (`host.domain.tld`).
///
/// The leftmost label is the subdomain prefix that identifies the record
/// at the provider; the remaining two labels form the domain the record
/// lives under. Each label must be 1–63 characters of letters, digits,
/// and hyphens, with no hyphen at either end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fqdn {
    subdomain: String,
    domain: String,
}

impl Fqdn {
    /// Parses and validates a three-label name.
    ///
    /// # Errors
    ///
    /// Returns [`FqdnError`] naming the violated rule: wrong label count,
    /// a label that is empty or too long, a hyphen at a label edge, or a
    /// character outside `[A-Za-z0-9-]`.
    pub fn parse(value: &str) -> Result<Self, FqdnError> {
        let labels: Vec<&str> = value.split('.').collect();
        if labels.len() != 3 {
            return Err(FqdnError::LabelCount {
                count: labels.len(),
            });
        }

        for label in &labels {
            validate_label(label)?;
        }

        Ok(Self {
            subdomain: labels[0].to_string(),
            domain: format!("{}.{}", labels[1], labels[2]),
        })
    }

    /// The leftmost label, identifying the record under the domain.
    #[must_use]
    pub fn subdomain(&self) -> &str {
        &self.subdomain
    }

    /// The two-label domain the record belongs to.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }
}

impl fmt::Display for Fqdn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.subdomain, self.domain)
    }
}

impl FromStr for Fqdn {
    type Err = FqdnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn validate_label(label: &str) -> Result<(), FqdnError> {
    if label.is_empty() || label.len() > MAX_LABEL_LENGTH {
        return Err(FqdnError::LabelLength {
            label: label.to_string(),
        });
    }
    if label.starts_with('-') || label.ends_with('-') {
        return Err(FqdnError::HyphenEdge {
            label: label.to_string(),
        });
    }
    if !label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-') {
        return Err(FqdnError::InvalidCharacter {
            label: label.to_string(),
        });
    }
    Ok(())
}

/// Error type for target-name validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FqdnError {
    /// The name does not have exactly three dot-separated labels.
    #[error("expected exactly three dot-separated labels (host.domain.tld), got {count}")]
    LabelCount {
        /// Number of labels found
        count: usize,
    },

    /// A label is empty or longer than 63 characters.
    #[error("label '{label}' must be 1-63 characters long")]
    LabelLength {
        /// The offending label
        label: String,
    },

    /// A label starts or ends with a hyphen.
    #[error("label '{label}' must not start or end with a hyphen")]
    HyphenEdge {
        /// The offending label
        label: String,
    },

    /// A label contains a character outside letters, digits, and hyphens.
    #[error("label '{label}' contains characters outside [A-Za-z0-9-]")]
    InvalidCharacter {
        /// The offending label
        label: String,
    },
}
