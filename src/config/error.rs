//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

use crate::dns::FqdnError;

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, and file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Missing required field that must be provided by CLI or config file.
    #[error("Missing required field: {field}. {hint}")]
    MissingRequired {
        /// Name of the missing field
        field: &'static str,
        /// Hint for how to provide the value
        hint: &'static str,
    },

    /// The configured record name is not a valid three-label FQDN.
    #[error("Invalid fqdn '{value}': {source}")]
    InvalidFqdn {
        /// The invalid name
        value: String,
        /// The violated label rule
        #[source]
        source: FqdnError,
    },

    /// The configured TTL is not a positive number of seconds.
    #[error("Invalid ttl: must be greater than 0")]
    InvalidTtl,

    /// The configured log level is not one of the recognized names.
    #[error("Invalid log level '{value}': expected error, warn, info, debug, or trace")]
    InvalidLogLevel {
        /// The invalid value provided
        value: String,
    },
}

/// Well-known field names for `MissingRequired` errors.
pub mod field {
    /// The account username field.
    pub const USERNAME: &str = "username";
    /// The account password field.
    pub const PASSWORD: &str = "password";
    /// The target record name field.
    pub const FQDN: &str = "fqdn";
}

impl ConfigError {
    /// Creates a `MissingRequired` error for a required field.
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }
}
