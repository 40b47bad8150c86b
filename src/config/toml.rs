//! TOML configuration file parsing.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Log verbosity level: "error", "warn", "info", "debug", or "trace"
    pub log_level: Option<String>,

    /// Account credentials
    #[serde(default)]
    pub account: AccountSection,

    /// Target record settings
    #[serde(default)]
    pub record: RecordSection,

    /// Update behavior flags
    #[serde(default)]
    pub update: UpdateSection,
}

/// Account credentials section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccountSection {
    /// one.com account username
    pub username: Option<String>,

    /// one.com account password
    pub password: Option<String>,
}

/// Target record section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordSection {
    /// Name of the record to update (three labels, e.g. "dyn.example.com")
    pub fqdn: Option<String>,

    /// Record TTL in seconds
    pub ttl: Option<u32>,
}

/// Update behavior section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateSection {
    /// Update the record even when the published address matches
    #[serde(default)]
    pub force: bool,

    /// Skip the record write, log what would have happened
    #[serde(default)]
    pub simulate: bool,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# onecom-ddns configuration file

# Log verbosity: "error", "warn", "info", "debug", or "trace"
# log_level = "info"

[account]
# one.com account credentials (required)
# username = "you@example.com"
# password = "secret"

[record]
# Name of the record to update: exactly host.domain.tld (required)
# fqdn = "dyn.example.com"

# Record TTL in seconds (default: 3600)
# ttl = 3600

[update]
# Update the record even when the published address already matches
force = false

# Run every lookup and decision but skip the record write
simulate = false
"#
    .to_string()
}
