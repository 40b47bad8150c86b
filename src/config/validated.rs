//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;

use tracing::Level;

use crate::dns::Fqdn;

use super::cli::Cli;
use super::defaults;
use super::error::{field, ConfigError};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// All required fields are present and all values have been validated.
/// Use [`ValidatedConfig::load`] to build one from parsed CLI arguments.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// one.com account username
    pub username: String,

    /// one.com account password
    pub password: String,

    /// The record to keep up to date
    pub fqdn: Fqdn,

    /// Record TTL in seconds (positive)
    pub ttl: u32,

    /// Update even when the published address matches
    pub force: bool,

    /// Skip the record write
    pub simulate: bool,

    /// Log verbosity
    pub log_level: Level,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // the password never goes to the log
        write!(
            f,
            "Config {{ fqdn: {}, ttl: {}s, user: {}, force: {}, simulate: {}, log: {} }}",
            self.fqdn, self.ttl, self.username, self.force, self.simulate, self.log_level,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional
    /// TOML config.
    ///
    /// CLI arguments take precedence over TOML config values; boolean
    /// flags use OR semantics.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required fields are missing (`username`, `password`, `fqdn`)
    /// - The FQDN is not a valid three-label name
    /// - The TTL is zero
    /// - The log level is not a recognized name
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let username = Self::resolve_required(
            cli.username.as_deref(),
            toml.and_then(|t| t.account.username.as_deref()),
            field::USERNAME,
            "Use --username or set account.username in the config file",
        )?;

        let password = Self::resolve_required(
            cli.password.as_deref(),
            toml.and_then(|t| t.account.password.as_deref()),
            field::PASSWORD,
            "Use --password or set account.password in the config file",
        )?;

        let fqdn = Self::resolve_fqdn(cli, toml)?;
        let ttl = Self::resolve_ttl(cli, toml)?;
        let log_level = Self::resolve_log_level(cli, toml)?;

        // flags only enable, never disable
        let force = cli.force || toml.is_some_and(|t| t.update.force);
        let simulate = cli.simulate || toml.is_some_and(|t| t.update.simulate);

        Ok(Self {
            username,
            password,
            fqdn,
            ttl,
            force,
            simulate,
            log_level,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed, or
    /// the merged configuration is invalid.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_required(
        cli_value: Option<&str>,
        toml_value: Option<&str>,
        name: &'static str,
        hint: &'static str,
    ) -> Result<String, ConfigError> {
        cli_value
            .or(toml_value)
            .map(ToString::to_string)
            .ok_or(ConfigError::missing(name, hint))
    }

    fn resolve_fqdn(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Fqdn, ConfigError> {
        let value = cli
            .fqdn
            .as_deref()
            .or_else(|| toml.and_then(|t| t.record.fqdn.as_deref()))
            .ok_or(ConfigError::missing(
                field::FQDN,
                "Use --fqdn or set record.fqdn in the config file",
            ))?;

        Fqdn::parse(value).map_err(|e| ConfigError::InvalidFqdn {
            value: value.to_string(),
            source: e,
        })
    }

    fn resolve_ttl(cli: &Cli, toml: Option<&TomlConfig>) -> Result<u32, ConfigError> {
        let ttl = cli
            .ttl
            .or_else(|| toml.and_then(|t| t.record.ttl))
            .unwrap_or(defaults::TTL_SECS);

        if ttl == 0 {
            return Err(ConfigError::InvalidTtl);
        }
        Ok(ttl)
    }

    fn resolve_log_level(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Level, ConfigError> {
        if let Some(level) = cli.log_level {
            return Ok(level.into());
        }

        if let Some(value) = toml.and_then(|t| t.log_level.as_deref()) {
            return parse_log_level(value);
        }

        Ok(defaults::LOG_LEVEL)
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

fn parse_log_level(s: &str) -> Result<Level, ConfigError> {
    match s.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" | "warning" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        _ => Err(ConfigError::InvalidLogLevel {
            value: s.to_string(),
        }),
    }
}
