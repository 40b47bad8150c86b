//! Configuration layer for onecom-ddns.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest
//! to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! Required fields without defaults (`username`, `password`, `fqdn`) must
//! come from the CLI or the file; CLI takes precedence.
//!
//! # Boolean Flag Semantics
//!
//! Boolean flags (`--force`, `--simulate`) use OR semantics: set `true` in
//! either CLI or TOML, the result is `true`. Once set in TOML, the CLI
//! cannot override back to `false` (flags only enable, not disable).

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod cli_tests;
#[cfg(test)]
mod toml_tests;

pub use cli::{Cli, Command, LogLevelArg};
pub use error::{field, ConfigError};
pub use toml::{default_config_template, TomlConfig};
pub use validated::{write_default_config, ValidatedConfig};
