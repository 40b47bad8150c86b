//! CLI argument parsing using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// onecom-ddns: Dynamic DNS updater for one.com
///
/// Compares the published address of a host against the machine's public
/// IPv4 address and updates the corresponding A record when they differ.
#[derive(Debug, Parser)]
#[command(name = "onecom-ddns")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// one.com account username
    #[arg(long)]
    pub username: Option<String>,

    /// one.com account password
    #[arg(long)]
    pub password: Option<String>,

    /// Name of the record to update, e.g. dyn.example.com
    #[arg(long, allow_hyphen_values = true)]
    pub fqdn: Option<String>,

    /// Record TTL in seconds
    #[arg(long, short = 't')]
    pub ttl: Option<u32>,

    /// Update the record even when the published address already matches
    #[arg(long)]
    pub force: bool,

    /// Run every lookup and decision but skip the record write
    #[arg(long)]
    pub simulate: bool,

    /// Log verbosity level
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,
}

/// Subcommands for onecom-ddns
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "onecom-ddns.toml")]
        output: PathBuf,
    },
}

/// Log level argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevelArg {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages (default)
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl From<LogLevelArg> for tracing::Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
            LogLevelArg::Trace => Self::TRACE,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
