//! Tests for CLI argument parsing.

use super::cli::{Cli, Command, LogLevelArg};

#[test]
fn parses_with_no_arguments() {
    let cli = Cli::parse_from_iter(["onecom-ddns"]);
    assert!(cli.command.is_none());
    assert!(cli.username.is_none());
    assert!(cli.password.is_none());
    assert!(cli.fqdn.is_none());
    assert!(cli.ttl.is_none());
    assert!(!cli.force);
    assert!(!cli.simulate);
    assert!(cli.log_level.is_none());
    assert!(!cli.is_init());
}

#[test]
fn parses_all_run_options() {
    let cli = Cli::parse_from_iter([
        "onecom-ddns",
        "--config",
        "/etc/onecom-ddns.toml",
        "--username",
        "you@example.com",
        "--password",
        "secret",
        "--fqdn",
        "dyn.example.com",
        "--ttl",
        "600",
        "--force",
        "--simulate",
        "--log-level",
        "debug",
    ]);

    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/etc/onecom-ddns.toml"))
    );
    assert_eq!(cli.username.as_deref(), Some("you@example.com"));
    assert_eq!(cli.password.as_deref(), Some("secret"));
    assert_eq!(cli.fqdn.as_deref(), Some("dyn.example.com"));
    assert_eq!(cli.ttl, Some(600));
    assert!(cli.force);
    assert!(cli.simulate);
    assert_eq!(cli.log_level, Some(LogLevelArg::Debug));
}

#[test]
fn short_flags_work() {
    let cli = Cli::parse_from_iter(["onecom-ddns", "-c", "cfg.toml", "-t", "60"]);
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("cfg.toml")));
    assert_eq!(cli.ttl, Some(60));
}

#[test]
fn parses_the_init_subcommand() {
    let cli = Cli::parse_from_iter(["onecom-ddns", "init"]);
    assert!(cli.is_init());
    match cli.command {
        Some(Command::Init { output }) => {
            assert_eq!(output, std::path::PathBuf::from("onecom-ddns.toml"));
        }
        _ => panic!("expected init command"),
    }
}

#[test]
fn init_accepts_a_custom_output_path() {
    let cli = Cli::parse_from_iter(["onecom-ddns", "init", "--output", "/tmp/my.toml"]);
    match cli.command {
        Some(Command::Init { output }) => {
            assert_eq!(output, std::path::PathBuf::from("/tmp/my.toml"));
        }
        _ => panic!("expected init command"),
    }
}

#[test]
fn log_level_converts_to_tracing_levels() {
    assert_eq!(tracing::Level::from(LogLevelArg::Error), tracing::Level::ERROR);
    assert_eq!(tracing::Level::from(LogLevelArg::Warn), tracing::Level::WARN);
    assert_eq!(tracing::Level::from(LogLevelArg::Info), tracing::Level::INFO);
    assert_eq!(tracing::Level::from(LogLevelArg::Debug), tracing::Level::DEBUG);
    assert_eq!(tracing::Level::from(LogLevelArg::Trace), tracing::Level::TRACE);
}
