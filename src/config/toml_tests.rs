//! Tests for TOML configuration parsing.

use super::toml::{default_config_template, TomlConfig};

mod parsing {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let toml = r#"
            [account]
            username = "you@example.com"
            password = "secret"

            [record]
            fqdn = "dyn.example.com"
        "#;

        let config = TomlConfig::parse(toml).unwrap();
        assert_eq!(config.account.username.as_deref(), Some("you@example.com"));
        assert_eq!(config.account.password.as_deref(), Some("secret"));
        assert_eq!(config.record.fqdn.as_deref(), Some("dyn.example.com"));
        assert!(config.record.ttl.is_none());
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
            log_level = "debug"

            [account]
            username = "you@example.com"
            password = "secret"

            [record]
            fqdn = "dyn.example.com"
            ttl = 600

            [update]
            force = true
            simulate = true
        "#;

        let config = TomlConfig::parse(toml).unwrap();
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.record.ttl, Some(600));
        assert!(config.update.force);
        assert!(config.update.simulate);
    }

    #[test]
    fn parse_empty_config() {
        let config = TomlConfig::parse("").unwrap();
        assert!(config.account.username.is_none());
        assert!(config.account.password.is_none());
        assert!(config.record.fqdn.is_none());
        assert!(!config.update.force);
        assert!(!config.update.simulate);
        assert!(config.log_level.is_none());
    }

    #[test]
    fn reject_unknown_fields() {
        let toml = r#"
            [account]
            username = "you@example.com"
            passwrod = "typo"
        "#;
        assert!(TomlConfig::parse(toml).is_err());

        let toml = r#"
            [recrod]
            fqdn = "dyn.example.com"
        "#;
        assert!(TomlConfig::parse(toml).is_err());
    }

    #[test]
    fn reject_invalid_toml() {
        assert!(TomlConfig::parse("account = [").is_err());
        assert!(TomlConfig::parse("[record]\nttl = \"soon\"").is_err());
    }
}

mod template {
    use super::*;

    #[test]
    fn template_is_valid_toml() {
        let template = default_config_template();
        let config = TomlConfig::parse(&template).unwrap();

        // commented-out options stay unset, flags carry their defaults
        assert!(config.account.username.is_none());
        assert!(!config.update.force);
        assert!(!config.update.simulate);
    }

    #[test]
    fn template_documents_every_section() {
        let template = default_config_template();
        assert!(template.contains("[account]"));
        assert!(template.contains("[record]"));
        assert!(template.contains("[update]"));
        assert!(template.contains("log_level"));
    }
}
