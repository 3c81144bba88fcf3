//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed file and env var manipulation.

use audit_config::AuditConfig;
use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[inventory]
base_path = "/data/audits"
file_name = "inventory.csv"
strict = true

[export]
output_path = "build/data/audits.json"
pretty = true

[serve]
host = "0.0.0.0"
port = 9000

[general]
default_limit = 10
"#,
        )?;

        let config: AuditConfig = Figment::from(Serialized::defaults(AuditConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.inventory.base_path, "/data/audits");
        assert_eq!(config.inventory.file_name, "inventory.csv");
        assert!(config.inventory.strict);
        assert_eq!(config.export.output_path, "build/data/audits.json");
        assert!(config.export.pretty);
        assert_eq!(config.serve.bind_addr(), "0.0.0.0:9000");
        assert_eq!(config.general.default_limit, 10);
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[serve]
port = 5000
"#,
        )?;

        let config: AuditConfig = Figment::from(Serialized::defaults(AuditConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.serve.port, 5000);
        assert_eq!(config.serve.host, "127.0.0.1");
        assert_eq!(config.inventory.file_name, "AUDIT-INVENTORY.csv");
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[inventory]
base_path = "/from/toml"
"#,
        )?;
        jail.set_env("AUDIT_BROWSER_INVENTORY__BASE_PATH", "/from/env");

        let config: AuditConfig = Figment::from(Serialized::defaults(AuditConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("AUDIT_BROWSER_").split("__"))
            .extract()?;

        assert_eq!(config.inventory.base_path, "/from/env");
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "audit-browser.toml",
            r#"
[export]
output_path = "dist/audits.json"
"#,
        )?;

        let config =
            AuditConfig::from_figment(&AuditConfig::figment()).map_err(|e| e.to_string())?;
        assert_eq!(config.export.output_path, "dist/audits.json");
        Ok(())
    });
}

#[test]
fn blank_file_name_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "audit-browser.toml",
            r#"
[inventory]
file_name = ""
"#,
        )?;

        let result = AuditConfig::from_figment(&AuditConfig::figment());
        assert!(result.is_err());
        Ok(())
    });
}
