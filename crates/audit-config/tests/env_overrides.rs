use audit_config::AuditConfig;
use figment::Jail;

fn load() -> figment::error::Result<AuditConfig> {
    AuditConfig::from_figment(&AuditConfig::figment()).map_err(|e| e.to_string().into())
}

#[test]
fn base_path_env_sets_inventory_location() {
    Jail::expect_with(|jail| {
        jail.set_env("AUDITS_BASE_PATH", "/srv/audits");
        let config = load()?;
        assert_eq!(config.inventory.base_path, "/srv/audits");
        assert_eq!(
            config.inventory.inventory_path(),
            std::path::PathBuf::from("/srv/audits/AUDIT-INVENTORY.csv")
        );
        Ok(())
    });
}

#[test]
fn empty_base_path_env_falls_back_to_default() {
    Jail::expect_with(|jail| {
        jail.set_env("AUDITS_BASE_PATH", "");
        let config = load()?;
        assert_eq!(config.inventory.base_path, audit_config::DEFAULT_BASE_PATH);
        Ok(())
    });
}

#[test]
fn base_path_env_beats_prefixed_override() {
    Jail::expect_with(|jail| {
        jail.set_env("AUDIT_BROWSER_INVENTORY__BASE_PATH", "/from/prefixed");
        jail.set_env("AUDITS_BASE_PATH", "/from/bare");
        let config = load()?;
        assert_eq!(config.inventory.base_path, "/from/bare");
        Ok(())
    });
}

#[test]
fn prefixed_env_overrides_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("AUDIT_BROWSER_INVENTORY__STRICT", "true");
        jail.set_env("AUDIT_BROWSER_SERVE__PORT", "8088");
        jail.set_env("AUDIT_BROWSER_EXPORT__PRETTY", "true");
        let config = load()?;
        assert!(config.inventory.strict);
        assert_eq!(config.serve.port, 8088);
        assert!(config.export.pretty);
        Ok(())
    });
}
