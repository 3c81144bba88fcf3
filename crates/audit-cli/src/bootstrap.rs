use std::path::Path;

use anyhow::Context;
use audit_config::AuditConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, then the layered config, then apply `--base-path`.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<AuditConfig> {
    load_dotenv(flags.base_path.as_deref())?;

    let mut config = AuditConfig::load().context("failed to load audit-browser configuration")?;
    if let Some(base_path) = flags.base_path.as_deref().filter(|p| !p.trim().is_empty()) {
        config.inventory.base_path = base_path.to_string();
    }

    tracing::debug!(
        inventory = %config.inventory.inventory_path().display(),
        strict = config.inventory.strict,
        "configuration loaded"
    );
    Ok(config)
}

fn load_dotenv(base_path: Option<&str>) -> anyhow::Result<()> {
    if let Some(base) = base_path {
        let env_path = Path::new(base).join(".env");
        if env_path.exists() {
            dotenvy::from_path(&env_path)
                .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
            return Ok(());
        }
    }

    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded dotenv file");
            Ok(())
        }
        Err(error) if error.not_found() => Ok(()),
        Err(error) => Err(error).context("failed to load dotenv file"),
    }
}
