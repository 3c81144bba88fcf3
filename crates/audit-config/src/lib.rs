//! # audit-config
//!
//! Layered configuration loading for the audit browser using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. `AUDITS_BASE_PATH` (base location of the inventory CSV)
//! 2. Environment variables (`AUDIT_BROWSER_*` prefix, `__` as separator)
//! 3. Project-level `./audit-browser.toml`
//! 4. User-level `~/.config/audit-browser/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `AUDIT_BROWSER_INVENTORY__STRICT` -> `inventory.strict`,
//! `AUDIT_BROWSER_SERVE__PORT` -> `serve.port`, etc. `AUDITS_BASE_PATH` is read
//! without a prefix and maps to `inventory.base_path`.
//!
//! # Usage
//!
//! ```no_run
//! use audit_config::AuditConfig;
//!
//! let config = AuditConfig::load_with_dotenv().expect("config");
//! println!("inventory: {}", config.inventory.inventory_path().display());
//! ```

mod error;
mod export;
mod general;
mod inventory;
mod serve;

pub use error::ConfigError;
pub use export::ExportConfig;
pub use general::GeneralConfig;
pub use inventory::{DEFAULT_BASE_PATH, DEFAULT_FILE_NAME, InventoryConfig};
pub use serve::ServeConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the environment variable holding the inventory's base location.
pub const BASE_PATH_ENV: &str = "AUDITS_BASE_PATH";

/// Prefix of the structured environment overrides.
pub const ENV_PREFIX: &str = "AUDIT_BROWSER_";

/// Project-local config file name.
pub const LOCAL_CONFIG_FILE: &str = "audit-browser.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuditConfig {
    #[serde(default)]
    pub inventory: InventoryConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub serve: ServeConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl AuditConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support from the current directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and normalize a config from an arbitrary figment.
    ///
    /// An empty base path falls back to [`DEFAULT_BASE_PATH`], the same as an
    /// unset one.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let mut config: Self = figment.extract()?;
        if config.inventory.base_path.trim().is_empty() {
            config.inventory.base_path = DEFAULT_BASE_PATH.to_string();
        }
        config.inventory.validate()?;
        config.serve.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Structured environment overrides
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        // Layer 4: The bare base-path variable (highest priority)
        figment.merge(
            Env::raw()
                .only(&[BASE_PATH_ENV])
                .map(|_| "inventory.base_path".into()),
        )
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("audit-browser").join("config.toml"))
    }
}
