use audit_catalog::CatalogContext;
use audit_config::AuditConfig;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: AuditConfig,
    pub catalog: CatalogContext,
}

impl AppContext {
    /// Build the catalog context from the inventory settings. Nothing is read
    /// until the first query.
    #[must_use]
    pub fn init(config: AuditConfig) -> Self {
        let catalog = CatalogContext::from_config(&config.inventory);
        tracing::debug!(
            inventory = %catalog.loader().path().display(),
            "catalog context ready"
        );
        Self { config, catalog }
    }

    #[must_use]
    pub const fn default_limit(&self) -> u32 {
        self.config.general.default_limit
    }
}
