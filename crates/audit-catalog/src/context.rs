//! Memoized query interface over one inventory file.
//!
//! [`CatalogContext`] owns the caches for the loaded inventory, the
//! navigation tree, and the search index. Each is built on first use and kept
//! until [`CatalogContext::clear_cache`]. A failed load is not cached; the
//! next call retries.
//!
//! The context is single-owner state. Concurrent servers hold one context
//! per worker.

use std::cell::OnceCell;

use audit_config::InventoryConfig;
use audit_core::{
    CatalogExport, CatalogStats, DataIssue, FilterCriteria, FilterOptions, InventoryRecord,
    NavCategory, NavSubcategory, SearchHit,
};
use audit_search::{SearchIndex, apply_filters, search_records};

use crate::error::CatalogError;
use crate::export::export_with_navigation;
use crate::loader::{Inventory, InventoryLoader};
use crate::navigation::build_navigation;
use crate::stats::{compute_stats, filter_options};

#[derive(Debug)]
pub struct CatalogContext {
    loader: InventoryLoader,
    inventory: OnceCell<Inventory>,
    navigation: OnceCell<Vec<NavCategory>>,
    search_index: OnceCell<SearchIndex>,
}

impl CatalogContext {
    #[must_use]
    pub const fn new(loader: InventoryLoader) -> Self {
        Self {
            loader,
            inventory: OnceCell::new(),
            navigation: OnceCell::new(),
            search_index: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn from_config(config: &InventoryConfig) -> Self {
        Self::new(InventoryLoader::from_config(config))
    }

    #[must_use]
    pub const fn loader(&self) -> &InventoryLoader {
        &self.loader
    }

    /// The loaded inventory, reading the file on first use.
    ///
    /// # Errors
    ///
    /// Propagates [`InventoryLoader::load`] failures.
    pub fn inventory(&self) -> Result<&Inventory, CatalogError> {
        if let Some(inventory) = self.inventory.get() {
            return Ok(inventory);
        }
        let inventory = self.loader.load()?;
        Ok(self.inventory.get_or_init(|| inventory))
    }

    /// # Errors
    ///
    /// Propagates inventory load failures.
    pub fn records(&self) -> Result<&[InventoryRecord], CatalogError> {
        Ok(&self.inventory()?.records)
    }

    /// Rows skipped while loading.
    ///
    /// # Errors
    ///
    /// Propagates inventory load failures.
    pub fn issues(&self) -> Result<&[DataIssue], CatalogError> {
        Ok(&self.inventory()?.issues)
    }

    /// # Errors
    ///
    /// Propagates inventory load failures.
    pub fn navigation(&self) -> Result<&[NavCategory], CatalogError> {
        if let Some(navigation) = self.navigation.get() {
            return Ok(navigation);
        }
        let navigation = build_navigation(self.records()?);
        tracing::debug!(categories = navigation.len(), "built navigation tree");
        Ok(self.navigation.get_or_init(|| navigation))
    }

    /// # Errors
    ///
    /// Propagates inventory load failures.
    pub fn search_index(&self) -> Result<&SearchIndex, CatalogError> {
        if let Some(index) = self.search_index.get() {
            return Ok(index);
        }
        let index = SearchIndex::build(self.records()?);
        Ok(self.search_index.get_or_init(|| index))
    }

    /// Records matching `query`, then narrowed by `criteria`.
    ///
    /// # Errors
    ///
    /// Propagates inventory load failures.
    pub fn search(
        &self,
        query: &str,
        criteria: Option<&FilterCriteria>,
    ) -> Result<Vec<SearchHit>, CatalogError> {
        let hits = search_records(self.search_index()?, self.records()?, query, criteria);
        tracing::debug!(query, hits = hits.len(), "search");
        Ok(hits)
    }

    /// Records satisfying `criteria`, in inventory order.
    ///
    /// # Errors
    ///
    /// Propagates inventory load failures.
    pub fn filter(
        &self,
        criteria: &FilterCriteria,
    ) -> Result<Vec<&InventoryRecord>, CatalogError> {
        Ok(apply_filters(self.records()?, criteria))
    }

    /// # Errors
    ///
    /// Propagates inventory load failures.
    pub fn audit(&self, audit_id: &str) -> Result<Option<&InventoryRecord>, CatalogError> {
        Ok(self.records()?.iter().find(|r| r.audit_id == audit_id))
    }

    /// # Errors
    ///
    /// Propagates inventory load failures.
    pub fn audits_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<&InventoryRecord>, CatalogError> {
        Ok(self
            .records()?
            .iter()
            .filter(|r| r.category == category)
            .collect())
    }

    /// # Errors
    ///
    /// Propagates inventory load failures.
    pub fn audits_by_subcategory(
        &self,
        category: &str,
        subcategory: &str,
    ) -> Result<Vec<&InventoryRecord>, CatalogError> {
        Ok(self
            .records()?
            .iter()
            .filter(|r| r.category == category && r.subcategory == subcategory)
            .collect())
    }

    /// Navigation node for a category slug.
    ///
    /// # Errors
    ///
    /// Propagates inventory load failures.
    pub fn category(&self, slug: &str) -> Result<Option<&NavCategory>, CatalogError> {
        Ok(self.navigation()?.iter().find(|c| c.slug == slug))
    }

    /// Navigation node for a subcategory within a category.
    ///
    /// # Errors
    ///
    /// Propagates inventory load failures.
    pub fn subcategory(
        &self,
        category: &str,
        subcategory: &str,
    ) -> Result<Option<&NavSubcategory>, CatalogError> {
        Ok(self
            .category(category)?
            .and_then(|node| node.subcategory(subcategory)))
    }

    /// # Errors
    ///
    /// Propagates inventory load failures.
    pub fn stats(&self) -> Result<CatalogStats, CatalogError> {
        Ok(compute_stats(self.records()?))
    }

    /// # Errors
    ///
    /// Propagates inventory load failures.
    pub fn filter_options(&self) -> Result<FilterOptions, CatalogError> {
        Ok(filter_options(self.records()?))
    }

    /// # Errors
    ///
    /// Propagates inventory load failures.
    pub fn export(&self) -> Result<CatalogExport, CatalogError> {
        Ok(export_with_navigation(
            self.records()?,
            self.navigation()?.to_vec(),
        ))
    }

    /// Drop every cache. The next query reloads the inventory file.
    pub fn clear_cache(&mut self) {
        self.inventory.take();
        self.navigation.take();
        self.search_index.take();
        tracing::info!(path = %self.loader.path().display(), "cleared catalog cache");
    }

    /// Whether the inventory has been loaded since the last clear.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.inventory.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    const CSV: &str = "\
audit_id,file_path,audit_name,category,category_number,subcategory,tier,status,fully_automated
1.1.sqli,a.yaml,SQL Injection,security,1,input-validation,expert,active,yes
1.2.xss,b.yaml,Cross Site Scripting,security,1,output-encoding,focused,planned,no
2.1.deploy,c.yaml,Deployment Review,operations,2,release,standard,active,yes
";

    fn write_csv(dir: &tempfile::TempDir, body: &str) -> std::path::PathBuf {
        let path = dir.path().join("AUDIT-INVENTORY.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn lookups_share_one_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, CSV);
        let ctx = CatalogContext::new(InventoryLoader::new(&path));

        assert!(!ctx.is_loaded());
        assert_eq!(ctx.records().unwrap().len(), 3);
        assert!(ctx.is_loaded());

        // Removing the file does not affect a loaded context.
        std::fs::remove_file(&path).unwrap();
        assert_eq!(
            ctx.audit("1.2.xss").unwrap().unwrap().audit_name,
            "Cross Site Scripting"
        );
        assert_eq!(ctx.audits_by_category("security").unwrap().len(), 2);
        assert_eq!(
            ctx.audits_by_subcategory("security", "input-validation")
                .unwrap()
                .len(),
            1
        );
        assert!(ctx.audit("9.9.none").unwrap().is_none());
        assert_eq!(ctx.navigation().unwrap().len(), 2);
    }

    #[test]
    fn clear_cache_reloads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, CSV);
        let mut ctx = CatalogContext::new(InventoryLoader::new(&path));
        assert_eq!(ctx.stats().unwrap().total, 3);

        write_csv(&dir, &CSV.lines().take(2).collect::<Vec<_>>().join("\n"));
        assert_eq!(ctx.stats().unwrap().total, 3);

        ctx.clear_cache();
        assert!(!ctx.is_loaded());
        assert_eq!(ctx.stats().unwrap().total, 1);
        assert_eq!(ctx.navigation().unwrap().len(), 1);
        assert_eq!(ctx.search("deploy", None).unwrap().len(), 0);
    }

    #[test]
    fn missing_file_yields_empty_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = CatalogContext::new(InventoryLoader::new(dir.path().join("absent.csv")));

        assert!(ctx.records().unwrap().is_empty());
        assert!(!ctx.inventory().unwrap().source_found);
        assert!(ctx.navigation().unwrap().is_empty());
        assert_eq!(ctx.stats().unwrap().total, 0);
        assert!(ctx.search("", None).unwrap().is_empty());
    }

    #[test]
    fn search_composes_with_filters() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = CatalogContext::new(InventoryLoader::new(write_csv(&dir, CSV)));

        let criteria = FilterCriteria {
            automation_level: Some(audit_core::AutomationLevel::FullyAutomated),
            ..Default::default()
        };
        let ids: Vec<String> = ctx
            .search("", Some(&criteria))
            .unwrap()
            .into_iter()
            .map(|hit| hit.audit.audit_id)
            .collect();
        assert_eq!(ids, vec!["1.1.sqli", "2.1.deploy"]);

        let hits = ctx.search("scripting", Some(&criteria)).unwrap();
        assert!(hits.is_empty());
        assert_eq!(ctx.filter(&criteria).unwrap().len(), 2);
    }

    #[test]
    fn strict_load_failure_is_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "audit_id,category,category_number,subcategory,tier,status\nA.1,c,x,s,expert,active\n",
        );
        let ctx = CatalogContext::new(InventoryLoader::new(&path).strict(true));

        assert!(matches!(
            ctx.records(),
            Err(CatalogError::InvalidData { .. })
        ));
        assert!(!ctx.is_loaded());

        write_csv(
            &dir,
            "audit_id,category,category_number,subcategory,tier,status\nA.1,c,1,s,expert,active\n",
        );
        assert_eq!(ctx.records().unwrap().len(), 1);
    }

    #[test]
    fn subcategory_lookup_uses_navigation() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = CatalogContext::new(InventoryLoader::new(write_csv(&dir, CSV)));
        let sub = ctx
            .subcategory("security", "output-encoding")
            .unwrap()
            .unwrap();
        assert_eq!(sub.title, "Output Encoding");
        assert!(ctx.subcategory("security", "nope").unwrap().is_none());
        assert!(ctx.category("nope").unwrap().is_none());
    }

    #[test]
    fn export_matches_build_step_output() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = CatalogContext::new(InventoryLoader::new(write_csv(&dir, CSV)));
        let export = ctx.export().unwrap();
        assert_eq!(export, crate::export::build_export(ctx.records().unwrap()));
        assert_eq!(export.navigation, ctx.navigation().unwrap());
    }
}
