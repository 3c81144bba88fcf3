//! # audit-catalog
//!
//! The inventory-to-navigation pipeline of the audit browser.
//!
//! - [`loader`]: reads the inventory CSV into typed records, collecting
//!   data-quality issues instead of failing on bad rows
//! - [`navigation`]: groups records into the category → subcategory tree
//! - [`stats`]: aggregate counts and the filter option catalog
//! - [`export`]: the build-time JSON artifact and its schema
//! - [`context`]: [`CatalogContext`], the memoized query interface used by
//!   the CLI and the JSON server

pub mod context;
pub mod error;
pub mod export;
pub mod loader;
pub mod navigation;
pub mod stats;

pub use context::CatalogContext;
pub use error::CatalogError;
pub use export::{ExportSummary, build_export, export_schema, write_export};
pub use loader::{Inventory, InventoryLoader, parse_bool, parse_inventory};
pub use navigation::{build_navigation, format_category_title, format_subcategory_title};
pub use stats::{compute_stats, filter_options};
