//! # audit-core
//!
//! Core types shared by every audit-browser crate.
//!
//! This crate provides:
//! - The typed inventory row (`InventoryRecord`) and its enums
//! - The derived navigation tree (`NavCategory` → `NavSubcategory` → `NavAudit`)
//! - Sparse query predicates (`FilterCriteria`)
//! - Aggregate statistics, the filter option catalog, and the export artifact
//! - Data-quality issues reported by the inventory loader
//! - Cross-cutting error types

pub mod enums;
pub mod errors;
pub mod filter;
pub mod issues;
pub mod navigation;
pub mod record;
pub mod responses;

pub use enums::{AutomationLevel, CategoryCluster, RequirementFlag, SdlcPhase, Status, Tier};
pub use errors::CoreError;
pub use filter::FilterCriteria;
pub use issues::{DataIssue, IssueKind};
pub use navigation::{NavAudit, NavCategory, NavSubcategory};
pub use record::InventoryRecord;
pub use responses::{
    AutomationCounts, CatalogExport, CatalogStats, FilterOptions, SearchHit, TierCounts,
};
