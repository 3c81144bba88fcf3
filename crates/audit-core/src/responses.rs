//! Derived views handed to the presentation layer.
//!
//! These structs define the JSON shape of the build-time export artifact and
//! of the `audits` CLI responses.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AutomationLevel, SdlcPhase, Status, Tier};
use crate::navigation::NavCategory;
use crate::record::InventoryRecord;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TierCounts {
    pub focused: usize,
    pub expert: usize,
    pub phd: usize,
    pub standard: usize,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AutomationCounts {
    pub fully_automated: usize,
    pub semi_automated: usize,
    pub human_required: usize,
}

/// Aggregate counts over the whole inventory.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total: usize,
    pub active: usize,
    pub planned: usize,
    pub by_tier: TierCounts,
    pub by_automation: AutomationCounts,
    /// Number of distinct category slugs.
    pub categories: usize,
}

/// Values a client can offer in its filter controls.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub categories: Vec<String>,
    pub subcategories: Vec<String>,
    pub tiers: Vec<Tier>,
    pub statuses: Vec<Status>,
    pub automation_levels: Vec<AutomationLevel>,
    pub sdlc_phases: Vec<SdlcPhase>,
}

/// The single static artifact written at build time.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogExport {
    pub audits: Vec<InventoryRecord>,
    pub navigation: Vec<NavCategory>,
    pub stats: CatalogStats,
    pub filter_options: FilterOptions,
}

/// A record matched by a search, with its ranking score.
///
/// Only membership is meaningful across index rebuilds; scores order hits
/// within one response.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SearchHit {
    pub audit: InventoryRecord,
    pub score: f64,
}
