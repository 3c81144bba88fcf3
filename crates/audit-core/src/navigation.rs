//! Navigation tree types: category → subcategory → audit reference.
//!
//! Serialized with `camelCase` keys for the presentation layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{CategoryCluster, Status, Tier};

/// Lightweight reference to an audit inside the navigation tree.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NavAudit {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub tier: Option<Tier>,
    pub status: Option<Status>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NavSubcategory {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub audits: Vec<NavAudit>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NavCategory {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster: Option<CategoryCluster>,
    pub subcategories: Vec<NavSubcategory>,
    pub audit_count: usize,
}

impl NavCategory {
    /// Find a subcategory by slug.
    #[must_use]
    pub fn subcategory(&self, slug: &str) -> Option<&NavSubcategory> {
        self.subcategories.iter().find(|sub| sub.slug == slug)
    }
}
