//! Data-quality issues found while loading the inventory.
//!
//! Most issues describe a row the loader could not turn into a record; that
//! row is skipped and loading continues. An unknown tier or status keeps the
//! record with the field unset (see [`IssueKind::skips_row`]).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IssueKind {
    /// `category_number` is not a positive base-10 integer. The row is skipped.
    InvalidCategoryNumber { value: String },
    /// `tier` is not one of the known tiers. The record is kept without one.
    InvalidTier { value: String },
    /// `status` is not one of the known statuses. The record is kept without one.
    InvalidStatus { value: String },
    /// `audit_id` is empty.
    MissingId,
    /// `audit_id` was already used on an earlier line (the first one wins).
    DuplicateId { first_row: usize },
}

impl IssueKind {
    /// Whether the row was dropped rather than kept with an unset field.
    #[must_use]
    pub const fn skips_row(&self) -> bool {
        !matches!(self, Self::InvalidTier { .. } | Self::InvalidStatus { .. })
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCategoryNumber { value } => {
                write!(f, "category_number '{value}' is not a positive integer")
            }
            Self::InvalidTier { value } => write!(f, "unknown tier '{value}'"),
            Self::InvalidStatus { value } => write!(f, "unknown status '{value}'"),
            Self::MissingId => f.write_str("audit_id is empty"),
            Self::DuplicateId { first_row } => {
                write!(f, "audit_id already defined on line {first_row}")
            }
        }
    }
}

/// A skipped inventory row and why it was skipped.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DataIssue {
    /// 1-based line in the inventory file; the header is line 1.
    pub row: usize,
    pub audit_id: String,
    #[serde(flatten)]
    pub kind: IssueKind,
}

impl fmt::Display for DataIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.audit_id.is_empty() {
            write!(f, "line {}: {}", self.row, self.kind)
        } else {
            write!(f, "line {} ({}): {}", self.row, self.audit_id, self.kind)
        }
    }
}
