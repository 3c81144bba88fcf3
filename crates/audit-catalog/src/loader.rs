//! Inventory loader: CSV rows to typed records.
//!
//! Parsing rules:
//! - the first row names the columns; columns are looked up by name
//! - fields are trimmed; empty and whitespace-only lines are skipped
//! - short and long rows are tolerated; a missing field reads as empty
//! - a boolean column is `true` only for the value `yes` (any case)
//! - an empty or unknown tier or status leaves the field unset; unknown
//!   values are reported as [`DataIssue`]s
//! - rows without a usable id or category number are skipped and reported
//!
//! A missing inventory file is logged and yields an empty inventory.

use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};

use audit_config::InventoryConfig;
use audit_core::{DataIssue, InventoryRecord, IssueKind, Status, Tier};

use crate::error::CatalogError;

/// Records loaded from the inventory plus the data issues found on the way.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    pub records: Vec<InventoryRecord>,
    pub issues: Vec<DataIssue>,
    /// `false` when the inventory file did not exist.
    pub source_found: bool,
}

impl Inventory {
    fn missing() -> Self {
        Self {
            records: Vec::new(),
            issues: Vec::new(),
            source_found: false,
        }
    }
}

/// Boolean coercion used for every yes/no column.
#[must_use]
pub fn parse_bool(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("yes")
}

/// Loads the inventory CSV from a fixed path.
#[derive(Debug, Clone)]
pub struct InventoryLoader {
    path: PathBuf,
    strict: bool,
}

impl InventoryLoader {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            strict: false,
        }
    }

    #[must_use]
    pub fn from_config(config: &InventoryConfig) -> Self {
        Self::new(config.inventory_path()).strict(config.strict)
    }

    /// Turn data-quality issues into [`CatalogError::InvalidData`].
    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the inventory.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file exists but cannot be read,
    /// [`CatalogError::Csv`] if it is not valid CSV, and
    /// [`CatalogError::InvalidData`] in strict mode when any issue was found.
    pub fn load(&self) -> Result<Inventory, CatalogError> {
        if !self.path.exists() {
            tracing::error!(path = %self.path.display(), "inventory file not found");
            return Ok(Inventory::missing());
        }

        let file = std::fs::File::open(&self.path).map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })?;
        let inventory = parse_inventory(file)?;

        for issue in &inventory.issues {
            if issue.kind.skips_row() {
                tracing::warn!(path = %self.path.display(), "skipping inventory row: {issue}");
            } else {
                tracing::warn!(path = %self.path.display(), "inventory row kept: {issue}");
            }
        }
        tracing::info!(
            path = %self.path.display(),
            records = inventory.records.len(),
            issues = inventory.issues.len(),
            "loaded inventory"
        );

        if self.strict && !inventory.issues.is_empty() {
            return Err(CatalogError::InvalidData {
                issues: inventory.issues,
            });
        }
        Ok(inventory)
    }
}

/// Parse inventory CSV from any reader.
///
/// # Errors
///
/// Returns [`CatalogError::Csv`] if the input is not readable as CSV.
pub fn parse_inventory<R: Read>(reader: R) -> Result<Inventory, CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns: HashMap<String, usize> = reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(index, name)| (name.to_string(), index))
        .collect();

    let mut records = Vec::new();
    let mut issues = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for result in reader.records() {
        let row = result?;
        if row.iter().all(str::is_empty) {
            continue;
        }
        let line = row.position().map_or(0, |position| {
            usize::try_from(position.line()).unwrap_or(usize::MAX)
        });
        let row = Row {
            columns: &columns,
            row: &row,
        };

        match row.to_record() {
            Ok((record, problems)) => {
                if let Some(first_line) = seen.get(&record.audit_id) {
                    issues.push(DataIssue {
                        row: line,
                        audit_id: record.audit_id,
                        kind: IssueKind::DuplicateId {
                            first_row: *first_line,
                        },
                    });
                    continue;
                }
                issues.extend(problems.into_iter().map(|kind| DataIssue {
                    row: line,
                    audit_id: record.audit_id.clone(),
                    kind,
                }));
                seen.insert(record.audit_id.clone(), line);
                records.push(record);
            }
            Err(kind) => issues.push(DataIssue {
                row: line,
                audit_id: row.get("audit_id").to_string(),
                kind,
            }),
        }
    }

    Ok(Inventory {
        records,
        issues,
        source_found: true,
    })
}

struct Row<'a> {
    columns: &'a HashMap<String, usize>,
    row: &'a csv::StringRecord,
}

impl Row<'_> {
    fn get(&self, column: &str) -> &str {
        self.columns
            .get(column)
            .and_then(|index| self.row.get(*index))
            .unwrap_or("")
    }

    fn flag(&self, column: &str) -> bool {
        parse_bool(self.get(column))
    }

    /// The record plus any problems that did not prevent building it.
    fn to_record(&self) -> Result<(InventoryRecord, Vec<IssueKind>), IssueKind> {
        let audit_id = self.get("audit_id");
        if audit_id.is_empty() {
            return Err(IssueKind::MissingId);
        }

        let raw_number = self.get("category_number");
        let category_number = raw_number
            .parse::<u32>()
            .ok()
            .filter(|number| *number > 0)
            .ok_or_else(|| IssueKind::InvalidCategoryNumber {
                value: raw_number.to_string(),
            })?;

        let mut problems = Vec::new();

        let raw_tier = self.get("tier");
        let tier = match raw_tier.parse::<Tier>() {
            Ok(tier) => Some(tier),
            Err(_) if raw_tier.is_empty() => None,
            Err(_) => {
                problems.push(IssueKind::InvalidTier {
                    value: raw_tier.to_string(),
                });
                None
            }
        };

        let raw_status = self.get("status");
        let status = match raw_status.parse::<Status>() {
            Ok(status) => Some(status),
            Err(_) if raw_status.is_empty() => None,
            Err(_) => {
                problems.push(IssueKind::InvalidStatus {
                    value: raw_status.to_string(),
                });
                None
            }
        };

        let record = InventoryRecord {
            audit_id: audit_id.to_string(),
            file_path: self.get("file_path").to_string(),
            audit_name: self.get("audit_name").to_string(),
            category: self.get("category").to_string(),
            category_number,
            subcategory: self.get("subcategory").to_string(),
            tier,
            status,
            discovery: self.flag("discovery"),
            prd: self.flag("prd"),
            task_decomposition: self.flag("task_decomposition"),
            specification: self.flag("specification"),
            tdd: self.flag("tdd"),
            implementation: self.flag("implementation"),
            testing: self.flag("testing"),
            integration: self.flag("integration"),
            deployment: self.flag("deployment"),
            post_production: self.flag("post_production"),
            requires_source_code: self.flag("requires_source_code"),
            requires_runtime_data: self.flag("requires_runtime_data"),
            requires_cost_data: self.flag("requires_cost_data"),
            requires_team_input: self.flag("requires_team_input"),
            requires_production_access: self.flag("requires_production_access"),
            requires_physical_access: self.flag("requires_physical_access"),
            requires_human_evaluation: self.flag("requires_human_evaluation"),
            requires_interviews: self.flag("requires_interviews"),
            fully_automated: self.flag("fully_automated"),
            semi_automated: self.flag("semi_automated"),
            human_required: self.flag("human_required"),
            pre_production_only: self.flag("pre_production_only"),
            production_only: self.flag("production_only"),
            any_phase: self.flag("any_phase"),
        };
        Ok((record, problems))
    }
}
