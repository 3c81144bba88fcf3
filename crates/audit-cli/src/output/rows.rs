//! Table projections of catalog values.

use audit_core::{DataIssue, InventoryRecord, NavCategory, SearchHit};

/// A value rendered as one table line.
pub trait TableRow {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

impl TableRow for &InventoryRecord {
    const HEADERS: &'static [&'static str] =
        &["id", "name", "category", "subcategory", "tier", "status"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.audit_id.clone(),
            self.audit_name.clone(),
            self.category.clone(),
            self.subcategory.clone(),
            or_dash(self.tier),
            or_dash(self.status),
        ]
    }
}

impl TableRow for SearchHit {
    const HEADERS: &'static [&'static str] = &["id", "name", "category", "tier", "status", "score"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.audit.audit_id.clone(),
            self.audit.audit_name.clone(),
            self.audit.category.clone(),
            or_dash(self.audit.tier),
            or_dash(self.audit.status),
            format!("{:.3}", self.score),
        ]
    }
}

impl TableRow for &NavCategory {
    const HEADERS: &'static [&'static str] =
        &["number", "title", "slug", "cluster", "subcategories", "audits"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.number.to_string(),
            self.title.clone(),
            self.slug.clone(),
            or_dash(self.cluster),
            self.subcategories.len().to_string(),
            self.audit_count.to_string(),
        ]
    }
}

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| String::from("-"), |value| value.to_string())
}

impl TableRow for DataIssue {
    const HEADERS: &'static [&'static str] = &["line", "id", "problem"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.row.to_string(),
            self.audit_id.clone(),
            self.kind.to_string(),
        ]
    }
}
