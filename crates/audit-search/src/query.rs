//! Search and filter composition.

use audit_core::{FilterCriteria, InventoryRecord, SearchHit};

use crate::filter::matches;
use crate::index::SearchIndex;

/// Records matching `query` and satisfying `criteria`.
///
/// The query reduces the set first; the filter then applies to what remains.
/// A blank query keeps every record (score `1.0`, inventory order). Otherwise
/// hits are ordered best first. `index` must have been built from `records`.
#[must_use]
pub fn search_records(
    index: &SearchIndex,
    records: &[InventoryRecord],
    query: &str,
    criteria: Option<&FilterCriteria>,
) -> Vec<SearchHit> {
    index
        .search(query)
        .into_iter()
        .filter_map(|scored| {
            records
                .get(scored.position)
                .map(|record| (record, scored.score))
        })
        .filter(|(record, _)| criteria.is_none_or(|criteria| matches(record, criteria)))
        .map(|(record, score)| SearchHit {
            audit: record.clone(),
            score,
        })
        .collect()
}
