//! In-memory term index with exact, prefix, and fuzzy matching.
//!
//! Each record contributes the terms of four fields. A query is tokenized the
//! same way; every query term is resolved against the index vocabulary as
//!
//! - an exact hit (weight `1.0`),
//! - a prefix hit, where an indexed term extends the query term, or
//! - a fuzzy hit, within an edit distance proportional to the term length.
//!
//! Terms are combined with OR: a record matches when any query term hits any
//! of its fields. Scores add up per record, scaled by field boost and inverse
//! document frequency. Only membership is stable across rebuilds.

use std::collections::{BTreeMap, HashMap};

use audit_core::InventoryRecord;
use serde::{Deserialize, Serialize};

use crate::tokenize::tokenize;

/// Weight of a prefix hit before length scaling.
const PREFIX_WEIGHT: f64 = 0.375;

/// Weight of a fuzzy hit before distance scaling.
const FUZZY_WEIGHT: f64 = 0.45;

/// Record field contributing terms to the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexField {
    AuditName,
    AuditId,
    Category,
    Subcategory,
}

impl IndexField {
    pub const ALL: [Self; 4] = [
        Self::AuditName,
        Self::AuditId,
        Self::Category,
        Self::Subcategory,
    ];

    fn text(self, record: &InventoryRecord) -> &str {
        match self {
            Self::AuditName => &record.audit_name,
            Self::AuditId => &record.audit_id,
            Self::Category => &record.category,
            Self::Subcategory => &record.subcategory,
        }
    }
}

/// Matching and ranking knobs.
#[derive(Debug, Clone)]
struct SearchOptions {
    /// Maximum edit distance as a fraction of the query term length.
    fuzzy: f64,
    /// Hard cap on the edit distance.
    max_fuzzy: usize,
    /// Whether indexed terms extending a query term match.
    prefix: bool,
    name_boost: f64,
    id_boost: f64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            fuzzy: 0.2,
            max_fuzzy: 6,
            prefix: true,
            name_boost: 2.0,
            id_boost: 1.5,
        }
    }
}

impl SearchOptions {
    const fn boost(&self, field: IndexField) -> f64 {
        match field {
            IndexField::AuditName => self.name_boost,
            IndexField::AuditId => self.id_boost,
            IndexField::Category | IndexField::Subcategory => 1.0,
        }
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn max_distance(&self, term_len: usize) -> usize {
        let scaled = (term_len as f64 * self.fuzzy).round().max(0.0) as usize;
        scaled.min(self.max_fuzzy)
    }
}

#[derive(Debug, Clone)]
struct Posting {
    doc: usize,
    field: IndexField,
    frequency: u32,
}

/// A record position in the indexed slice and its accumulated score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredMatch {
    pub position: usize,
    pub score: f64,
}

/// Term index built from a record slice.
///
/// Positions in results refer to the slice passed to [`SearchIndex::build`].
#[derive(Debug, Clone)]
pub struct SearchIndex {
    terms: BTreeMap<String, Vec<Posting>>,
    ids: Vec<String>,
    options: SearchOptions,
}

impl SearchIndex {
    #[must_use]
    pub fn build(records: &[InventoryRecord]) -> Self {
        let mut terms: BTreeMap<String, Vec<Posting>> = BTreeMap::new();

        for (doc, record) in records.iter().enumerate() {
            for field in IndexField::ALL {
                let mut frequencies: HashMap<String, u32> = HashMap::new();
                for term in tokenize(field.text(record)) {
                    *frequencies.entry(term).or_default() += 1;
                }
                for (term, frequency) in frequencies {
                    terms.entry(term).or_default().push(Posting {
                        doc,
                        field,
                        frequency,
                    });
                }
            }
        }

        tracing::debug!(
            documents = records.len(),
            terms = terms.len(),
            "built search index"
        );

        Self {
            terms,
            ids: records.iter().map(|r| r.audit_id.clone()).collect(),
            options: SearchOptions::default(),
        }
    }

    /// Number of indexed records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Score every record matching `query`, best first.
    ///
    /// A blank query matches every record with score `1.0`, in index order.
    /// Ties keep index order.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<ScoredMatch> {
        if query.trim().is_empty() {
            return (0..self.ids.len())
                .map(|position| ScoredMatch {
                    position,
                    score: 1.0,
                })
                .collect();
        }

        let mut scores: HashMap<usize, f64> = HashMap::new();
        for query_term in tokenize(query) {
            for (indexed, weight) in self.expand(&query_term) {
                let Some(postings) = self.terms.get(indexed) else {
                    continue;
                };
                let idf = self.idf(postings);
                for posting in postings {
                    let frequency = f64::from(posting.frequency);
                    let tf = frequency / (frequency + 1.2);
                    *scores.entry(posting.doc).or_default() +=
                        weight * self.options.boost(posting.field) * idf * tf;
                }
            }
        }

        let mut matches: Vec<ScoredMatch> = scores
            .into_iter()
            .map(|(position, score)| ScoredMatch { position, score })
            .collect();
        matches.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.position.cmp(&b.position))
        });
        matches
    }

    /// Identifiers of every record matching `query`, best first.
    #[must_use]
    pub fn matching_ids(&self, query: &str) -> Vec<String> {
        self.search(query)
            .into_iter()
            .map(|m| self.ids[m.position].clone())
            .collect()
    }

    /// Resolve a query term to indexed terms with their match weight.
    ///
    /// Each indexed term appears once, with the best weight that reached it.
    fn expand(&self, query_term: &str) -> Vec<(&str, f64)> {
        let mut found: HashMap<&str, f64> = HashMap::new();
        let query_len = query_term.chars().count();

        if let Some((term, _)) = self.terms.get_key_value(query_term) {
            found.insert(term.as_str(), 1.0);
        }

        if self.options.prefix {
            for term in self
                .terms
                .range(query_term.to_string()..)
                .map(|(term, _)| term)
                .take_while(|term| term.starts_with(query_term))
            {
                if term == query_term {
                    continue;
                }
                #[allow(clippy::cast_precision_loss)]
                let distance = (term.chars().count() - query_len) as f64;
                #[allow(clippy::cast_precision_loss)]
                let len = query_len as f64;
                let weight = PREFIX_WEIGHT * len / (len + 0.3 * distance);
                keep_best(&mut found, term, weight);
            }
        }

        let max_distance = self.options.max_distance(query_len);
        if max_distance > 0 {
            for term in self.terms.keys() {
                let term_len = term.chars().count();
                if term_len.abs_diff(query_len) > max_distance {
                    continue;
                }
                let distance = strsim::levenshtein(query_term, term);
                if distance == 0 || distance > max_distance {
                    continue;
                }
                #[allow(clippy::cast_precision_loss)]
                let len = query_len as f64;
                #[allow(clippy::cast_precision_loss)]
                let weight = FUZZY_WEIGHT * len / (len + distance as f64);
                keep_best(&mut found, term, weight);
            }
        }

        found.into_iter().collect()
    }

    #[allow(clippy::cast_precision_loss)]
    fn idf(&self, postings: &[Posting]) -> f64 {
        let mut docs: Vec<usize> = postings.iter().map(|p| p.doc).collect();
        docs.dedup();
        let n = self.ids.len() as f64;
        let df = docs.len() as f64;
        (1.0 + (n - df + 0.5) / (df + 0.5)).ln()
    }
}

fn keep_best<'a>(found: &mut HashMap<&'a str, f64>, term: &'a str, weight: f64) {
    let entry = found.entry(term).or_insert(weight);
    if weight > *entry {
        *entry = weight;
    }
}

/// Identifiers of the records in `records` matching `query`.
///
/// Builds a throwaway index. Callers that search repeatedly should keep a
/// [`SearchIndex`] instead.
#[must_use]
pub fn search(query: &str, records: &[InventoryRecord]) -> Vec<String> {
    SearchIndex::build(records).matching_ids(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn record(id: &str, name: &str, category: &str, subcategory: &str) -> InventoryRecord {
        InventoryRecord::new(id, name, category, 1, subcategory)
    }

    fn corpus() -> Vec<InventoryRecord> {
        vec![
            record(
                "1.1.sql-injection",
                "SQL Injection Review",
                "security-and-trust",
                "input-validation",
            ),
            record(
                "1.2.xss",
                "Cross-Site Scripting",
                "security-and-trust",
                "output-encoding",
            ),
            record(
                "13.1.capacity",
                "Capacity Planning",
                "infrastructure",
                "scalability",
            ),
            record(
                "17.1.onboarding",
                "Developer Onboarding",
                "developer-experience",
                "documentation",
            ),
        ]
    }

    #[test]
    fn blank_query_matches_everything_in_order() {
        let index = SearchIndex::build(&corpus());
        let ids = index.matching_ids("   ");
        assert_eq!(
            ids,
            vec![
                "1.1.sql-injection",
                "1.2.xss",
                "13.1.capacity",
                "17.1.onboarding"
            ]
        );
    }

    #[rstest]
    #[case("injection", &["1.1.sql-injection"])]
    #[case("inject", &["1.1.sql-injection"])]
    #[case("injektion", &["1.1.sql-injection"])]
    #[case("scalability", &["13.1.capacity"])]
    #[case("xss", &["1.2.xss"])]
    #[case("nonexistentterm", &[])]
    fn matches_exact_prefix_and_fuzzy(#[case] query: &str, #[case] expected: &[&str]) {
        let ids = search(query, &corpus());
        assert_eq!(ids, expected);
    }

    #[test]
    fn terms_combine_with_or() {
        let mut ids = search("capacity onboarding", &corpus());
        ids.sort();
        assert_eq!(ids, vec!["13.1.capacity", "17.1.onboarding"]);
    }

    #[test]
    fn category_matches_every_member() {
        let mut ids = search("security", &corpus());
        ids.sort();
        assert_eq!(ids, vec!["1.1.sql-injection", "1.2.xss"]);
    }

    #[test]
    fn edit_budget_scales_with_term_length() {
        // Three characters allow one edit, two characters allow none.
        assert_eq!(search("xsa", &corpus()), vec!["1.2.xss"]);
        assert!(search("xz", &corpus()).is_empty());
    }

    #[test]
    fn name_hits_outrank_subcategory_hits() {
        let records = vec![
            record("2.1.a", "Alpha", "misc", "documentation"),
            record("2.2.b", "Documentation Audit", "misc", "other"),
        ];
        let index = SearchIndex::build(&records);
        let hits = index.search("documentation");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].position, 1);
        assert!(hits[0].score > hits[1].score);
    }

    #[test]
    fn empty_index_matches_nothing() {
        let index = SearchIndex::build(&[]);
        assert!(index.is_empty());
        assert!(index.search("anything").is_empty());
        assert!(index.search("").is_empty());
    }
}
