//! Navigation Builder: groups records into category → subcategory → audit.
//!
//! One pass accumulates categories keyed by number and subcategories keyed by
//! slug within their category. Ordering is applied once at the end:
//!
//! ```text
//! categories      ascending category number
//! subcategories   case-insensitive title (code point order), stable
//! audits          case-insensitive name (code point order), stable
//! ```

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use audit_core::{CategoryCluster, InventoryRecord, NavAudit, NavCategory, NavSubcategory};

/// Title for a category slug: hyphen-split, title-cased, and the first
/// interior word `And` replaced by `&`.
///
/// `error-handling-and-logging` becomes `Error Handling & Logging`; later
/// `And` words are left as they are.
#[must_use]
pub fn format_category_title(slug: &str) -> String {
    let mut words: Vec<String> = slug.split('-').map(capitalize).collect();
    let last = words.len().saturating_sub(1);
    if let Some(word) = words
        .iter_mut()
        .enumerate()
        .find(|(index, word)| *index > 0 && *index < last && word.as_str() == "And")
        .map(|(_, word)| word)
    {
        *word = String::from("&");
    }
    words.join(" ")
}

/// Title for a subcategory slug: hyphen-split and title-cased.
#[must_use]
pub fn format_subcategory_title(slug: &str) -> String {
    slug.split('-').map(capitalize).collect::<Vec<_>>().join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Slug of an audit reference: the last `.` segment of its identifier.
fn audit_slug(audit_id: &str) -> &str {
    match audit_id.rsplit('.').next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => audit_id,
    }
}

/// Case-insensitive order by lowercased code points, not locale collation.
///
/// Slugs are ASCII, so derived titles sort alphabetically; an accented
/// leading letter would sort after `z`.
fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

struct CategoryAccumulator {
    node: NavCategory,
    subcategory_index: HashMap<String, usize>,
}

impl CategoryAccumulator {
    fn new(record: &InventoryRecord) -> Self {
        let number = record.category_number;
        Self {
            node: NavCategory {
                id: format!("cat-{number}"),
                slug: record.category.clone(),
                title: format_category_title(&record.category),
                number,
                cluster: CategoryCluster::for_category(number),
                subcategories: Vec::new(),
                audit_count: 0,
            },
            subcategory_index: HashMap::new(),
        }
    }

    fn push(&mut self, record: &InventoryRecord) {
        let index = match self.subcategory_index.get(&record.subcategory) {
            Some(index) => *index,
            None => {
                let index = self.node.subcategories.len();
                self.node.subcategories.push(NavSubcategory {
                    id: format!("{}-{}", self.node.id, record.subcategory),
                    slug: record.subcategory.clone(),
                    title: format_subcategory_title(&record.subcategory),
                    audits: Vec::new(),
                });
                self.subcategory_index
                    .insert(record.subcategory.clone(), index);
                index
            }
        };

        self.node.subcategories[index].audits.push(NavAudit {
            id: record.audit_id.clone(),
            slug: audit_slug(&record.audit_id).to_string(),
            name: record.audit_name.clone(),
            tier: record.tier,
            status: record.status,
        });
        self.node.audit_count += 1;
    }

    fn finish(mut self) -> NavCategory {
        self.node
            .subcategories
            .sort_by(|a, b| compare_titles(&a.title, &b.title));
        for subcategory in &mut self.node.subcategories {
            subcategory
                .audits
                .sort_by(|a, b| compare_titles(&a.name, &b.name));
        }
        self.node
    }
}

/// Build the navigation tree from `records`.
///
/// Records sharing a category number share a category node; its slug and
/// title come from the first such record.
#[must_use]
pub fn build_navigation(records: &[InventoryRecord]) -> Vec<NavCategory> {
    let mut categories: BTreeMap<u32, CategoryAccumulator> = BTreeMap::new();

    for record in records {
        categories
            .entry(record.category_number)
            .or_insert_with(|| CategoryAccumulator::new(record))
            .push(record);
    }

    categories
        .into_values()
        .map(CategoryAccumulator::finish)
        .collect()
}
