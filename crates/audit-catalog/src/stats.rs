//! Aggregate counts and the filter option catalog.

use std::collections::BTreeSet;

use audit_core::{
    AutomationCounts, AutomationLevel, CatalogStats, FilterOptions, InventoryRecord, SdlcPhase,
    Status, Tier, TierCounts,
};

#[must_use]
pub fn compute_stats(records: &[InventoryRecord]) -> CatalogStats {
    let mut stats = CatalogStats {
        total: records.len(),
        ..CatalogStats::default()
    };
    let mut categories = BTreeSet::new();

    for record in records {
        match record.status {
            Some(Status::Active) => stats.active += 1,
            Some(Status::Planned) => stats.planned += 1,
            None => {}
        }
        if let Some(tier) = record.tier {
            bump_tier(&mut stats.by_tier, tier);
        }
        bump_automation(&mut stats.by_automation, record);
        categories.insert(record.category.as_str());
    }

    stats.categories = categories.len();
    stats
}

const fn bump_tier(counts: &mut TierCounts, tier: Tier) {
    match tier {
        Tier::Focused => counts.focused += 1,
        Tier::Expert => counts.expert += 1,
        Tier::Phd => counts.phd += 1,
        Tier::Standard => counts.standard += 1,
    }
}

// Each flag counts independently; a record may add to several levels.
const fn bump_automation(counts: &mut AutomationCounts, record: &InventoryRecord) {
    if record.fully_automated {
        counts.fully_automated += 1;
    }
    if record.semi_automated {
        counts.semi_automated += 1;
    }
    if record.human_required {
        counts.human_required += 1;
    }
}

/// Sorted distinct categories and subcategories, plus the fixed enumerations.
#[must_use]
pub fn filter_options(records: &[InventoryRecord]) -> FilterOptions {
    let categories: BTreeSet<&str> = records.iter().map(|r| r.category.as_str()).collect();
    let subcategories: BTreeSet<&str> = records.iter().map(|r| r.subcategory.as_str()).collect();

    FilterOptions {
        categories: categories.into_iter().map(String::from).collect(),
        subcategories: subcategories.into_iter().map(String::from).collect(),
        tiers: Tier::ALL.to_vec(),
        statuses: Status::ALL.to_vec(),
        automation_levels: AutomationLevel::ALL.to_vec(),
        sdlc_phases: SdlcPhase::ALL.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn records() -> Vec<InventoryRecord> {
        let mut a = InventoryRecord::new("1.1.a", "A", "security", 1, "input");
        a.tier = Some(Tier::Expert);
        a.fully_automated = true;
        a.semi_automated = true;

        let mut b = InventoryRecord::new("1.2.b", "B", "security", 1, "auth");
        b.status = Some(Status::Planned);
        b.tier = Some(Tier::Phd);
        b.human_required = true;

        let c = InventoryRecord::new("2.1.c", "C", "operations", 2, "input");
        vec![a, b, c]
    }

    #[test]
    fn counts_status_tier_and_automation() {
        let stats = compute_stats(&records());
        assert_eq!(
            stats,
            CatalogStats {
                total: 3,
                active: 2,
                planned: 1,
                by_tier: TierCounts {
                    focused: 0,
                    expert: 1,
                    phd: 1,
                    standard: 1,
                },
                by_automation: AutomationCounts {
                    fully_automated: 1,
                    semi_automated: 1,
                    human_required: 1,
                },
                categories: 2,
            }
        );
    }

    #[test]
    fn unset_tier_and_status_count_toward_total_only() {
        let mut record = InventoryRecord::new("1.1.a", "A", "security", 1, "input");
        record.tier = None;
        record.status = None;

        let stats = compute_stats(&[record]);
        assert_eq!(stats.total, 1);
        assert_eq!((stats.active, stats.planned), (0, 0));
        assert_eq!(stats.by_tier, TierCounts::default());
    }

    #[test]
    fn empty_inventory_has_zero_total() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.categories, 0);
    }

    #[test]
    fn options_are_sorted_and_distinct() {
        let options = filter_options(&records());
        assert_eq!(options.categories, vec!["operations", "security"]);
        assert_eq!(options.subcategories, vec!["auth", "input"]);
        assert_eq!(options.tiers, Tier::ALL.to_vec());
        assert_eq!(options.sdlc_phases.len(), 10);
    }
}
