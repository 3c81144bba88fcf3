//! Predicate filtering over inventory records.
//!
//! Every criterion that is set must hold for a record to survive. Surviving
//! records keep their input order.

use audit_core::{
    AutomationLevel, FilterCriteria, InventoryRecord, RequirementFlag, SdlcPhase, Status, Tier,
};

use crate::error::SearchError;

/// Whether `record` satisfies every criterion set in `criteria`.
///
/// The automation criterion only checks the flag of the named level. A record
/// with several automation flags set satisfies each of those levels.
#[must_use]
pub fn matches(record: &InventoryRecord, criteria: &FilterCriteria) -> bool {
    if criteria.tier.is_some_and(|tier| record.tier != Some(tier)) {
        return false;
    }
    if criteria.status.is_some_and(|status| record.status != Some(status)) {
        return false;
    }
    if criteria
        .category
        .as_deref()
        .is_some_and(|category| record.category != category)
    {
        return false;
    }
    if criteria
        .subcategory
        .as_deref()
        .is_some_and(|subcategory| record.subcategory != subcategory)
    {
        return false;
    }
    if criteria
        .sdlc_phase
        .is_some_and(|phase| !record.in_phase(phase))
    {
        return false;
    }
    if criteria
        .automation_level
        .is_some_and(|level| !record.has_automation(level))
    {
        return false;
    }

    criteria
        .requirements()
        .into_iter()
        .all(|(flag, wanted)| record.requires(flag) == wanted)
}

/// Records satisfying `criteria`, in input order.
///
/// Empty criteria return every record.
#[must_use]
pub fn apply_filters<'a>(
    records: &'a [InventoryRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a InventoryRecord> {
    records
        .iter()
        .filter(|record| matches(record, criteria))
        .collect()
}

/// Set one criterion from its textual name and value.
///
/// Keys accept both `snake_case` and `camelCase` spellings (`sdlc_phase`,
/// `sdlcPhase`). An empty value clears the criterion.
///
/// # Errors
///
/// Returns [`SearchError`] when the key is unknown or the value does not parse.
pub fn set_criterion(
    criteria: &mut FilterCriteria,
    key: &str,
    value: &str,
) -> Result<(), SearchError> {
    let value = value.trim();
    let normalized = normalize_key(key);

    match normalized.as_str() {
        "tier" => criteria.tier = parse_enum::<Tier>(key, value)?,
        "status" => criteria.status = parse_enum::<Status>(key, value)?,
        "category" => criteria.category = non_empty(value),
        "subcategory" => criteria.subcategory = non_empty(value),
        "sdlc_phase" | "phase" => criteria.sdlc_phase = parse_enum::<SdlcPhase>(key, value)?,
        "automation_level" | "automation" => {
            criteria.automation_level = parse_enum::<AutomationLevel>(key, value)?;
        }
        other => {
            let flag = other
                .strip_prefix("requires_")
                .and_then(|bare| bare.parse::<RequirementFlag>().ok())
                .filter(|flag| *flag != RequirementFlag::CostData)
                .ok_or_else(|| SearchError::UnknownCriterion(key.to_string()))?;
            criteria.set_requirement(flag, parse_bool(key, value)?);
        }
    }
    Ok(())
}

fn normalize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.trim().chars() {
        if ch.is_ascii_uppercase() {
            out.push('_');
            out.push(ch.to_ascii_lowercase());
        } else if ch == '-' {
            out.push('_');
        } else {
            out.push(ch);
        }
    }
    out
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn parse_enum<T>(field: &str, value: &str) -> Result<Option<T>, SearchError>
where
    T: std::str::FromStr<Err = audit_core::CoreError>,
{
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<T>()
        .map(Some)
        .map_err(|source| SearchError::InvalidCriterion {
            field: field.to_string(),
            source,
        })
}

fn parse_bool(field: &str, value: &str) -> Result<Option<bool>, SearchError> {
    match value.to_ascii_lowercase().as_str() {
        "" => Ok(None),
        "true" | "yes" | "1" => Ok(Some(true)),
        "false" | "no" | "0" => Ok(Some(false)),
        _ => Err(SearchError::InvalidBoolean {
            field: field.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn records() -> Vec<InventoryRecord> {
        let mut a = InventoryRecord::new("A.1", "Alpha", "security", 1, "input");
        a.tier = Some(Tier::Expert);
        a.tdd = true;
        a.fully_automated = true;
        a.semi_automated = true;
        a.requires_source_code = true;

        let mut b = InventoryRecord::new("A.2", "Beta", "security", 1, "output");
        b.status = Some(Status::Planned);
        b.human_required = true;
        b.requires_team_input = true;

        let mut c = InventoryRecord::new("B.1", "Gamma", "operations", 2, "input");
        c.tier = Some(Tier::Expert);
        c.deployment = true;
        c.semi_automated = true;

        vec![a, b, c]
    }

    fn ids(filtered: &[&InventoryRecord]) -> Vec<String> {
        filtered.iter().map(|r| r.audit_id.clone()).collect()
    }

    #[test]
    fn empty_criteria_is_identity() {
        let records = records();
        let filtered = apply_filters(&records, &FilterCriteria::default());
        assert_eq!(ids(&filtered), vec!["A.1", "A.2", "B.1"]);
    }

    #[test]
    fn equality_criteria_combine() {
        let records = records();
        let criteria = FilterCriteria {
            tier: Some(Tier::Expert),
            subcategory: Some("input".into()),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(&records, &criteria)), vec!["A.1", "B.1"]);

        let criteria = FilterCriteria {
            category: Some("security".into()),
            status: Some(Status::Planned),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(&records, &criteria)), vec!["A.2"]);
    }

    #[test]
    fn phase_criterion_checks_named_flag() {
        let records = records();
        let criteria = FilterCriteria {
            sdlc_phase: Some(SdlcPhase::Deployment),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(&records, &criteria)), vec!["B.1"]);
    }

    #[test]
    fn automation_levels_are_not_exclusive() {
        let records = records();
        let semi = FilterCriteria {
            automation_level: Some(AutomationLevel::SemiAutomated),
            ..Default::default()
        };
        let fully = FilterCriteria {
            automation_level: Some(AutomationLevel::FullyAutomated),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(&records, &semi)), vec!["A.1", "B.1"]);
        assert_eq!(ids(&apply_filters(&records, &fully)), vec!["A.1"]);
    }

    #[rstest]
    #[case(Some(true), &["A.1"])]
    #[case(Some(false), &["A.2", "B.1"])]
    #[case(None, &["A.1", "A.2", "B.1"])]
    fn requirement_criteria_use_exact_equality(
        #[case] wanted: Option<bool>,
        #[case] expected: &[&str],
    ) {
        let records = records();
        let criteria = FilterCriteria {
            requires_source_code: wanted,
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(&records, &criteria)), expected);
    }

    #[test]
    fn set_criterion_accepts_both_key_spellings() {
        let mut criteria = FilterCriteria::default();
        set_criterion(&mut criteria, "sdlcPhase", "testing").unwrap();
        set_criterion(&mut criteria, "automation_level", "human_required").unwrap();
        set_criterion(&mut criteria, "requiresTeamInput", "no").unwrap();
        set_criterion(&mut criteria, "requires-interviews", "true").unwrap();
        set_criterion(&mut criteria, "tier", "PHD").unwrap();

        assert_eq!(criteria.sdlc_phase, Some(SdlcPhase::Testing));
        assert_eq!(
            criteria.automation_level,
            Some(AutomationLevel::HumanRequired)
        );
        assert_eq!(criteria.requires_team_input, Some(false));
        assert_eq!(criteria.requires_interviews, Some(true));
        assert_eq!(criteria.tier, Some(Tier::Phd));
    }

    #[test]
    fn set_criterion_empty_value_clears() {
        let mut criteria = FilterCriteria {
            category: Some("security".into()),
            ..Default::default()
        };
        set_criterion(&mut criteria, "category", "").unwrap();
        assert!(criteria.is_empty());
    }

    #[test]
    fn set_criterion_rejects_bad_input() {
        let mut criteria = FilterCriteria::default();
        assert!(matches!(
            set_criterion(&mut criteria, "tier", "legendary"),
            Err(SearchError::InvalidCriterion { .. })
        ));
        assert!(matches!(
            set_criterion(&mut criteria, "colour", "red"),
            Err(SearchError::UnknownCriterion(_))
        ));
        assert!(matches!(
            set_criterion(&mut criteria, "requiresCostData", "true"),
            Err(SearchError::UnknownCriterion(_))
        ));
        assert!(matches!(
            set_criterion(&mut criteria, "requiresSourceCode", "maybe"),
            Err(SearchError::InvalidBoolean { .. })
        ));
    }
}
