use anyhow::Context;
use audit_core::FilterCriteria;
use audit_search::set_criterion;

use crate::cli::root_commands::FilterArgs;

/// Build filter criteria from the named flags and `--where KEY=VALUE` pairs.
///
/// `--where` pairs are applied after the named flags and win on conflict.
pub fn criteria_from_args(args: &FilterArgs) -> anyhow::Result<FilterCriteria> {
    let mut criteria = FilterCriteria::default();

    let named = [
        ("tier", &args.tier),
        ("status", &args.status),
        ("category", &args.category),
        ("subcategory", &args.subcategory),
        ("sdlc_phase", &args.phase),
        ("automation_level", &args.automation),
    ];
    for (key, value) in named {
        if let Some(value) = value {
            set_criterion(&mut criteria, key, value)?;
        }
    }

    for condition in &args.conditions {
        let (key, value) = condition
            .split_once('=')
            .with_context(|| format!("invalid --where '{condition}': expected KEY=VALUE"))?;
        set_criterion(&mut criteria, key, value)
            .with_context(|| format!("invalid --where '{condition}'"))?;
    }

    Ok(criteria)
}

#[cfg(test)]
mod tests {
    use audit_core::{AutomationLevel, SdlcPhase, Tier};

    use super::*;

    #[test]
    fn named_flags_and_conditions_combine() {
        let args = FilterArgs {
            tier: Some("expert".into()),
            phase: Some("post-production".into()),
            automation: Some("semi_automated".into()),
            conditions: vec!["requiresSourceCode=yes".into()],
            ..FilterArgs::default()
        };
        let criteria = criteria_from_args(&args).expect("criteria should parse");
        assert_eq!(criteria.tier, Some(Tier::Expert));
        assert_eq!(criteria.sdlc_phase, Some(SdlcPhase::PostProduction));
        assert_eq!(
            criteria.automation_level,
            Some(AutomationLevel::SemiAutomated)
        );
        assert_eq!(criteria.requires_source_code, Some(true));
        assert_eq!(criteria.active_count(), 4);
    }

    #[test]
    fn malformed_condition_is_rejected() {
        let args = FilterArgs {
            conditions: vec!["requires_source_code".into()],
            ..FilterArgs::default()
        };
        let err = criteria_from_args(&args).expect_err("should fail");
        assert!(err.to_string().contains("expected KEY=VALUE"));
    }

    #[test]
    fn unknown_tier_is_rejected() {
        let args = FilterArgs {
            tier: Some("legendary".into()),
            ..FilterArgs::default()
        };
        assert!(criteria_from_args(&args).is_err());
    }
}
