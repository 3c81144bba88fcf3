//! Serde roundtrip and JsonSchema validation tests for the exported types.

use audit_core::*;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn sample_record() -> InventoryRecord {
    let mut record = InventoryRecord::new(
        "1.1.input-validation",
        "Input Validation Review",
        "access-control",
        1,
        "input-validation",
    );
    record.file_path = "audits/01-access-control/input-validation.yaml".into();
    record.tier = Some(Tier::Expert);
    record.implementation = true;
    record.requires_source_code = true;
    record.fully_automated = true;
    record.any_phase = true;
    record
}

fn sample_navigation() -> Vec<NavCategory> {
    vec![NavCategory {
        id: "cat-1".into(),
        slug: "access-control".into(),
        title: "Access Control".into(),
        number: 1,
        cluster: Some(CategoryCluster::CoreTechnical),
        subcategories: vec![NavSubcategory {
            id: "cat-1-input-validation".into(),
            slug: "input-validation".into(),
            title: "Input Validation".into(),
            audits: vec![NavAudit {
                id: "1.1.input-validation".into(),
                slug: "input-validation".into(),
                name: "Input Validation Review".into(),
                tier: Some(Tier::Expert),
                status: Some(Status::Active),
            }],
        }],
        audit_count: 1,
    }]
}

roundtrip_and_validate!(record_roundtrip, InventoryRecord, sample_record());

roundtrip_and_validate!(navigation_roundtrip, Vec<NavCategory>, sample_navigation());

roundtrip_and_validate!(
    criteria_roundtrip,
    FilterCriteria,
    FilterCriteria {
        tier: Some(Tier::Phd),
        sdlc_phase: Some(SdlcPhase::Deployment),
        requires_production_access: Some(false),
        ..Default::default()
    }
);

roundtrip_and_validate!(
    issue_roundtrip,
    DataIssue,
    DataIssue {
        row: 3,
        audit_id: "2.1".into(),
        kind: IssueKind::InvalidTier {
            value: "legend".into(),
        },
    }
);

roundtrip_and_validate!(
    export_roundtrip,
    CatalogExport,
    CatalogExport {
        audits: vec![sample_record()],
        navigation: sample_navigation(),
        stats: CatalogStats {
            total: 1,
            active: 1,
            planned: 0,
            by_tier: TierCounts {
                expert: 1,
                ..Default::default()
            },
            by_automation: AutomationCounts {
                fully_automated: 1,
                ..Default::default()
            },
            categories: 1,
        },
        filter_options: FilterOptions {
            categories: vec!["access-control".into()],
            subcategories: vec!["input-validation".into()],
            tiers: Tier::ALL.to_vec(),
            statuses: Status::ALL.to_vec(),
            automation_levels: AutomationLevel::ALL.to_vec(),
            sdlc_phases: SdlcPhase::ALL.to_vec(),
        },
    }
);

#[test]
fn export_uses_presentation_key_names() {
    let stats = CatalogStats {
        total: 2,
        ..Default::default()
    };
    let json = serde_json::to_value(stats).unwrap();
    assert!(json.get("byTier").is_some());
    assert!(json["byAutomation"].get("fullyAutomated").is_some());

    let nav = serde_json::to_value(sample_navigation()).unwrap();
    assert_eq!(nav[0]["auditCount"], 1);
    assert_eq!(nav[0]["cluster"], "core_technical");

    let record = serde_json::to_value(sample_record()).unwrap();
    assert_eq!(record["audit_id"], "1.1.input-validation");
    assert_eq!(record["category_number"], 1);
    assert_eq!(record["requires_source_code"], true);
}
