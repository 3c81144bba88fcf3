//! Sparse query predicates over inventory records.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AutomationLevel, RequirementFlag, SdlcPhase, Status, Tier};

/// Optional constraints applied by the filter engine.
///
/// A `None` field imposes no constraint. Requirement fields compare by exact
/// boolean equality, so `Some(false)` keeps only records without the flag.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<Tier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sdlc_phase: Option<SdlcPhase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub automation_level: Option<AutomationLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_source_code: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_runtime_data: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_team_input: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_production_access: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_physical_access: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_human_evaluation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_interviews: Option<bool>,
}

impl FilterCriteria {
    /// Requirement constraints that are set, paired with their flag.
    #[must_use]
    pub fn requirements(&self) -> Vec<(RequirementFlag, bool)> {
        [
            (RequirementFlag::SourceCode, self.requires_source_code),
            (RequirementFlag::RuntimeData, self.requires_runtime_data),
            (RequirementFlag::TeamInput, self.requires_team_input),
            (RequirementFlag::ProductionAccess, self.requires_production_access),
            (RequirementFlag::PhysicalAccess, self.requires_physical_access),
            (RequirementFlag::HumanEvaluation, self.requires_human_evaluation),
            (RequirementFlag::Interviews, self.requires_interviews),
        ]
        .into_iter()
        .filter_map(|(flag, wanted)| wanted.map(|wanted| (flag, wanted)))
        .collect()
    }

    /// Set the constraint for a requirement flag.
    ///
    /// `CostData` has no filter and is ignored.
    pub const fn set_requirement(&mut self, flag: RequirementFlag, wanted: Option<bool>) {
        match flag {
            RequirementFlag::SourceCode => self.requires_source_code = wanted,
            RequirementFlag::RuntimeData => self.requires_runtime_data = wanted,
            RequirementFlag::TeamInput => self.requires_team_input = wanted,
            RequirementFlag::ProductionAccess => self.requires_production_access = wanted,
            RequirementFlag::PhysicalAccess => self.requires_physical_access = wanted,
            RequirementFlag::HumanEvaluation => self.requires_human_evaluation = wanted,
            RequirementFlag::Interviews => self.requires_interviews = wanted,
            RequirementFlag::CostData => {}
        }
    }

    /// Number of constraints that are set.
    #[must_use]
    pub fn active_count(&self) -> usize {
        let scalar = [
            self.tier.is_some(),
            self.status.is_some(),
            self.category.is_some(),
            self.subcategory.is_some(),
            self.sdlc_phase.is_some(),
            self.automation_level.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count();
        scalar + self.requirements().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }
}
