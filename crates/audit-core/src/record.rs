use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AutomationLevel, RequirementFlag, SdlcPhase, Status, Tier};

/// One row of the audit inventory.
///
/// Field names match the inventory's column headers. Records are built once by
/// the loader and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct InventoryRecord {
    pub audit_id: String,
    pub file_path: String,
    pub audit_name: String,
    pub category: String,
    pub category_number: u32,
    pub subcategory: String,
    /// `None` when the column is empty or holds an unknown value.
    pub tier: Option<Tier>,
    /// `None` when the column is empty or holds an unknown value.
    pub status: Option<Status>,

    // SDLC phases
    pub discovery: bool,
    pub prd: bool,
    pub task_decomposition: bool,
    pub specification: bool,
    pub tdd: bool,
    pub implementation: bool,
    pub testing: bool,
    pub integration: bool,
    pub deployment: bool,
    pub post_production: bool,

    // Requirements
    pub requires_source_code: bool,
    pub requires_runtime_data: bool,
    pub requires_cost_data: bool,
    pub requires_team_input: bool,
    pub requires_production_access: bool,
    pub requires_physical_access: bool,
    pub requires_human_evaluation: bool,
    pub requires_interviews: bool,

    // Automation
    pub fully_automated: bool,
    pub semi_automated: bool,
    pub human_required: bool,

    // Phase restrictions
    pub pre_production_only: bool,
    pub production_only: bool,
    pub any_phase: bool,
}

impl InventoryRecord {
    /// Whether the audit applies during `phase`.
    #[must_use]
    pub const fn in_phase(&self, phase: SdlcPhase) -> bool {
        match phase {
            SdlcPhase::Discovery => self.discovery,
            SdlcPhase::Prd => self.prd,
            SdlcPhase::TaskDecomposition => self.task_decomposition,
            SdlcPhase::Specification => self.specification,
            SdlcPhase::Tdd => self.tdd,
            SdlcPhase::Implementation => self.implementation,
            SdlcPhase::Testing => self.testing,
            SdlcPhase::Integration => self.integration,
            SdlcPhase::Deployment => self.deployment,
            SdlcPhase::PostProduction => self.post_production,
        }
    }

    /// Whether the flag backing `level` is set. Other levels are not consulted.
    #[must_use]
    pub const fn has_automation(&self, level: AutomationLevel) -> bool {
        match level {
            AutomationLevel::FullyAutomated => self.fully_automated,
            AutomationLevel::SemiAutomated => self.semi_automated,
            AutomationLevel::HumanRequired => self.human_required,
        }
    }

    #[must_use]
    pub const fn requires(&self, flag: RequirementFlag) -> bool {
        match flag {
            RequirementFlag::SourceCode => self.requires_source_code,
            RequirementFlag::RuntimeData => self.requires_runtime_data,
            RequirementFlag::CostData => self.requires_cost_data,
            RequirementFlag::TeamInput => self.requires_team_input,
            RequirementFlag::ProductionAccess => self.requires_production_access,
            RequirementFlag::PhysicalAccess => self.requires_physical_access,
            RequirementFlag::HumanEvaluation => self.requires_human_evaluation,
            RequirementFlag::Interviews => self.requires_interviews,
        }
    }

    /// Phases this audit applies to, in delivery order.
    #[must_use]
    pub fn phases(&self) -> Vec<SdlcPhase> {
        SdlcPhase::ALL
            .into_iter()
            .filter(|phase| self.in_phase(*phase))
            .collect()
    }

    /// Short slug used in navigation: the last `.`-separated segment of the id.
    #[must_use]
    pub fn slug(&self) -> &str {
        match self.audit_id.rsplit('.').next() {
            Some(last) if !last.is_empty() => last,
            _ => &self.audit_id,
        }
    }

    /// A record with the given identity columns and every flag cleared.
    ///
    /// Convenience for fixtures and for callers assembling records by hand.
    #[must_use]
    pub fn new(
        audit_id: impl Into<String>,
        audit_name: impl Into<String>,
        category: impl Into<String>,
        category_number: u32,
        subcategory: impl Into<String>,
    ) -> Self {
        Self {
            audit_id: audit_id.into(),
            file_path: String::new(),
            audit_name: audit_name.into(),
            category: category.into(),
            category_number,
            subcategory: subcategory.into(),
            tier: Some(Tier::Standard),
            status: Some(Status::Active),
            discovery: false,
            prd: false,
            task_decomposition: false,
            specification: false,
            tdd: false,
            implementation: false,
            testing: false,
            integration: false,
            deployment: false,
            post_production: false,
            requires_source_code: false,
            requires_runtime_data: false,
            requires_cost_data: false,
            requires_team_input: false,
            requires_production_access: false,
            requires_physical_access: false,
            requires_human_evaluation: false,
            requires_interviews: false,
            fully_automated: false,
            semi_automated: false,
            human_required: false,
            pre_production_only: false,
            production_only: false,
            any_phase: false,
        }
    }
}
