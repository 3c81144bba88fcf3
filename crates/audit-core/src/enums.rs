//! Fixed enumerations of the audit inventory.
//!
//! All enums use `snake_case` serialization, matching the literal values found
//! in the inventory CSV. Each enum exposes `ALL` (catalog order), `as_str()`,
//! and a case-insensitive `FromStr` that also accepts `-` for `_`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

fn parse_variant<T: Copy>(
    kind: &'static str,
    value: &str,
    all: &[T],
    name: impl Fn(T) -> &'static str,
) -> Result<T, CoreError> {
    let needle = value.trim().replace('-', "_");
    all.iter()
        .copied()
        .find(|variant| name(*variant).eq_ignore_ascii_case(&needle))
        .ok_or_else(|| {
            let expected = all.iter().map(|variant| name(*variant)).collect::<Vec<_>>();
            CoreError::unknown(kind, value, &expected)
        })
}

// ---------------------------------------------------------------------------
// Tier
// ---------------------------------------------------------------------------

/// Depth of an audit procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Focused,
    Expert,
    Phd,
    Standard,
}

impl Tier {
    pub const ALL: [Self; 4] = [Self::Focused, Self::Expert, Self::Phd, Self::Standard];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Focused => "focused",
            Self::Expert => "expert",
            Self::Phd => "phd",
            Self::Standard => "standard",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("tier", s, &Self::ALL, Self::as_str)
    }
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Whether an audit is written and usable, or only planned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Active,
    Planned,
}

impl Status {
    pub const ALL: [Self; 2] = [Self::Active, Self::Planned];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Planned => "planned",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("status", s, &Self::ALL, Self::as_str)
    }
}

// ---------------------------------------------------------------------------
// AutomationLevel
// ---------------------------------------------------------------------------

/// How much of an audit can run without a human.
///
/// Each level is backed by its own boolean column. The columns are descriptive,
/// not exclusive: a row may set more than one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AutomationLevel {
    FullyAutomated,
    SemiAutomated,
    HumanRequired,
}

impl AutomationLevel {
    pub const ALL: [Self; 3] = [
        Self::FullyAutomated,
        Self::SemiAutomated,
        Self::HumanRequired,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FullyAutomated => "fully_automated",
            Self::SemiAutomated => "semi_automated",
            Self::HumanRequired => "human_required",
        }
    }
}

impl fmt::Display for AutomationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AutomationLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("automation level", s, &Self::ALL, Self::as_str)
    }
}

// ---------------------------------------------------------------------------
// SdlcPhase
// ---------------------------------------------------------------------------

/// Software delivery phase in which an audit applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SdlcPhase {
    Discovery,
    Prd,
    TaskDecomposition,
    Specification,
    Tdd,
    Implementation,
    Testing,
    Integration,
    Deployment,
    PostProduction,
}

impl SdlcPhase {
    pub const ALL: [Self; 10] = [
        Self::Discovery,
        Self::Prd,
        Self::TaskDecomposition,
        Self::Specification,
        Self::Tdd,
        Self::Implementation,
        Self::Testing,
        Self::Integration,
        Self::Deployment,
        Self::PostProduction,
    ];

    /// Column name in the inventory.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Discovery => "discovery",
            Self::Prd => "prd",
            Self::TaskDecomposition => "task_decomposition",
            Self::Specification => "specification",
            Self::Tdd => "tdd",
            Self::Implementation => "implementation",
            Self::Testing => "testing",
            Self::Integration => "integration",
            Self::Deployment => "deployment",
            Self::PostProduction => "post_production",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Discovery => "Discovery",
            Self::Prd => "PRD",
            Self::TaskDecomposition => "Task Decomposition",
            Self::Specification => "Specification",
            Self::Tdd => "TDD",
            Self::Implementation => "Implementation",
            Self::Testing => "Testing",
            Self::Integration => "Integration",
            Self::Deployment => "Deployment",
            Self::PostProduction => "Post-Production",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Discovery => "Problem exploration, stakeholder interviews",
            Self::Prd => "Product requirements, user stories",
            Self::TaskDecomposition => "Breaking requirements into tasks",
            Self::Specification => "Technical spec, API contracts",
            Self::Tdd => "Writing tests before implementation",
            Self::Implementation => "Active coding",
            Self::Testing => "Unit, integration, E2E testing",
            Self::Integration => "Merging code, CI pipeline",
            Self::Deployment => "Staging, canary, production rollout",
            Self::PostProduction => "Live monitoring, optimization",
        }
    }
}

impl fmt::Display for SdlcPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SdlcPhase {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("SDLC phase", s, &Self::ALL, Self::as_str)
    }
}

// ---------------------------------------------------------------------------
// RequirementFlag
// ---------------------------------------------------------------------------

/// Prerequisites an auditor needs before running an audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RequirementFlag {
    SourceCode,
    RuntimeData,
    CostData,
    TeamInput,
    ProductionAccess,
    PhysicalAccess,
    HumanEvaluation,
    Interviews,
}

impl RequirementFlag {
    pub const ALL: [Self; 8] = [
        Self::SourceCode,
        Self::RuntimeData,
        Self::CostData,
        Self::TeamInput,
        Self::ProductionAccess,
        Self::PhysicalAccess,
        Self::HumanEvaluation,
        Self::Interviews,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SourceCode => "source_code",
            Self::RuntimeData => "runtime_data",
            Self::CostData => "cost_data",
            Self::TeamInput => "team_input",
            Self::ProductionAccess => "production_access",
            Self::PhysicalAccess => "physical_access",
            Self::HumanEvaluation => "human_evaluation",
            Self::Interviews => "interviews",
        }
    }

    /// Column name in the inventory (`requires_*`).
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::SourceCode => "requires_source_code",
            Self::RuntimeData => "requires_runtime_data",
            Self::CostData => "requires_cost_data",
            Self::TeamInput => "requires_team_input",
            Self::ProductionAccess => "requires_production_access",
            Self::PhysicalAccess => "requires_physical_access",
            Self::HumanEvaluation => "requires_human_evaluation",
            Self::Interviews => "requires_interviews",
        }
    }
}

impl fmt::Display for RequirementFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequirementFlag {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let bare = trimmed.strip_prefix("requires_").unwrap_or(trimmed);
        parse_variant("requirement", bare, &Self::ALL, Self::as_str)
    }
}

// ---------------------------------------------------------------------------
// CategoryCluster
// ---------------------------------------------------------------------------

/// Coarse grouping of categories by their number.
///
/// ```text
///  1-12  Core Technical
/// 13-16  Infrastructure
/// 17-23  Human & Experience
/// 24-30  Process & Governance
/// 31-33  Economics & Dependencies
/// 34-43  Specialized Domains
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CategoryCluster {
    CoreTechnical,
    Infrastructure,
    HumanExperience,
    ProcessGovernance,
    EconomicsDependencies,
    SpecializedDomains,
}

impl CategoryCluster {
    pub const ALL: [Self; 6] = [
        Self::CoreTechnical,
        Self::Infrastructure,
        Self::HumanExperience,
        Self::ProcessGovernance,
        Self::EconomicsDependencies,
        Self::SpecializedDomains,
    ];

    /// Cluster owning `category_number`, if any.
    #[must_use]
    pub fn for_category(category_number: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|cluster| {
            let (start, end) = cluster.range();
            (start..=end).contains(&category_number)
        })
    }

    /// Inclusive range of category numbers.
    #[must_use]
    pub const fn range(self) -> (u32, u32) {
        match self {
            Self::CoreTechnical => (1, 12),
            Self::Infrastructure => (13, 16),
            Self::HumanExperience => (17, 23),
            Self::ProcessGovernance => (24, 30),
            Self::EconomicsDependencies => (31, 33),
            Self::SpecializedDomains => (34, 43),
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::CoreTechnical => "Core Technical",
            Self::Infrastructure => "Infrastructure",
            Self::HumanExperience => "Human & Experience",
            Self::ProcessGovernance => "Process & Governance",
            Self::EconomicsDependencies => "Economics & Dependencies",
            Self::SpecializedDomains => "Specialized Domains",
        }
    }

    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::CoreTechnical => "blue",
            Self::Infrastructure => "green",
            Self::HumanExperience => "purple",
            Self::ProcessGovernance => "orange",
            Self::EconomicsDependencies => "yellow",
            Self::SpecializedDomains => "red",
        }
    }
}

impl fmt::Display for CategoryCluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
