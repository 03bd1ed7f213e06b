//! Standardised reasons for cancelling a project.

use super::ParseCancellationReasonError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Standardised portfolio cancellation reason, recorded when a project is
/// cancelled and grouped in portfolio reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancellationReason {
    /// Spending exceeded the approved budget.
    OverBudget,
    /// Not enough people or time to continue.
    ResourceShortage,
    /// The business changed priorities.
    PriorityShift,
    /// An external dependency fell through.
    ExternalDependencies,
    /// The approach proved technically infeasible.
    TechnicalFeasibility,
    /// The risks became unacceptable.
    UnacceptableRisk,
    /// The client withdrew from the engagement.
    ClientWithdrawal,
    /// Compliance or legal constraints.
    Compliance,
    /// Duplicated or replaced by another project.
    Superseded,
    /// A strategic decision by leadership.
    StrategicDecision,
}

impl CancellationReason {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OverBudget => "over_budget",
            Self::ResourceShortage => "resource_shortage",
            Self::PriorityShift => "priority_shift",
            Self::ExternalDependencies => "external_dependencies",
            Self::TechnicalFeasibility => "technical_feasibility",
            Self::UnacceptableRisk => "unacceptable_risk",
            Self::ClientWithdrawal => "client_withdrawal",
            Self::Compliance => "compliance",
            Self::Superseded => "superseded",
            Self::StrategicDecision => "strategic_decision",
        }
    }

    /// Returns the human-readable label for screens and reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OverBudget => "Over budget",
            Self::ResourceShortage => "Resource shortage (people/time)",
            Self::PriorityShift => "Priority shifted by the business",
            Self::ExternalDependencies => "External dependencies fell through",
            Self::TechnicalFeasibility => "Technical infeasibility",
            Self::UnacceptableRisk => "Unacceptable risks",
            Self::ClientWithdrawal => "Cancelled by the client",
            Self::Compliance => "Compliance / legal",
            Self::Superseded => "Duplicate / superseded project",
            Self::StrategicDecision => "Strategic decision",
        }
    }
}

impl fmt::Display for CancellationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for CancellationReason {
    type Error = ParseCancellationReasonError;

    /// Parses a cancellation reason from text, accepting common aliases
    /// case-insensitively.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "over budget" | "over_budget" | "budget" | "budget overrun" => Ok(Self::OverBudget),
            "resource shortage" | "resource_shortage" | "resources" | "understaffed" => {
                Ok(Self::ResourceShortage)
            }
            "priority shift" | "priority_shift" | "priority change" | "reprioritisation"
            | "reprioritization" => Ok(Self::PriorityShift),
            "external dependencies" | "external_dependencies" | "dependencies" | "vendor" => {
                Ok(Self::ExternalDependencies)
            }
            "technical feasibility" | "technical_feasibility" | "infeasible"
            | "technically infeasible" => Ok(Self::TechnicalFeasibility),
            "unacceptable risk" | "unacceptable_risk" | "risk" => Ok(Self::UnacceptableRisk),
            "client withdrawal" | "client_withdrawal" | "client cancelled" | "client canceled" => {
                Ok(Self::ClientWithdrawal)
            }
            "compliance" | "legal" => Ok(Self::Compliance),
            "superseded" | "duplicate" | "replaced" => Ok(Self::Superseded),
            "strategic decision" | "strategic_decision" | "strategy" => Ok(Self::StrategicDecision),
            _ => Err(ParseCancellationReasonError(value.to_owned())),
        }
    }
}
