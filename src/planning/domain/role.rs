//! Roles played by team members.

use super::ParseTeamRoleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Function a member performs within a team, used for composing teams and
/// grouping reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamRole {
    /// Writes and maintains code.
    Developer,
    /// Analyses requirements and systems.
    Analyst,
    /// Designs interfaces and interactions.
    Designer,
    /// Verifies quality and writes test plans.
    Qa,
}

impl TeamRole {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Developer => "developer",
            Self::Analyst => "analyst",
            Self::Designer => "designer",
            Self::Qa => "qa",
        }
    }

    /// Returns the human-readable label for screens and reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Developer => "Developer",
            Self::Analyst => "Systems analyst",
            Self::Designer => "Interface designer",
            Self::Qa => "Quality analyst (QA)",
        }
    }
}

impl fmt::Display for TeamRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TeamRole {
    type Error = ParseTeamRoleError;

    /// Parses a team role from text, accepting common aliases
    /// case-insensitively.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "dev" | "developer" => Ok(Self::Developer),
            "analyst" | "systems analyst" | "system analyst" => Ok(Self::Analyst),
            "designer" | "ui" | "ux" | "ui/ux" | "product designer" => Ok(Self::Designer),
            "qa" | "tester" | "quality assurance" => Ok(Self::Qa),
            _ => Err(ParseTeamRoleError(value.to_owned())),
        }
    }
}
