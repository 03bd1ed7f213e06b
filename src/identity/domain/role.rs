//! Access roles for system users.

use super::ParseRoleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Access role granted to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full administrative access.
    Admin,
    /// May take responsibility for projects and compose teams.
    Manager,
    /// Regular project contributor.
    Contributor,
}

impl Role {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Contributor => "contributor",
        }
    }

    /// Returns the human-readable label for screens and reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::Manager => "Manager",
            Self::Contributor => "Contributor",
        }
    }

    /// Returns `true` for the administrator role.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Returns `true` for the manager role.
    #[must_use]
    pub const fn is_manager(self) -> bool {
        matches!(self, Self::Manager)
    }

    /// Returns `true` for the contributor role.
    #[must_use]
    pub const fn is_contributor(self) -> bool {
        matches!(self, Self::Contributor)
    }

    /// Returns `true` for roles allowed to be responsible for a project.
    #[must_use]
    pub const fn can_manage_projects(self) -> bool {
        matches!(self, Self::Admin | Self::Manager)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    /// Parses a role from text, accepting common aliases case-insensitively.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "admin" | "adm" | "administrator" => Ok(Self::Admin),
            "manager" | "mgr" => Ok(Self::Manager),
            "contributor" | "collaborator" | "user" => Ok(Self::Contributor),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}
