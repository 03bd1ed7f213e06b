//! Project lifecycle status and its transition table.

use super::ParseProjectStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// The project has been approved but execution has not started.
    Planned,
    /// The project is being executed.
    InProgress,
    /// The project was delivered.
    Done,
    /// The project was abandoned before delivery.
    Cancelled,
}

impl ProjectStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::InProgress => "in_progress",
            Self::Done => "done",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns the human-readable label for screens and reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Planned => "Planned",
            Self::InProgress => "In progress",
            Self::Done => "Done",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Returns `true` while the project is being executed.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::InProgress)
    }

    /// Returns `true` for states with no outgoing transitions.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Cancelled)
    }

    /// Returns `true` when the transition table permits moving to `target`.
    ///
    /// Planned projects may start or be cancelled; in-progress projects may
    /// finish or be cancelled; terminal states allow nothing.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Planned, Self::InProgress | Self::Cancelled)
                | (Self::InProgress, Self::Done | Self::Cancelled)
        )
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProjectStatus {
    type Error = ParseProjectStatusError;

    /// Parses a status from text, accepting common aliases
    /// case-insensitively.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "planned" => Ok(Self::Planned),
            "in progress" | "in_progress" | "ongoing" => Ok(Self::InProgress),
            "done" | "completed" | "concluded" => Ok(Self::Done),
            "cancelled" | "canceled" => Ok(Self::Cancelled),
            _ => Err(ParseProjectStatusError(value.to_owned())),
        }
    }
}
