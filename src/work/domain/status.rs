//! Task lifecycle status and its transition table.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// The task has been created but work has not started.
    New,
    /// The task is being worked on.
    InProgress,
    /// Work is stopped on an impediment.
    Blocked,
    /// The task was delivered.
    Done,
    /// The task was abandoned.
    Cancelled,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::InProgress => "in_progress",
            Self::Blocked => "blocked",
            Self::Done => "done",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns the human-readable label for screens and reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::InProgress => "In progress",
            Self::Blocked => "Blocked",
            Self::Done => "Done",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Returns `true` for states still open for work.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::New | Self::InProgress | Self::Blocked)
    }

    /// Returns `true` for states with no outgoing transitions.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Cancelled)
    }

    /// Returns `true` when the transition table permits moving to `target`.
    ///
    /// New tasks may start, block, or be cancelled; in-progress tasks may
    /// block, finish, or be cancelled; blocked tasks may resume, finish, or
    /// be cancelled; terminal states allow nothing.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::New, Self::InProgress | Self::Blocked | Self::Cancelled)
                | (Self::InProgress, Self::Blocked | Self::Done | Self::Cancelled)
                | (Self::Blocked, Self::InProgress | Self::Done | Self::Cancelled)
        )
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    /// Parses a status from text, accepting common aliases
    /// case-insensitively.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "new" | "open" => Ok(Self::New),
            "in progress" | "in_progress" | "started" | "ongoing" => Ok(Self::InProgress),
            "blocked" => Ok(Self::Blocked),
            "done" | "completed" | "finished" => Ok(Self::Done),
            "cancelled" | "canceled" => Ok(Self::Cancelled),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}
