//! Effort log entries, plus aggregation helpers.

use super::{EffortEntryId, Task, TaskId, WorkDomainError};
use crate::identity::domain::{User, UserId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Immutable record of hours spent on a task by a user on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffortLogEntry {
    id: EffortEntryId,
    task_id: TaskId,
    user_id: UserId,
    date: NaiveDate,
    hours: u32,
    note: String,
}

impl EffortLogEntry {
    /// Creates a validated entry against the task it logs hours for.
    ///
    /// The note is optional and stored trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`WorkDomainError::ZeroEffortHours`] when `hours` is zero and
    /// [`WorkDomainError::EffortBeforeTaskStart`] when the date precedes the
    /// task's start date.
    pub fn new(
        task: &Task,
        user: &User,
        date: NaiveDate,
        hours: u32,
        note: &str,
    ) -> Result<Self, WorkDomainError> {
        if hours == 0 {
            return Err(WorkDomainError::ZeroEffortHours);
        }
        if date < task.start_date() {
            return Err(WorkDomainError::EffortBeforeTaskStart {
                task_start: task.start_date(),
                date,
            });
        }
        Ok(Self {
            id: EffortEntryId::new(),
            task_id: task.id(),
            user_id: user.id(),
            date,
            hours,
            note: note.trim().to_owned(),
        })
    }

    /// Returns the entry identifier.
    #[must_use]
    pub const fn id(&self) -> EffortEntryId {
        self.id
    }

    /// Returns the task the hours were spent on.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the user who logged the hours.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the day the hours were spent.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the number of hours.
    #[must_use]
    pub const fn hours(&self) -> u32 {
        self.hours
    }

    /// Returns the free-text note.
    #[must_use]
    pub fn note(&self) -> &str {
        &self.note
    }
}

/// Returns the total hours across all entries.
#[must_use]
pub fn total_hours(entries: &[EffortLogEntry]) -> u32 {
    entries.iter().map(EffortLogEntry::hours).sum()
}

/// Returns the hours grouped by the user who logged them.
#[must_use]
pub fn hours_by_user(entries: &[EffortLogEntry]) -> HashMap<UserId, u32> {
    let mut totals = HashMap::new();
    for entry in entries {
        *totals.entry(entry.user_id()).or_insert(0) += entry.hours();
    }
    totals
}

/// Returns the hours grouped by task.
#[must_use]
pub fn hours_by_task(entries: &[EffortLogEntry]) -> HashMap<TaskId, u32> {
    let mut totals = HashMap::new();
    for entry in entries {
        *totals.entry(entry.task_id()).or_insert(0) += entry.hours();
    }
    totals
}

/// Returns the entries dated in `[start, end]`, oldest first; an absent end
/// is unbounded.
#[must_use]
pub fn within_period(
    entries: &[EffortLogEntry],
    start: NaiveDate,
    end: Option<NaiveDate>,
) -> Vec<&EffortLogEntry> {
    let mut selected: Vec<&EffortLogEntry> = entries
        .iter()
        .filter(|entry| entry.date() >= start)
        .filter(|entry| end.is_none_or(|bound| entry.date() <= bound))
        .collect();
    selected.sort_by_key(|entry| entry.date());
    selected
}
