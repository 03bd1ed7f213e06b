//! Task aggregate root.

use super::{Priority, TaskId, TaskStatus, WorkDomainError};
use crate::identity::domain::UserId;
use crate::planning::domain::{Project, ProjectId};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Input for creating a task, with builder-style optional fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    project_id: ProjectId,
    title: String,
    description: String,
    assignee: Option<UserId>,
    priority: Priority,
    start_date: NaiveDate,
    expected_end: NaiveDate,
    estimated_hours: u32,
}

impl TaskDraft {
    /// Creates a draft with the mandatory fields.
    ///
    /// The priority defaults to medium and the estimate to zero hours.
    #[must_use]
    pub fn new(
        project: &Project,
        title: impl Into<String>,
        start_date: NaiveDate,
        expected_end: NaiveDate,
    ) -> Self {
        Self {
            project_id: project.id(),
            title: title.into(),
            description: String::new(),
            assignee: None,
            priority: Priority::default(),
            start_date,
            expected_end,
            estimated_hours: 0,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the initial assignee.
    #[must_use]
    pub const fn with_assignee(mut self, assignee: UserId) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the estimated effort in hours.
    #[must_use]
    pub const fn with_estimate(mut self, hours: u32) -> Self {
        self.estimated_hours = hours;
        self
    }
}

/// Task aggregate root.
///
/// Status changes are guarded by the transition table; once a task reaches
/// `Done` or `Cancelled` no further mutation is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    project_id: ProjectId,
    title: String,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    assignee: Option<UserId>,
    priority: Priority,
    status: TaskStatus,
    start_date: NaiveDate,
    expected_end: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    completed_on: Option<NaiveDate>,
    estimated_hours: u32,
    actual_hours: u32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task in the `New` state.
    ///
    /// # Errors
    ///
    /// Returns [`WorkDomainError::Required`] when the title is blank and
    /// [`WorkDomainError::EndBeforeStart`] when the expected end precedes
    /// the start.
    pub fn create(draft: TaskDraft, clock: &impl Clock) -> Result<Self, WorkDomainError> {
        let title = required_trimmed(&draft.title, "title")?;
        validate_dates(draft.start_date, draft.expected_end)?;

        let timestamp = clock.utc();
        Ok(Self {
            id: TaskId::new(),
            project_id: draft.project_id,
            title,
            description: draft.description.trim().to_owned(),
            assignee: draft.assignee,
            priority: draft.priority,
            status: TaskStatus::New,
            start_date: draft.start_date,
            expected_end: draft.expected_end,
            completed_on: None,
            estimated_hours: draft.estimated_hours,
            actual_hours: 0,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the assignee, when set.
    #[must_use]
    pub const fn assignee(&self) -> Option<UserId> {
        self.assignee
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the first day of the task.
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Returns the expected delivery date.
    #[must_use]
    pub const fn expected_end(&self) -> NaiveDate {
        self.expected_end
    }

    /// Returns the completion date, set only when the task is done.
    #[must_use]
    pub const fn completed_on(&self) -> Option<NaiveDate> {
        self.completed_on
    }

    /// Returns the estimated effort in hours.
    #[must_use]
    pub const fn estimated_hours(&self) -> u32 {
        self.estimated_hours
    }

    /// Returns the accumulated actual effort in hours.
    #[must_use]
    pub const fn actual_hours(&self) -> u32 {
        self.actual_hours
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Moves both dates, keeping the expected end at or after the start.
    ///
    /// # Errors
    ///
    /// Returns [`WorkDomainError::TaskFinalized`] on a terminal task and
    /// [`WorkDomainError::EndBeforeStart`] when the new end precedes the new
    /// start.
    pub fn replan(
        &mut self,
        start_date: NaiveDate,
        expected_end: NaiveDate,
        clock: &impl Clock,
    ) -> Result<(), WorkDomainError> {
        self.ensure_not_finalized()?;
        validate_dates(start_date, expected_end)?;
        self.start_date = start_date;
        self.expected_end = expected_end;
        self.touch(clock);
        Ok(())
    }

    /// Assigns the task; `None` unassigns it.
    ///
    /// # Errors
    ///
    /// Returns [`WorkDomainError::TaskFinalized`] on a terminal task.
    pub fn assign(
        &mut self,
        assignee: Option<UserId>,
        clock: &impl Clock,
    ) -> Result<(), WorkDomainError> {
        self.ensure_not_finalized()?;
        self.assignee = assignee;
        self.touch(clock);
        Ok(())
    }

    /// Replaces the priority.
    ///
    /// # Errors
    ///
    /// Returns [`WorkDomainError::TaskFinalized`] on a terminal task.
    pub fn set_priority(
        &mut self,
        priority: Priority,
        clock: &impl Clock,
    ) -> Result<(), WorkDomainError> {
        self.ensure_not_finalized()?;
        self.priority = priority;
        self.touch(clock);
        Ok(())
    }

    /// Replaces the title.
    ///
    /// # Errors
    ///
    /// Returns [`WorkDomainError::TaskFinalized`] on a terminal task and
    /// [`WorkDomainError::Required`] when the title is blank.
    pub fn rename(&mut self, title: &str, clock: &impl Clock) -> Result<(), WorkDomainError> {
        self.ensure_not_finalized()?;
        self.title = required_trimmed(title, "title")?;
        self.touch(clock);
        Ok(())
    }

    /// Replaces the description; an empty value clears it.
    ///
    /// # Errors
    ///
    /// Returns [`WorkDomainError::TaskFinalized`] on a terminal task.
    pub fn change_description(
        &mut self,
        description: &str,
        clock: &impl Clock,
    ) -> Result<(), WorkDomainError> {
        self.ensure_not_finalized()?;
        self.description = description.trim().to_owned();
        self.touch(clock);
        Ok(())
    }

    /// Replaces the estimated effort.
    ///
    /// # Errors
    ///
    /// Returns [`WorkDomainError::TaskFinalized`] on a terminal task.
    pub fn set_estimate(&mut self, hours: u32, clock: &impl Clock) -> Result<(), WorkDomainError> {
        self.ensure_not_finalized()?;
        self.estimated_hours = hours;
        self.touch(clock);
        Ok(())
    }

    /// Adds to the accumulated actual effort.
    ///
    /// # Errors
    ///
    /// Returns [`WorkDomainError::TaskFinalized`] on a terminal task and
    /// [`WorkDomainError::ZeroEffortHours`] when `hours` is zero.
    pub fn log_effort(&mut self, hours: u32, clock: &impl Clock) -> Result<(), WorkDomainError> {
        self.ensure_not_finalized()?;
        if hours == 0 {
            return Err(WorkDomainError::ZeroEffortHours);
        }
        self.actual_hours += hours;
        self.touch(clock);
        Ok(())
    }

    /// Changes the lifecycle status, consulting the transition table.
    ///
    /// Completion is not reachable this way: it must carry its hours and
    /// date atomically through [`Task::complete`].
    ///
    /// # Errors
    ///
    /// Returns [`WorkDomainError::InvalidStateTransition`] when the table
    /// forbids the change and [`WorkDomainError::CompleteViaStatusChange`]
    /// when the target is `Done`.
    pub fn change_status(
        &mut self,
        target: TaskStatus,
        clock: &impl Clock,
    ) -> Result<(), WorkDomainError> {
        if !self.status.can_transition_to(target) {
            return Err(WorkDomainError::InvalidStateTransition {
                task_id: self.id,
                from: self.status,
                to: target,
            });
        }
        if target == TaskStatus::Done {
            return Err(WorkDomainError::CompleteViaStatusChange(self.id));
        }
        self.status = target;
        self.touch(clock);
        Ok(())
    }

    /// Starts work on the task.
    ///
    /// # Errors
    ///
    /// Returns [`WorkDomainError::InvalidStateTransition`] unless the table
    /// permits moving to `InProgress`.
    pub fn start(&mut self, clock: &impl Clock) -> Result<(), WorkDomainError> {
        self.change_status(TaskStatus::InProgress, clock)
    }

    /// Blocks the task on an impediment; idempotent on an already blocked
    /// task.
    ///
    /// # Errors
    ///
    /// Returns [`WorkDomainError::TaskFinalized`] on a terminal task.
    pub fn block(&mut self, clock: &impl Clock) -> Result<(), WorkDomainError> {
        self.ensure_not_finalized()?;
        self.status = TaskStatus::Blocked;
        self.touch(clock);
        Ok(())
    }

    /// Cancels the task; idempotent on an already cancelled task.
    ///
    /// # Errors
    ///
    /// Returns [`WorkDomainError::TaskFinalized`] on a done task.
    pub fn cancel(&mut self, clock: &impl Clock) -> Result<(), WorkDomainError> {
        if self.status == TaskStatus::Done {
            return Err(WorkDomainError::TaskFinalized(self.id));
        }
        self.status = TaskStatus::Cancelled;
        self.touch(clock);
        Ok(())
    }

    /// Completes the task, recording the final hours and completion date
    /// atomically.
    ///
    /// # Errors
    ///
    /// Returns [`WorkDomainError::InvalidStateTransition`] unless the
    /// current state may reach `Done`, and
    /// [`WorkDomainError::CompletionBeforeStart`] when the completion date
    /// precedes the task's start.
    pub fn complete(
        &mut self,
        hours_spent: u32,
        completed_on: NaiveDate,
        clock: &impl Clock,
    ) -> Result<(), WorkDomainError> {
        if !self.status.can_transition_to(TaskStatus::Done) {
            return Err(WorkDomainError::InvalidStateTransition {
                task_id: self.id,
                from: self.status,
                to: TaskStatus::Done,
            });
        }
        if completed_on < self.start_date {
            return Err(WorkDomainError::CompletionBeforeStart {
                start: self.start_date,
                completed_on,
            });
        }
        self.actual_hours += hours_spent;
        self.completed_on = Some(completed_on);
        self.status = TaskStatus::Done;
        self.touch(clock);
        Ok(())
    }

    /// Returns `true` when the task is not terminal and its expected end
    /// precedes `reference`.
    #[must_use]
    pub fn is_overdue(&self, reference: NaiveDate) -> bool {
        self.status.is_active() && self.expected_end < reference
    }

    fn ensure_not_finalized(&self) -> Result<(), WorkDomainError> {
        if self.status.is_terminal() {
            return Err(WorkDomainError::TaskFinalized(self.id));
        }
        Ok(())
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

/// Validates a mandatory text field and returns its trimmed form.
fn required_trimmed(value: &str, field: &'static str) -> Result<String, WorkDomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(WorkDomainError::Required(field));
    }
    Ok(trimmed.to_owned())
}

/// Checks the expected end does not precede the start.
fn validate_dates(start_date: NaiveDate, expected_end: NaiveDate) -> Result<(), WorkDomainError> {
    if expected_end < start_date {
        return Err(WorkDomainError::EndBeforeStart {
            start: start_date,
            end: expected_end,
        });
    }
    Ok(())
}
