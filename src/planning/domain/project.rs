//! Project aggregate root.

use super::{CancellationReason, PlanningDomainError, ProjectId, ProjectStatus};
use crate::identity::domain::{User, UserId};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Input for creating a project, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    /// Project name.
    pub name: String,
    /// Project description.
    pub description: String,
    /// First day of execution.
    pub start_date: NaiveDate,
    /// Expected delivery date; never precedes the start.
    pub expected_end: NaiveDate,
}

/// Project aggregate root.
///
/// Every status mutation consults the transition table, so a value of this
/// type can only ever follow Planned to InProgress to Done, with
/// cancellation possible from either non-terminal state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    name: String,
    description: String,
    start_date: NaiveDate,
    expected_end: NaiveDate,
    status: ProjectStatus,
    manager_id: UserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    cancellation_reason: Option<CancellationReason>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Project {
    /// Creates a planned project led by `manager`.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningDomainError::Required`] when the name or
    /// description is blank, [`PlanningDomainError::EndBeforeStart`] when
    /// the expected end precedes the start, and
    /// [`PlanningDomainError::ManagerRoleRequired`] when the manager is a
    /// plain contributor.
    pub fn create(
        draft: ProjectDraft,
        manager: &User,
        clock: &impl Clock,
    ) -> Result<Self, PlanningDomainError> {
        let name = required_trimmed(&draft.name, "name")?;
        let description = required_trimmed(&draft.description, "description")?;
        validate_dates(draft.start_date, draft.expected_end)?;
        ensure_managing_role(manager)?;

        let timestamp = clock.utc();
        Ok(Self {
            id: ProjectId::new(),
            name,
            description,
            start_date: draft.start_date,
            expected_end: draft.expected_end,
            status: ProjectStatus::Planned,
            manager_id: manager.id(),
            cancellation_reason: None,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the project description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the first day of execution.
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Returns the expected delivery date.
    #[must_use]
    pub const fn expected_end(&self) -> NaiveDate {
        self.expected_end
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns the responsible manager.
    #[must_use]
    pub const fn manager_id(&self) -> UserId {
        self.manager_id
    }

    /// Returns the recorded cancellation reason, when the project was
    /// cancelled through [`Project::cancel`].
    #[must_use]
    pub const fn cancellation_reason(&self) -> Option<CancellationReason> {
        self.cancellation_reason
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
    /// Returns [`PlanningDomainError::ProjectFinalized`] on a terminal
    /// project and [`PlanningDomainError::EndBeforeStart`] when the new end
    /// precedes the new start.
    pub fn replan(
        &mut self,
        start_date: NaiveDate,
        expected_end: NaiveDate,
        clock: &impl Clock,
    ) -> Result<(), PlanningDomainError> {
        self.ensure_not_finalized()?;
        validate_dates(start_date, expected_end)?;
        self.start_date = start_date;
        self.expected_end = expected_end;
        self.touch(clock);
        Ok(())
    }

    /// Replaces the description.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningDomainError::ProjectFinalized`] on a terminal
    /// project and [`PlanningDomainError::Required`] when the description is
    /// blank.
    pub fn change_description(
        &mut self,
        description: &str,
        clock: &impl Clock,
    ) -> Result<(), PlanningDomainError> {
        self.ensure_not_finalized()?;
        self.description = required_trimmed(description, "description")?;
        self.touch(clock);
        Ok(())
    }

    /// Transfers responsibility to another managing user.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningDomainError::ProjectFinalized`] on a terminal
    /// project and [`PlanningDomainError::ManagerRoleRequired`] when the new
    /// manager is a plain contributor.
    pub fn assign_manager(
        &mut self,
        manager: &User,
        clock: &impl Clock,
    ) -> Result<(), PlanningDomainError> {
        self.ensure_not_finalized()?;
        ensure_managing_role(manager)?;
        self.manager_id = manager.id();
        self.touch(clock);
        Ok(())
    }

    /// Changes the lifecycle status, consulting the transition table.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningDomainError::InvalidStateTransition`] when the
    /// table forbids the change.
    pub fn change_status(
        &mut self,
        target: ProjectStatus,
        clock: &impl Clock,
    ) -> Result<(), PlanningDomainError> {
        if !self.status.can_transition_to(target) {
            return Err(PlanningDomainError::InvalidStateTransition {
                project_id: self.id,
                from: self.status,
                to: target,
            });
        }
        self.status = target;
        self.touch(clock);
        Ok(())
    }

    /// Starts execution.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningDomainError::InvalidStateTransition`] unless the
    /// project is planned.
    pub fn start(&mut self, clock: &impl Clock) -> Result<(), PlanningDomainError> {
        self.change_status(ProjectStatus::InProgress, clock)
    }

    /// Marks the project as delivered.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningDomainError::InvalidStateTransition`] unless the
    /// project is in progress.
    pub fn complete(&mut self, clock: &impl Clock) -> Result<(), PlanningDomainError> {
        self.change_status(ProjectStatus::Done, clock)
    }

    /// Cancels the project, recording the standardised reason.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningDomainError::InvalidStateTransition`] when the
    /// project is already terminal.
    pub fn cancel(
        &mut self,
        reason: CancellationReason,
        clock: &impl Clock,
    ) -> Result<(), PlanningDomainError> {
        self.change_status(ProjectStatus::Cancelled, clock)?;
        self.cancellation_reason = Some(reason);
        Ok(())
    }

    /// Returns `true` when the project is not terminal and its expected end
    /// precedes `reference`.
    #[must_use]
    pub fn is_overdue(&self, reference: NaiveDate) -> bool {
        !self.status.is_terminal() && self.expected_end < reference
    }

    fn ensure_not_finalized(&self) -> Result<(), PlanningDomainError> {
        if self.status.is_terminal() {
            return Err(PlanningDomainError::ProjectFinalized(self.id));
        }
        Ok(())
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

/// Validates a mandatory text field and returns its trimmed form.
fn required_trimmed(value: &str, field: &'static str) -> Result<String, PlanningDomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PlanningDomainError::Required(field));
    }
    Ok(trimmed.to_owned())
}

/// Checks the expected end does not precede the start.
fn validate_dates(
    start_date: NaiveDate,
    expected_end: NaiveDate,
) -> Result<(), PlanningDomainError> {
    if expected_end < start_date {
        return Err(PlanningDomainError::EndBeforeStart {
            start: start_date,
            end: expected_end,
        });
    }
    Ok(())
}

/// Checks the user may take responsibility for a project.
fn ensure_managing_role(manager: &User) -> Result<(), PlanningDomainError> {
    if !manager.role().can_manage_projects() {
        return Err(PlanningDomainError::ManagerRoleRequired {
            login: manager.login().to_owned(),
            role: manager.role(),
        });
    }
    Ok(())
}
