//! Time-bounded allocation of a team's capacity to a project.

use super::{AllocationId, Period, PlanningDomainError, Project, ProjectId, Team, TeamId};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Links a team to a project over a validity period, with a weekly hour
/// capacity.
///
/// A freshly created allocation is open-ended; closing it records the last
/// day the team is committed to the project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    id: AllocationId,
    project_id: ProjectId,
    team_id: TeamId,
    period: Period,
    weekly_capacity_hours: u32,
    notes: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Allocation {
    /// Creates an open-ended allocation of `team` to `project`.
    #[must_use]
    pub fn new(
        project: &Project,
        team: &Team,
        start_date: NaiveDate,
        weekly_capacity_hours: u32,
        notes: &str,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: AllocationId::new(),
            project_id: project.id(),
            team_id: team.id(),
            period: Period::open(start_date),
            weekly_capacity_hours,
            notes: notes.trim().to_owned(),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the allocation identifier.
    #[must_use]
    pub const fn id(&self) -> AllocationId {
        self.id
    }

    /// Returns the allocated project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the allocated team.
    #[must_use]
    pub const fn team_id(&self) -> TeamId {
        self.team_id
    }

    /// Returns the validity period.
    #[must_use]
    pub const fn period(&self) -> Period {
        self.period
    }

    /// Returns the weekly capacity in hours.
    #[must_use]
    pub const fn weekly_capacity_hours(&self) -> u32 {
        self.weekly_capacity_hours
    }

    /// Returns the free-text notes.
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
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

    /// Replaces the validity period; an absent end keeps it open.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningDomainError::EndBeforeStart`] when the end precedes
    /// the start.
    pub fn adjust_period(
        &mut self,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        clock: &impl Clock,
    ) -> Result<(), PlanningDomainError> {
        self.period = Period::new(start_date, end_date)?;
        self.touch(clock);
        Ok(())
    }

    /// Closes the allocation on `end_date`.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningDomainError::EndBeforeStart`] when the end precedes
    /// the period's start.
    pub fn close(
        &mut self,
        end_date: NaiveDate,
        clock: &impl Clock,
    ) -> Result<(), PlanningDomainError> {
        self.period.close(end_date)?;
        self.touch(clock);
        Ok(())
    }

    /// Reopens the allocation, clearing its end date.
    pub fn reopen(&mut self, clock: &impl Clock) {
        self.period.reopen();
        self.touch(clock);
    }

    /// Replaces the weekly capacity.
    pub fn set_weekly_capacity(&mut self, hours: u32, clock: &impl Clock) {
        self.weekly_capacity_hours = hours;
        self.touch(clock);
    }

    /// Replaces the notes; an empty value clears them.
    pub fn set_notes(&mut self, notes: &str, clock: &impl Clock) {
        self.notes = notes.trim().to_owned();
        self.touch(clock);
    }

    /// Returns `true` when the allocation covers `date`.
    #[must_use]
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.period.is_active_on(date)
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
