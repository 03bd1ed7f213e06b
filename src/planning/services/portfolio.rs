//! Service layer for portfolio management.
//!
//! Provides [`PortfolioService`] which coordinates project lifecycle
//! operations, team composition, and team-to-project allocations over the
//! planning repositories.

use crate::identity::domain::{User, UserId};
use crate::planning::{
    domain::{
        Allocation, CancellationReason, PlanningDomainError, Project, ProjectDraft, ProjectId,
        Team, TeamId,
    },
    ports::{
        ProjectRepository, ProjectRepositoryError, TeamRepository, TeamRepositoryError,
    },
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    name: String,
    description: String,
    start_date: NaiveDate,
    expected_end: NaiveDate,
}

impl CreateProjectRequest {
    /// Creates a request with all project fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        start_date: NaiveDate,
        expected_end: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            start_date,
            expected_end,
        }
    }
}

/// Service-level errors for portfolio operations.
#[derive(Debug, Error)]
pub enum PortfolioServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] PlanningDomainError),
    /// Project repository operation failed.
    #[error(transparent)]
    Projects(#[from] ProjectRepositoryError),
    /// Team repository operation failed.
    #[error(transparent)]
    Teams(#[from] TeamRepositoryError),
}

/// Result type for portfolio service operations.
pub type PortfolioServiceResult<T> = Result<T, PortfolioServiceError>;

/// Portfolio orchestration service over projects, teams, and allocations.
///
/// Allocations are returned to the caller rather than stored; callers hold
/// and aggregate them alongside effort logs and comments.
#[derive(Clone)]
pub struct PortfolioService<P, T, C>
where
    P: ProjectRepository,
    T: TeamRepository,
    C: Clock + Send + Sync,
{
    projects: Arc<P>,
    teams: Arc<T>,
    clock: Arc<C>,
}

impl<P, T, C> PortfolioService<P, T, C>
where
    P: ProjectRepository,
    T: TeamRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new portfolio service.
    #[must_use]
    pub const fn new(projects: Arc<P>, teams: Arc<T>, clock: Arc<C>) -> Self {
        Self {
            projects,
            teams,
            clock,
        }
    }

    /// Creates a planned project led by `manager`.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioServiceError::Domain`] when a field fails
    /// validation or the manager lacks a managing role, and
    /// [`PortfolioServiceError::Projects`] when persistence fails.
    pub fn create_project(
        &self,
        request: CreateProjectRequest,
        manager: &User,
    ) -> PortfolioServiceResult<Project> {
        let CreateProjectRequest {
            name,
            description,
            start_date,
            expected_end,
        } = request;
        let project = Project::create(
            ProjectDraft {
                name,
                description,
                start_date,
                expected_end,
            },
            manager,
            &*self.clock,
        )?;
        self.projects.add(&project)?;
        Ok(project)
    }

    /// Finds a project by identifier.
    ///
    /// Returns `Ok(None)` when no project has the given id.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioServiceError::Projects`] when the lookup fails.
    pub fn find_project(&self, id: ProjectId) -> PortfolioServiceResult<Option<Project>> {
        Ok(self.projects.find_by_id(id)?)
    }

    /// Returns all projects.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioServiceError::Projects`] when the lookup fails.
    pub fn list_projects(&self) -> PortfolioServiceResult<Vec<Project>> {
        Ok(self.projects.list_all()?)
    }

    /// Moves a project's dates.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioServiceError::Domain`] when the project is
    /// finalised or the dates are out of order, and
    /// [`PortfolioServiceError::Projects`] when the project is not found or
    /// persistence fails.
    pub fn replan_project(
        &self,
        id: ProjectId,
        start_date: NaiveDate,
        expected_end: NaiveDate,
    ) -> PortfolioServiceResult<Project> {
        let mut project = self.find_project_or_error(id)?;
        project.replan(start_date, expected_end, &*self.clock)?;
        self.projects.update(&project)?;
        Ok(project)
    }

    /// Starts a planned project.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioServiceError::Domain`] when the transition table
    /// forbids starting, and [`PortfolioServiceError::Projects`] when the
    /// project is not found or persistence fails.
    pub fn start_project(&self, id: ProjectId) -> PortfolioServiceResult<Project> {
        let mut project = self.find_project_or_error(id)?;
        project.start(&*self.clock)?;
        self.projects.update(&project)?;
        Ok(project)
    }

    /// Completes an in-progress project.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioServiceError::Domain`] when the transition table
    /// forbids completion, and [`PortfolioServiceError::Projects`] when the
    /// project is not found or persistence fails.
    pub fn complete_project(&self, id: ProjectId) -> PortfolioServiceResult<Project> {
        let mut project = self.find_project_or_error(id)?;
        project.complete(&*self.clock)?;
        self.projects.update(&project)?;
        Ok(project)
    }

    /// Cancels a project, recording the standardised reason.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioServiceError::Domain`] when the project is
    /// already terminal, and [`PortfolioServiceError::Projects`] when the
    /// project is not found or persistence fails.
    pub fn cancel_project(
        &self,
        id: ProjectId,
        reason: CancellationReason,
    ) -> PortfolioServiceResult<Project> {
        let mut project = self.find_project_or_error(id)?;
        project.cancel(reason, &*self.clock)?;
        self.projects.update(&project)?;
        Ok(project)
    }

    /// Creates an empty team.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioServiceError::Domain`] when the name is blank and
    /// [`PortfolioServiceError::Teams`] when persistence fails.
    pub fn create_team(&self, name: &str, description: &str) -> PortfolioServiceResult<Team> {
        let team = Team::create(name, description, &*self.clock)?;
        self.teams.add(&team)?;
        Ok(team)
    }

    /// Finds a team by identifier.
    ///
    /// Returns `Ok(None)` when no team has the given id.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioServiceError::Teams`] when the lookup fails.
    pub fn find_team(&self, id: TeamId) -> PortfolioServiceResult<Option<Team>> {
        Ok(self.teams.find_by_id(id)?)
    }

    /// Adds a user to a team.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioServiceError::Domain`] when the user is already a
    /// member, and [`PortfolioServiceError::Teams`] when the team is not
    /// found or persistence fails.
    pub fn add_member(&self, team_id: TeamId, user: &User) -> PortfolioServiceResult<Team> {
        let mut team = self.find_team_or_error(team_id)?;
        team.add_member(user, &*self.clock)?;
        self.teams.update(&team)?;
        Ok(team)
    }

    /// Removes a user from a team; a missing member is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioServiceError::Teams`] when the team is not found
    /// or persistence fails.
    pub fn remove_member(&self, team_id: TeamId, member: UserId) -> PortfolioServiceResult<Team> {
        let mut team = self.find_team_or_error(team_id)?;
        if team.remove_member(member, &*self.clock) {
            self.teams.update(&team)?;
        }
        Ok(team)
    }

    /// Allocates a team's weekly capacity to a project from `start_date`,
    /// open-ended.
    ///
    /// The allocation is returned to the caller, which owns its lifecycle.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioServiceError::Projects`] or
    /// [`PortfolioServiceError::Teams`] when either side of the link is not
    /// found or a lookup fails.
    pub fn allocate(
        &self,
        project_id: ProjectId,
        team_id: TeamId,
        start_date: NaiveDate,
        weekly_capacity_hours: u32,
        notes: &str,
    ) -> PortfolioServiceResult<Allocation> {
        let project = self.find_project_or_error(project_id)?;
        let team = self.find_team_or_error(team_id)?;
        Ok(Allocation::new(
            &project,
            &team,
            start_date,
            weekly_capacity_hours,
            notes,
            &*self.clock,
        ))
    }

    fn find_project_or_error(&self, id: ProjectId) -> PortfolioServiceResult<Project> {
        self.projects
            .find_by_id(id)?
            .ok_or_else(|| ProjectRepositoryError::NotFound(id).into())
    }

    fn find_team_or_error(&self, id: TeamId) -> PortfolioServiceResult<Team> {
        self.teams
            .find_by_id(id)?
            .ok_or_else(|| TeamRepositoryError::NotFound(id).into())
    }
}
