//! In-memory repositories for the planning ports.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::planning::{
    domain::{Project, ProjectId, Team, TeamId},
    ports::{
        ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult, TeamRepository,
        TeamRepositoryError, TeamRepositoryResult,
    },
};

/// Thread-safe in-memory project store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    state: Arc<RwLock<HashMap<ProjectId, Project>>>,
}

impl InMemoryProjectRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProjectRepository for InMemoryProjectRepository {
    fn add(&self, project: &Project) -> ProjectRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ProjectRepositoryError::storage(std::io::Error::other(err.to_string()))
        })?;
        if state.contains_key(&project.id()) {
            return Err(ProjectRepositoryError::DuplicateProject(project.id()));
        }
        state.insert(project.id(), project.clone());
        Ok(())
    }

    fn update(&self, project: &Project) -> ProjectRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ProjectRepositoryError::storage(std::io::Error::other(err.to_string()))
        })?;
        if !state.contains_key(&project.id()) {
            return Err(ProjectRepositoryError::NotFound(project.id()));
        }
        state.insert(project.id(), project.clone());
        Ok(())
    }

    fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        let state = self.state.read().map_err(|err| {
            ProjectRepositoryError::storage(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.get(&id).cloned())
    }

    fn list_all(&self) -> ProjectRepositoryResult<Vec<Project>> {
        let state = self.state.read().map_err(|err| {
            ProjectRepositoryError::storage(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.values().cloned().collect())
    }
}

/// Thread-safe in-memory team store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTeamRepository {
    state: Arc<RwLock<HashMap<TeamId, Team>>>,
}

impl InMemoryTeamRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TeamRepository for InMemoryTeamRepository {
    fn add(&self, team: &Team) -> TeamRepositoryResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TeamRepositoryError::storage(std::io::Error::other(err.to_string())))?;
        if state.contains_key(&team.id()) {
            return Err(TeamRepositoryError::DuplicateTeam(team.id()));
        }
        state.insert(team.id(), team.clone());
        Ok(())
    }

    fn update(&self, team: &Team) -> TeamRepositoryResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TeamRepositoryError::storage(std::io::Error::other(err.to_string())))?;
        if !state.contains_key(&team.id()) {
            return Err(TeamRepositoryError::NotFound(team.id()));
        }
        state.insert(team.id(), team.clone());
        Ok(())
    }

    fn find_by_id(&self, id: TeamId) -> TeamRepositoryResult<Option<Team>> {
        let state = self
            .state
            .read()
            .map_err(|err| TeamRepositoryError::storage(std::io::Error::other(err.to_string())))?;
        Ok(state.get(&id).cloned())
    }

    fn list_all(&self) -> TeamRepositoryResult<Vec<Team>> {
        let state = self
            .state
            .read()
            .map_err(|err| TeamRepositoryError::storage(std::io::Error::other(err.to_string())))?;
        Ok(state.values().cloned().collect())
    }
}
