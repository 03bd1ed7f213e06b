//! Repository port for team storage.

use crate::planning::domain::{Team, TeamId};
use std::sync::Arc;
use thiserror::Error;

/// Result type for team repository operations.
pub type TeamRepositoryResult<T> = Result<T, TeamRepositoryError>;

/// Team persistence contract.
pub trait TeamRepository: Send + Sync {
    /// Stores a new team.
    ///
    /// # Errors
    ///
    /// Returns [`TeamRepositoryError::DuplicateTeam`] when the identifier
    /// already exists.
    fn add(&self, team: &Team) -> TeamRepositoryResult<()>;

    /// Persists changes to an existing team.
    ///
    /// # Errors
    ///
    /// Returns [`TeamRepositoryError::NotFound`] when the team does not
    /// exist.
    fn update(&self, team: &Team) -> TeamRepositoryResult<()>;

    /// Finds a team by identifier.
    ///
    /// Returns `None` when the team does not exist.
    fn find_by_id(&self, id: TeamId) -> TeamRepositoryResult<Option<Team>>;

    /// Returns all stored teams.
    fn list_all(&self) -> TeamRepositoryResult<Vec<Team>>;
}

/// Errors returned by team repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TeamRepositoryError {
    /// A team with the same identifier already exists.
    #[error("duplicate team identifier: {0}")]
    DuplicateTeam(TeamId),

    /// The team was not found.
    #[error("team not found: {0}")]
    NotFound(TeamId),

    /// Storage-layer failure.
    #[error("storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl TeamRepositoryError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
