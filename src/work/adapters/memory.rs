//! In-memory task repository adapter.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::planning::domain::ProjectId;
use crate::work::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn add(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TaskRepositoryError::storage(std::io::Error::other(err.to_string())))?;
        if state.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        state.insert(task.id(), task.clone());
        Ok(())
    }

    fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TaskRepositoryError::storage(std::io::Error::other(err.to_string())))?;
        if !state.contains_key(&task.id()) {
            return Err(TaskRepositoryError::NotFound(task.id()));
        }
        state.insert(task.id(), task.clone());
        Ok(())
    }

    fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self
            .state
            .read()
            .map_err(|err| TaskRepositoryError::storage(std::io::Error::other(err.to_string())))?;
        Ok(state.get(&id).cloned())
    }

    fn list_by_project(&self, project: ProjectId) -> TaskRepositoryResult<Vec<Task>> {
        let state = self
            .state
            .read()
            .map_err(|err| TaskRepositoryError::storage(std::io::Error::other(err.to_string())))?;
        let tasks = state
            .values()
            .filter(|task| task.project_id() == project)
            .cloned()
            .collect();
        Ok(tasks)
    }

    fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self
            .state
            .read()
            .map_err(|err| TaskRepositoryError::storage(std::io::Error::other(err.to_string())))?;
        Ok(state.values().cloned().collect())
    }
}
