//! Service layer for task tracking.
//!
//! Provides [`TrackingService`] which coordinates task creation, lifecycle
//! operations, effort logging, and commenting over a [`TaskRepository`].

use crate::identity::domain::{User, UserId};
use crate::planning::domain::{Project, ProjectId};
use crate::work::{
    domain::{
        Comment, EffortLogEntry, Priority, Task, TaskDraft, TaskId, WorkDomainError,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    assignee: Option<UserId>,
    priority: Option<Priority>,
    start_date: NaiveDate,
    expected_end: NaiveDate,
    estimated_hours: Option<u32>,
}

impl CreateTaskRequest {
    /// Creates a request with the mandatory fields.
    #[must_use]
    pub const fn new(title: String, start_date: NaiveDate, expected_end: NaiveDate) -> Self {
        Self {
            title,
            description: None,
            assignee: None,
            priority: None,
            start_date,
            expected_end,
            estimated_hours: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the initial assignee.
    #[must_use]
    pub const fn with_assignee(mut self, assignee: UserId) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Sets the priority; tasks default to medium.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the estimated effort in hours.
    #[must_use]
    pub const fn with_estimate(mut self, hours: u32) -> Self {
        self.estimated_hours = Some(hours);
        self
    }
}

/// Service-level errors for task tracking operations.
#[derive(Debug, Error)]
pub enum TrackingServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] WorkDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for tracking service operations.
pub type TrackingServiceResult<T> = Result<T, TrackingServiceError>;

/// Task tracking orchestration service.
///
/// Effort entries and comments are returned to the caller rather than
/// stored; callers hold and aggregate them with the helpers in the work
/// domain.
#[derive(Clone)]
pub struct TrackingService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TrackingService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new tracking service.
    #[must_use]
    pub const fn new(tasks: Arc<R>, clock: Arc<C>) -> Self {
        Self { tasks, clock }
    }

    /// Creates a task under `project`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingServiceError::Domain`] when a field fails
    /// validation and [`TrackingServiceError::Repository`] when persistence
    /// fails.
    pub fn create_task(
        &self,
        project: &Project,
        request: CreateTaskRequest,
    ) -> TrackingServiceResult<Task> {
        let CreateTaskRequest {
            title,
            description,
            assignee,
            priority,
            start_date,
            expected_end,
            estimated_hours,
        } = request;

        let mut draft = TaskDraft::new(project, title, start_date, expected_end);
        if let Some(text) = description {
            draft = draft.with_description(text);
        }
        if let Some(user) = assignee {
            draft = draft.with_assignee(user);
        }
        if let Some(level) = priority {
            draft = draft.with_priority(level);
        }
        if let Some(hours) = estimated_hours {
            draft = draft.with_estimate(hours);
        }

        let task = Task::create(draft, &*self.clock)?;
        self.tasks.add(&task)?;
        Ok(task)
    }

    /// Finds a task by identifier.
    ///
    /// Returns `Ok(None)` when no task has the given id.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingServiceError::Repository`] when the lookup fails.
    pub fn find_task(&self, id: TaskId) -> TrackingServiceResult<Option<Task>> {
        Ok(self.tasks.find_by_id(id)?)
    }

    /// Returns the tasks belonging to `project`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingServiceError::Repository`] when the lookup fails.
    pub fn list_project_tasks(&self, project: ProjectId) -> TrackingServiceResult<Vec<Task>> {
        Ok(self.tasks.list_by_project(project)?)
    }

    /// Starts work on a task.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingServiceError::Domain`] when the transition table
    /// forbids starting, and [`TrackingServiceError::Repository`] when the
    /// task is not found or persistence fails.
    pub fn start_task(&self, id: TaskId) -> TrackingServiceResult<Task> {
        let mut task = self.find_task_or_error(id)?;
        task.start(&*self.clock)?;
        self.tasks.update(&task)?;
        Ok(task)
    }

    /// Blocks a task on an impediment.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingServiceError::Domain`] on a finalised task, and
    /// [`TrackingServiceError::Repository`] when the task is not found or
    /// persistence fails.
    pub fn block_task(&self, id: TaskId) -> TrackingServiceResult<Task> {
        let mut task = self.find_task_or_error(id)?;
        task.block(&*self.clock)?;
        self.tasks.update(&task)?;
        Ok(task)
    }

    /// Cancels a task.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingServiceError::Domain`] on a done task, and
    /// [`TrackingServiceError::Repository`] when the task is not found or
    /// persistence fails.
    pub fn cancel_task(&self, id: TaskId) -> TrackingServiceResult<Task> {
        let mut task = self.find_task_or_error(id)?;
        task.cancel(&*self.clock)?;
        self.tasks.update(&task)?;
        Ok(task)
    }

    /// Completes a task, recording the final hours and completion date.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingServiceError::Domain`] when the transition table
    /// forbids completion or the date precedes the task's start, and
    /// [`TrackingServiceError::Repository`] when the task is not found or
    /// persistence fails.
    pub fn complete_task(
        &self,
        id: TaskId,
        hours_spent: u32,
        completed_on: NaiveDate,
    ) -> TrackingServiceResult<Task> {
        let mut task = self.find_task_or_error(id)?;
        task.complete(hours_spent, completed_on, &*self.clock)?;
        self.tasks.update(&task)?;
        Ok(task)
    }

    /// Moves a task's dates.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingServiceError::Domain`] when the task is finalised
    /// or the dates are out of order, and
    /// [`TrackingServiceError::Repository`] when the task is not found or
    /// persistence fails.
    pub fn replan_task(
        &self,
        id: TaskId,
        start_date: NaiveDate,
        expected_end: NaiveDate,
    ) -> TrackingServiceResult<Task> {
        let mut task = self.find_task_or_error(id)?;
        task.replan(start_date, expected_end, &*self.clock)?;
        self.tasks.update(&task)?;
        Ok(task)
    }

    /// Assigns a task; `None` unassigns it.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingServiceError::Domain`] on a finalised task, and
    /// [`TrackingServiceError::Repository`] when the task is not found or
    /// persistence fails.
    pub fn assign_task(
        &self,
        id: TaskId,
        assignee: Option<&User>,
    ) -> TrackingServiceResult<Task> {
        let mut task = self.find_task_or_error(id)?;
        task.assign(assignee.map(User::id), &*self.clock)?;
        self.tasks.update(&task)?;
        Ok(task)
    }

    /// Logs hours against a task: creates the entry and adds its hours to
    /// the task's accumulated effort in one operation.
    ///
    /// The entry is returned to the caller, which owns its lifecycle.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingServiceError::Domain`] when the hours are zero, the
    /// date precedes the task's start, or the task is finalised, and
    /// [`TrackingServiceError::Repository`] when the task is not found or
    /// persistence fails.
    pub fn log_effort(
        &self,
        task_id: TaskId,
        user: &User,
        date: NaiveDate,
        hours: u32,
        note: &str,
    ) -> TrackingServiceResult<EffortLogEntry> {
        let mut task = self.find_task_or_error(task_id)?;
        let entry = EffortLogEntry::new(&task, user, date, hours, note)?;
        task.log_effort(hours, &*self.clock)?;
        self.tasks.update(&task)?;
        Ok(entry)
    }

    /// Comments on a task with an explicit timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingServiceError::Domain`] when the message fails
    /// validation, and [`TrackingServiceError::Repository`] when the task is
    /// not found or the lookup fails.
    pub fn comment_at(
        &self,
        task_id: TaskId,
        author: &User,
        timestamp: DateTime<Utc>,
        message: &str,
    ) -> TrackingServiceResult<Comment> {
        let task = self.find_task_or_error(task_id)?;
        Ok(Comment::new(&task, author, timestamp, message)?)
    }

    /// Comments on a task, stamping the current clock time.
    ///
    /// # Errors
    ///
    /// Returns [`TrackingServiceError::Domain`] when the message fails
    /// validation, and [`TrackingServiceError::Repository`] when the task is
    /// not found or the lookup fails.
    pub fn comment_now(
        &self,
        task_id: TaskId,
        author: &User,
        message: &str,
    ) -> TrackingServiceResult<Comment> {
        let timestamp = self.clock.utc();
        self.comment_at(task_id, author, timestamp, message)
    }

    fn find_task_or_error(&self, id: TaskId) -> TrackingServiceResult<Task> {
        self.tasks
            .find_by_id(id)?
            .ok_or_else(|| TaskRepositoryError::NotFound(id).into())
    }
}
