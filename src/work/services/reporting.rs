//! CSV exports for effort logs and task comments.
//!
//! The column headers and the semicolon-joined row format are the
//! established export format consumed by the reporting spreadsheets;
//! embedded separators in free-text fields are flattened so each record
//! stays on one line.

use crate::identity::domain::UserId;
use crate::planning::domain::ProjectId;
use crate::work::domain::{Comment, EffortLogEntry, TaskId};
use crate::work::ports::{TaskRepository, TaskRepositoryError};
use crate::identity::ports::{UserRepository, UserRepositoryError};
use std::sync::Arc;
use thiserror::Error;

/// Column header of the effort log export.
const EFFORT_LOG_HEADER: &str = "id;data;horas;usuario;task;obs";

/// Column header of the comment export.
const COMMENT_HEADER: &str = "id;dataHora;autor;task;mensagem";

/// Errors returned while rendering reports.
#[derive(Debug, Error)]
pub enum ReportingError {
    /// A record references a task the repository does not know.
    #[error("unknown task: {0}")]
    UnknownTask(TaskId),

    /// A record references a user the repository does not know.
    #[error("unknown user: {0}")]
    UnknownUser(UserId),

    /// Task lookup failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),

    /// User lookup failed.
    #[error(transparent)]
    Users(#[from] UserRepositoryError),
}

/// Result type for reporting operations.
pub type ReportingResult<T> = Result<T, ReportingError>;

/// Renders CSV reports, resolving record ids to task titles and user
/// logins.
#[derive(Clone)]
pub struct ReportingService<T, U>
where
    T: TaskRepository,
    U: UserRepository,
{
    tasks: Arc<T>,
    users: Arc<U>,
}

impl<T, U> ReportingService<T, U>
where
    T: TaskRepository,
    U: UserRepository,
{
    /// Creates a new reporting service.
    #[must_use]
    pub const fn new(tasks: Arc<T>, users: Arc<U>) -> Self {
        Self { tasks, users }
    }

    /// Renders the effort log export: the header plus one row per entry.
    ///
    /// # Errors
    ///
    /// Returns [`ReportingError::UnknownTask`] or
    /// [`ReportingError::UnknownUser`] when an entry references a missing
    /// record, and the repository variants when a lookup fails.
    pub fn effort_log_csv(&self, entries: &[EffortLogEntry]) -> ReportingResult<String> {
        let mut out = String::from(EFFORT_LOG_HEADER);
        for entry in entries {
            let title = self.task_title(entry.task_id())?;
            let login = self.user_login(entry.user_id())?;
            out.push('\n');
            out.push_str(
                &[
                    entry.id().to_string(),
                    entry.date().to_string(),
                    entry.hours().to_string(),
                    sanitize(&login),
                    sanitize(&title),
                    sanitize(entry.note()),
                ]
                .join(";"),
            );
        }
        Ok(out)
    }

    /// Renders the comment export: the header plus one row per comment.
    ///
    /// # Errors
    ///
    /// Returns [`ReportingError::UnknownTask`] or
    /// [`ReportingError::UnknownUser`] when a comment references a missing
    /// record, and the repository variants when a lookup fails.
    pub fn comments_csv(&self, comments: &[Comment]) -> ReportingResult<String> {
        let mut out = String::from(COMMENT_HEADER);
        for comment in comments {
            let title = self.task_title(comment.task_id())?;
            let login = self.user_login(comment.author_id())?;
            out.push('\n');
            out.push_str(
                &[
                    comment.id().to_string(),
                    comment.timestamp().format("%Y-%m-%dT%H:%M:%S").to_string(),
                    sanitize(&login),
                    sanitize(&title),
                    sanitize(comment.message()),
                ]
                .join(";"),
            );
        }
        Ok(out)
    }

    /// Renders the effort log export for one project only.
    ///
    /// # Errors
    ///
    /// As for [`ReportingService::effort_log_csv`], plus the task-lookup
    /// variants while listing the project's tasks.
    pub fn project_effort_csv(
        &self,
        project: ProjectId,
        entries: &[EffortLogEntry],
    ) -> ReportingResult<String> {
        let tasks = self.tasks.list_by_project(project)?;
        let selected: Vec<EffortLogEntry> = entries
            .iter()
            .filter(|entry| tasks.iter().any(|task| task.id() == entry.task_id()))
            .cloned()
            .collect();
        self.effort_log_csv(&selected)
    }

    fn task_title(&self, id: TaskId) -> ReportingResult<String> {
        self.tasks
            .find_by_id(id)?
            .map(|task| task.title().to_owned())
            .ok_or(ReportingError::UnknownTask(id))
    }

    fn user_login(&self, id: UserId) -> ReportingResult<String> {
        self.users
            .find_by_id(id)?
            .map(|user| user.login().to_owned())
            .ok_or(ReportingError::UnknownUser(id))
    }
}

/// Flattens CSV-breaking characters out of a text field: separators become
/// commas, newlines become spaces.
fn sanitize(field: &str) -> String {
    field.replace(';', ",").replace('\n', " ")
}
