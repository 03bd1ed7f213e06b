//! Comments made on tasks, plus collection helpers.

use super::{CommentId, Task, TaskId, WorkDomainError};
use crate::identity::domain::{User, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Longest accepted comment message, in characters.
pub const MAX_MESSAGE_LENGTH: usize = 1000;

/// Immutable comment made on a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    id: CommentId,
    task_id: TaskId,
    author_id: UserId,
    timestamp: DateTime<Utc>,
    message: String,
}

impl Comment {
    /// Creates a validated comment on `task`.
    ///
    /// The message is stored trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`WorkDomainError::EmptyMessage`] when the message is blank
    /// after trimming and [`WorkDomainError::MessageTooLong`] when it
    /// exceeds [`MAX_MESSAGE_LENGTH`] characters.
    pub fn new(
        task: &Task,
        author: &User,
        timestamp: DateTime<Utc>,
        message: &str,
    ) -> Result<Self, WorkDomainError> {
        let text = message.trim();
        if text.is_empty() {
            return Err(WorkDomainError::EmptyMessage);
        }
        let length = text.chars().count();
        if length > MAX_MESSAGE_LENGTH {
            return Err(WorkDomainError::MessageTooLong { length });
        }
        Ok(Self {
            id: CommentId::new(),
            task_id: task.id(),
            author_id: author.id(),
            timestamp,
            message: text.to_owned(),
        })
    }

    /// Returns the comment identifier.
    #[must_use]
    pub const fn id(&self) -> CommentId {
        self.id
    }

    /// Returns the commented task.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the author.
    #[must_use]
    pub const fn author_id(&self) -> UserId {
        self.author_id
    }

    /// Returns the moment the comment was made.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Returns the comments on `task`, oldest first.
#[must_use]
pub fn for_task(comments: &[Comment], task: TaskId) -> Vec<&Comment> {
    let mut selected: Vec<&Comment> = comments
        .iter()
        .filter(|comment| comment.task_id() == task)
        .collect();
    selected.sort_by_key(|comment| comment.timestamp());
    selected
}

/// Returns the comments written by `author`, oldest first.
#[must_use]
pub fn by_author(comments: &[Comment], author: UserId) -> Vec<&Comment> {
    let mut selected: Vec<&Comment> = comments
        .iter()
        .filter(|comment| comment.author_id() == author)
        .collect();
    selected.sort_by_key(|comment| comment.timestamp());
    selected
}

/// Returns the comments posted in `[start, end]`, oldest first; an absent
/// end is unbounded.
#[must_use]
pub fn within_period(
    comments: &[Comment],
    start: DateTime<Utc>,
    end: Option<DateTime<Utc>>,
) -> Vec<&Comment> {
    let mut selected: Vec<&Comment> = comments
        .iter()
        .filter(|comment| comment.timestamp() >= start)
        .filter(|comment| end.is_none_or(|bound| comment.timestamp() <= bound))
        .collect();
    selected.sort_by_key(|comment| comment.timestamp());
    selected
}

/// Returns the `n` most recent comments, in chronological order.
#[must_use]
pub fn latest(comments: &[Comment], n: usize) -> Vec<&Comment> {
    let mut all: Vec<&Comment> = comments.iter().collect();
    all.sort_by_key(|comment| comment.timestamp());
    let skip = all.len().saturating_sub(n);
    all.into_iter().skip(skip).collect()
}
