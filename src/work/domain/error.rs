//! Error types for work domain validation and parsing.

use super::{TaskId, TaskStatus};
use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned while constructing work domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkDomainError {
    /// A mandatory field is missing or blank after trimming.
    #[error("required field not provided: {0}")]
    Required(&'static str),

    /// The expected end precedes the start date.
    #[error("expected end {end} precedes start date {start}")]
    EndBeforeStart {
        /// Start of the offending range.
        start: NaiveDate,
        /// End of the offending range.
        end: NaiveDate,
    },

    /// The requested status change is not permitted by the transition table.
    #[error("cannot change task status from {from} to {to}")]
    InvalidStateTransition {
        /// Task whose status change was rejected.
        task_id: TaskId,
        /// Status the task currently holds.
        from: TaskStatus,
        /// Status that was requested.
        to: TaskStatus,
    },

    /// Mutation attempted on a task in a terminal state.
    #[error("task {0} is finalised and cannot be modified")]
    TaskFinalized(TaskId),

    /// Completion was requested through the generic status change instead of
    /// the dedicated operation that records hours and date.
    #[error("task {0} must be completed through complete(), which records hours and date")]
    CompleteViaStatusChange(TaskId),

    /// The completion date precedes the task's start date.
    #[error("completion date {completed_on} precedes task start {start}")]
    CompletionBeforeStart {
        /// First day of the task.
        start: NaiveDate,
        /// Rejected completion date.
        completed_on: NaiveDate,
    },

    /// Logged effort must be at least one hour.
    #[error("effort hours must be greater than zero")]
    ZeroEffortHours,

    /// The effort entry is dated before the task started.
    #[error("effort date {date} precedes task start {task_start}")]
    EffortBeforeTaskStart {
        /// First day of the task.
        task_start: NaiveDate,
        /// Rejected entry date.
        date: NaiveDate,
    },

    /// The comment message is blank after trimming.
    #[error("comment message must not be empty")]
    EmptyMessage,

    /// The comment message is longer than the accepted maximum.
    #[error("comment message has {length} characters, above the 1000 limit")]
    MessageTooLong {
        /// Length of the rejected message, in characters.
        length: usize,
    },
}

/// Error returned while parsing a task status from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing a task priority from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);
