//! Error types for planning domain validation and parsing.

use super::{ProjectId, ProjectStatus};
use crate::identity::domain::Role;
use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned while constructing planning domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlanningDomainError {
    /// A mandatory field is missing or blank after trimming.
    #[error("required field not provided: {0}")]
    Required(&'static str),

    /// The end of a date range precedes its start.
    #[error("end date {end} precedes start date {start}")]
    EndBeforeStart {
        /// Start of the offending range.
        start: NaiveDate,
        /// End of the offending range.
        end: NaiveDate,
    },

    /// The responsible manager lacks a managing role.
    #[error("user '{login}' holds role '{role}' and cannot be responsible for a project")]
    ManagerRoleRequired {
        /// Login of the rejected user.
        login: String,
        /// Role the user actually holds.
        role: Role,
    },

    /// The user is already a member of the team.
    #[error("user '{0}' is already a team member")]
    AlreadyMember(String),

    /// The requested status change is not permitted by the transition table.
    #[error("cannot change project status from {from} to {to}")]
    InvalidStateTransition {
        /// Project whose status change was rejected.
        project_id: ProjectId,
        /// Status the project currently holds.
        from: ProjectStatus,
        /// Status that was requested.
        to: ProjectStatus,
    },

    /// Mutation attempted on a project in a terminal state.
    #[error("project {0} is finalised and cannot be modified")]
    ProjectFinalized(ProjectId),
}

/// Error returned while parsing a project status from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown project status: {0}")]
pub struct ParseProjectStatusError(pub String);

/// Error returned while parsing a team role from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown team role: {0}")]
pub struct ParseTeamRoleError(pub String);

/// Error returned while parsing a cancellation reason from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown cancellation reason: {0}")]
pub struct ParseCancellationReasonError(pub String);
