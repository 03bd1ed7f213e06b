//! Domain model for projects, teams, and capacity allocations.
//!
//! The planning domain models the project lifecycle (with a guarded status
//! machine), team composition, and the time-bounded allocation of a team's
//! weekly capacity to a project. All infrastructure concerns are kept
//! outside the domain boundary.

mod allocation;
mod cancellation;
mod error;
mod ids;
mod period;
mod project;
mod role;
mod status;
mod team;

pub use allocation::Allocation;
pub use cancellation::CancellationReason;
pub use error::{
    ParseCancellationReasonError, ParseProjectStatusError, ParseTeamRoleError,
    PlanningDomainError,
};
pub use ids::{AllocationId, ProjectId, TeamId};
pub use period::Period;
pub use project::{Project, ProjectDraft};
pub use role::TeamRole;
pub use status::ProjectStatus;
pub use team::Team;
