//! Port contracts for project and team storage.
//!
//! Ports define infrastructure-agnostic interfaces used by the portfolio
//! service.

pub mod projects;
pub mod teams;

pub use projects::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult};
pub use teams::{TeamRepository, TeamRepositoryError, TeamRepositoryResult};
