//! Port contracts for task storage.
//!
//! Ports define infrastructure-agnostic interfaces used by the tracking and
//! reporting services.

pub mod tasks;

pub use tasks::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
