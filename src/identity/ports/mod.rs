//! Port contracts for user storage and lookup.
//!
//! Ports define infrastructure-agnostic interfaces used by the user
//! directory service.

pub mod repository;

pub use repository::{UserRepository, UserRepositoryError, UserRepositoryResult};
