//! Adapter implementations of the planning ports.

pub mod memory;

pub use memory::{InMemoryProjectRepository, InMemoryTeamRepository};
