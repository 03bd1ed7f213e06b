//! Chantier: project and team management domain core.
//!
//! This crate provides the domain model for a small project-management
//! system: users with validated identity documents, projects and teams
//! with capacity allocations, and tasks with comments and effort logs.
//! All state lives in memory; validation happens at construction, so every
//! value the crate hands out is internally consistent.
//!
//! # Architecture
//!
//! Chantier follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory stores)
//!
//! # Modules
//!
//! - [`identity`]: Users, access roles, and validated personal data
//! - [`planning`]: Projects, teams, and capacity allocations
//! - [`work`]: Tasks, comments, effort logging, and CSV reports

pub mod identity;
pub mod planning;
pub mod work;
