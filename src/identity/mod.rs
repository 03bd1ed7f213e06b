//! User identity and access management for Chantier.
//!
//! This module covers system users: registration with validated personal
//! data (CPF tax id, e-mail), access roles, didactic password digests, and
//! a login-unique user directory. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
