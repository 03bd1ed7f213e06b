//! Adapter implementations of the work ports.

pub mod memory;

pub use memory::InMemoryTaskRepository;
