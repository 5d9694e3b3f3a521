//! Port contracts for task management.
//!
//! Ports define infrastructure-agnostic interfaces used by the command
//! layer.

pub mod registry;

pub use registry::{TaskPatch, TaskRegistry, TaskRegistryError, TaskRegistryResult};
