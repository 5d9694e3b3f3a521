//! Domain model for task tracking.
//!
//! The task domain models creation-time validation, completion status,
//! and in-place mutation while keeping all infrastructure concerns
//! outside of the domain boundary.

mod error;
mod ids;
mod task;

pub use error::TaskDomainError;
pub use ids::TaskId;
pub use task::{Task, TaskStatus};
