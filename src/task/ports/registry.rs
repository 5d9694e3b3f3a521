//! Registry port for task creation, lookup, mutation, and removal.

use crate::task::domain::{Task, TaskDomainError, TaskId};
use thiserror::Error;

/// Result type for task registry operations.
pub type TaskRegistryResult<T> = Result<T, TaskRegistryError>;

/// Authoritative task collection contract.
///
/// Implementations own the collection outright: read operations hand out
/// clones, so mutating a returned [`Task`] can never corrupt registry
/// state. Operations are synchronous and assume one logical caller at a
/// time; a concurrent host must serialise access externally.
pub trait TaskRegistry {
    /// Creates and stores a new incomplete task, returning a copy of it.
    ///
    /// The title and description are stored trimmed. The assigned
    /// identifier is strictly greater than every identifier the registry
    /// has handed out before, including identifiers of deleted tasks.
    /// A failed add stores nothing.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRegistryError::InvalidData`] when the title is empty
    /// after trimming.
    fn add(&mut self, title: &str, description: &str) -> TaskRegistryResult<Task>;

    /// Returns copies of every task in creation order.
    fn list(&self) -> Vec<Task>;

    /// Returns a copy of the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRegistryError::NotFound`] when no task has the
    /// identifier.
    fn get(&self, id: TaskId) -> TaskRegistryResult<Task>;

    /// Applies a partial update to the task with the given identifier and
    /// returns a copy of the result.
    ///
    /// Fields absent from the patch are left unchanged; an empty patch is
    /// a no-op that still returns the task. The update is all-or-nothing:
    /// a rejected title leaves the stored task untouched even when the
    /// patch also carries a description.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRegistryError::NotFound`] when no task has the
    /// identifier, or [`TaskRegistryError::InvalidData`] when the patched
    /// title is empty after trimming.
    fn update(&mut self, id: TaskId, patch: TaskPatch) -> TaskRegistryResult<Task>;

    /// Removes the task with the given identifier.
    ///
    /// Returns whether a task was found and removed. Absence is a normal
    /// outcome here, not an error, unlike [`TaskRegistry::update`] and the
    /// status operations.
    fn delete(&mut self, id: TaskId) -> bool;

    /// Marks the task complete and returns a copy of it. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRegistryError::NotFound`] when no task has the
    /// identifier.
    fn mark_complete(&mut self, id: TaskId) -> TaskRegistryResult<Task>;

    /// Marks the task incomplete and returns a copy of it. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRegistryError::NotFound`] when no task has the
    /// identifier.
    fn mark_incomplete(&mut self, id: TaskId) -> TaskRegistryResult<Task>;
}

/// Partial update payload for [`TaskRegistry::update`].
///
/// An unset field leaves the stored value unchanged; a set field replaces
/// it, including an explicitly empty description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    title: Option<String>,
    description: Option<String>,
}

impl TaskPatch {
    /// Creates a patch that changes nothing.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            title: None,
            description: None,
        }
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the replacement title, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the replacement description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Errors returned by task registry implementations.
///
/// Both kinds are local, recoverable conditions the caller is expected to
/// catch and report.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskRegistryError {
    /// No task with the given identifier exists.
    #[error("task with ID {0} not found")]
    NotFound(TaskId),

    /// The supplied task data failed domain validation.
    #[error(transparent)]
    InvalidData(#[from] TaskDomainError),
}
