//! Identifier types for the task domain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a task record.
///
/// Identifiers are positive integers handed out by the registry from a
/// monotonically increasing counter, so their ordering is creation
/// ordering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Creates a task identifier from its integer value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the wrapped integer value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// The first identifier a fresh registry assigns.
    pub(crate) const fn first() -> Self {
        Self(1)
    }

    /// Returns the identifier following this one.
    pub(crate) const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
