//! Task aggregate root and completion status.

use super::{TaskDomainError, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Completion status of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task still needs doing. The default for newly created tasks.
    #[default]
    Incomplete,
    /// Task has been finished.
    Complete,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Incomplete => "incomplete",
            Self::Complete => "complete",
        }
    }

    /// Returns `true` for [`TaskStatus::Complete`].
    #[must_use]
    pub const fn is_complete(self) -> bool {
        matches!(self, Self::Complete)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Task aggregate root.
///
/// Constructed only by the registry's add operation; mutated only through
/// registry operations. The identifier and creation timestamp never change
/// once assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    status: TaskStatus,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new incomplete task stamped with the current clock time.
    ///
    /// Title and description are stored trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is empty
    /// after trimming.
    pub(crate) fn new(
        id: TaskId,
        title: &str,
        description: &str,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        Ok(Self {
            id,
            title: validated_title(title)?,
            description: description.trim().to_owned(),
            status: TaskStatus::Incomplete,
            created_at: clock.utc(),
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description; empty when none was given.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the completion status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replaces the title with a trimmed, validated value.
    ///
    /// The stored title is untouched when validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the new title is empty
    /// after trimming.
    pub(crate) fn rename(&mut self, title: &str) -> Result<(), TaskDomainError> {
        self.title = validated_title(title)?;
        Ok(())
    }

    /// Replaces the description with a trimmed value; empty is allowed.
    pub(crate) fn set_description(&mut self, description: &str) {
        self.description = description.trim().to_owned();
    }

    /// Sets the completion status. Idempotent.
    pub(crate) const fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }
}

/// Trims a candidate title, rejecting whitespace-only input.
fn validated_title(title: &str) -> Result<String, TaskDomainError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(TaskDomainError::EmptyTitle);
    }
    Ok(trimmed.to_owned())
}
