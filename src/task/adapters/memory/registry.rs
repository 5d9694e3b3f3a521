//! Ordered in-memory registry keyed by task identifier.

use mockable::Clock;
use std::collections::BTreeMap;

use crate::task::{
    domain::{Task, TaskId, TaskStatus},
    ports::{TaskPatch, TaskRegistry, TaskRegistryError, TaskRegistryResult},
};

/// Single-session task registry backed by an ordered map.
///
/// Identifiers come from a monotonically increasing counter and are never
/// reused, so key order equals creation order and iteration yields tasks
/// oldest-first. Creation timestamps are drawn from the injected clock.
///
/// The registry carries no internal locking; it expects one logical caller
/// at a time.
#[derive(Debug)]
pub struct InMemoryTaskRegistry<C> {
    clock: C,
    tasks: BTreeMap<TaskId, Task>,
    next_id: TaskId,
}

impl<C: Clock> InMemoryTaskRegistry<C> {
    /// Creates an empty registry drawing timestamps from `clock`.
    #[must_use]
    pub const fn new(clock: C) -> Self {
        Self {
            clock,
            tasks: BTreeMap::new(),
            next_id: TaskId::first(),
        }
    }

    fn get_mut(&mut self, id: TaskId) -> TaskRegistryResult<&mut Task> {
        self.tasks
            .get_mut(&id)
            .ok_or(TaskRegistryError::NotFound(id))
    }

    fn set_status(&mut self, id: TaskId, status: TaskStatus) -> TaskRegistryResult<Task> {
        let task = self.get_mut(id)?;
        task.set_status(status);
        Ok(task.clone())
    }
}

impl<C: Clock> TaskRegistry for InMemoryTaskRegistry<C> {
    fn add(&mut self, title: &str, description: &str) -> TaskRegistryResult<Task> {
        // Validation happens inside the constructor, before the counter
        // advances, so a rejected title burns no identifier.
        let task = Task::new(self.next_id, title, description, &self.clock)?;
        self.next_id = self.next_id.next();
        self.tasks.insert(task.id(), task.clone());
        Ok(task)
    }

    fn list(&self) -> Vec<Task> {
        self.tasks.values().cloned().collect()
    }

    fn get(&self, id: TaskId) -> TaskRegistryResult<Task> {
        self.tasks
            .get(&id)
            .cloned()
            .ok_or(TaskRegistryError::NotFound(id))
    }

    fn update(&mut self, id: TaskId, patch: TaskPatch) -> TaskRegistryResult<Task> {
        let task = self.get_mut(id)?;
        // Title first: rename only commits a valid value, so failing here
        // leaves the task untouched with the description not yet applied.
        if let Some(title) = patch.title() {
            task.rename(title)?;
        }
        if let Some(description) = patch.description() {
            task.set_description(description);
        }
        Ok(task.clone())
    }

    fn delete(&mut self, id: TaskId) -> bool {
        self.tasks.remove(&id).is_some()
    }

    fn mark_complete(&mut self, id: TaskId) -> TaskRegistryResult<Task> {
        self.set_status(id, TaskStatus::Complete)
    }

    fn mark_incomplete(&mut self, id: TaskId) -> TaskRegistryResult<Task> {
        self.set_status(id, TaskStatus::Incomplete)
    }
}
