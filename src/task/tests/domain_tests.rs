//! Domain-focused tests for task validation and status behaviour.

use crate::task::domain::{Task, TaskDomainError, TaskId, TaskStatus};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

#[rstest]
fn new_task_trims_fields_and_defaults_to_incomplete(clock: DefaultClock) {
    let task = Task::new(TaskId::new(1), "  Buy groceries  ", "  Milk  ", &clock)
        .expect("valid task data");

    assert_eq!(task.id(), TaskId::new(1));
    assert_eq!(task.title(), "Buy groceries");
    assert_eq!(task.description(), "Milk");
    assert_eq!(task.status(), TaskStatus::Incomplete);
}

#[rstest]
#[case("")]
#[case("   ")]
fn new_task_rejects_blank_title(#[case] title: &str, clock: DefaultClock) {
    let result = Task::new(TaskId::new(1), title, "irrelevant", &clock);
    assert_eq!(result, Err(TaskDomainError::EmptyTitle));
}

#[rstest]
fn rename_commits_trimmed_title(clock: DefaultClock) {
    let mut task = Task::new(TaskId::new(1), "Original", "", &clock).expect("valid task data");

    task.rename("  Renamed  ").expect("valid new title");
    assert_eq!(task.title(), "Renamed");
}

#[rstest]
fn rename_rejects_blank_title_and_keeps_stored_value(clock: DefaultClock) {
    let mut task = Task::new(TaskId::new(1), "Original", "", &clock).expect("valid task data");

    let result = task.rename("   ");

    assert_eq!(result, Err(TaskDomainError::EmptyTitle));
    assert_eq!(task.title(), "Original");
}

#[rstest]
fn set_description_trims_and_allows_empty(clock: DefaultClock) {
    let mut task = Task::new(TaskId::new(1), "Title", "old", &clock).expect("valid task data");

    task.set_description("  new text  ");
    assert_eq!(task.description(), "new text");

    task.set_description("");
    assert_eq!(task.description(), "");
}

#[rstest]
fn set_status_is_idempotent(clock: DefaultClock) {
    let mut task = Task::new(TaskId::new(1), "Title", "", &clock).expect("valid task data");

    task.set_status(TaskStatus::Complete);
    task.set_status(TaskStatus::Complete);
    assert!(task.status().is_complete());

    task.set_status(TaskStatus::Incomplete);
    assert_eq!(task.status(), TaskStatus::Incomplete);
}

#[rstest]
fn status_canonical_representation() {
    assert_eq!(TaskStatus::Incomplete.as_str(), "incomplete");
    assert_eq!(TaskStatus::Complete.as_str(), "complete");
    assert_eq!(TaskStatus::default(), TaskStatus::Incomplete);
}

#[rstest]
fn task_serialises_with_flat_fields_and_rfc3339_timestamp(clock: DefaultClock) {
    let task = Task::new(TaskId::new(7), "Walk dog", "Around the block", &clock)
        .expect("valid task data");

    let value = serde_json::to_value(&task).expect("task should serialise");

    assert_eq!(value["id"], serde_json::json!(7));
    assert_eq!(value["title"], serde_json::json!("Walk dog"));
    assert_eq!(value["description"], serde_json::json!("Around the block"));
    assert_eq!(value["status"], serde_json::json!("incomplete"));
    let created_at = value["created_at"].as_str().expect("created_at is a string");
    chrono::DateTime::parse_from_rfc3339(created_at).expect("created_at is RFC 3339");
}
