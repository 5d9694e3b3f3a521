//! Command-line adapter over the task registry.
//!
//! The adapter holds no business state: it translates one parsed command
//! into a registry call and renders the outcome. Registry errors are
//! reported as `Error:` lines on the output sink and never terminate the
//! process; only a failure to write output itself propagates.

mod command;
mod render;


pub use command::{Cli, Command, OutputFormat};

use std::io::{self, Write};

use clap::CommandFactory;

use crate::task::{
    domain::TaskId,
    ports::{TaskPatch, TaskRegistry},
};

/// Executes a parsed invocation against `registry`, writing output to
/// `out`.
///
/// # Errors
///
/// Returns an error only when writing to `out` fails.
pub fn run(cli: Cli, registry: &mut impl TaskRegistry, out: &mut impl Write) -> io::Result<()> {
    match cli.command {
        Some(Command::Add { title, description }) => {
            add(registry, &title, description.as_deref().unwrap_or(""), out)
        }
        Some(Command::List { format }) => list(registry, format, out),
        Some(Command::Update {
            id,
            title,
            description,
        }) => update(registry, id, title, description, out),
        Some(Command::Delete { id }) => delete(registry, id, out),
        Some(Command::Complete { id }) => complete(registry, id, out),
        Some(Command::Incomplete { id }) => incomplete(registry, id, out),
        None => usage(out),
    }
}

fn usage(out: &mut impl Write) -> io::Result<()> {
    Cli::command().write_long_help(out)
}

fn add(
    registry: &mut impl TaskRegistry,
    title: &str,
    description: &str,
    out: &mut impl Write,
) -> io::Result<()> {
    match registry.add(title, description) {
        Ok(task) => {
            writeln!(out, "Task added successfully!")?;
            writeln!(out, "ID: {}", task.id())?;
            writeln!(out, "Title: {}", task.title())?;
            writeln!(out, "Description: {}", task.description())?;
            writeln!(out, "Status: {}", render::status_label(task.status()))
        }
        Err(err) => writeln!(out, "Error: {err}"),
    }
}

fn list(
    registry: &mut impl TaskRegistry,
    format: OutputFormat,
    out: &mut impl Write,
) -> io::Result<()> {
    let tasks = registry.list();
    if tasks.is_empty() {
        return writeln!(out, "No tasks found.");
    }
    match format {
        OutputFormat::Table => render::write_table(out, &tasks),
        OutputFormat::Json => render::write_json(out, &tasks),
    }
}

fn update(
    registry: &mut impl TaskRegistry,
    id: u64,
    title: Option<String>,
    description: Option<String>,
    out: &mut impl Write,
) -> io::Result<()> {
    let mut patch = TaskPatch::new();
    if let Some(new_title) = title {
        patch = patch.with_title(new_title);
    }
    if let Some(new_description) = description {
        patch = patch.with_description(new_description);
    }
    match registry.update(TaskId::new(id), patch) {
        Ok(task) => {
            writeln!(out, "Task {id} updated successfully!")?;
            writeln!(out, "Title: {}", task.title())?;
            writeln!(out, "Description: {}", task.description())
        }
        Err(err) => writeln!(out, "Error: {err}"),
    }
}

fn delete(registry: &mut impl TaskRegistry, id: u64, out: &mut impl Write) -> io::Result<()> {
    if registry.delete(TaskId::new(id)) {
        writeln!(out, "Task {id} deleted successfully!")
    } else {
        writeln!(out, "Error: task with ID {id} not found")
    }
}

fn complete(registry: &mut impl TaskRegistry, id: u64, out: &mut impl Write) -> io::Result<()> {
    match registry.mark_complete(TaskId::new(id)) {
        Ok(_) => writeln!(out, "Task {id} marked as complete!"),
        Err(err) => writeln!(out, "Error: {err}"),
    }
}

fn incomplete(registry: &mut impl TaskRegistry, id: u64, out: &mut impl Write) -> io::Result<()> {
    match registry.mark_incomplete(TaskId::new(id)) {
        Ok(_) => writeln!(out, "Task {id} marked as incomplete!"),
        Err(err) => writeln!(out, "Error: {err}"),
    }
}
