//! Argument definitions for the taskbook command line.

use clap::{Parser, Subcommand, ValueEnum};

/// Parsed command-line invocation.
#[derive(Debug, Parser)]
#[command(
    name = "taskbook",
    about = "Track short text tasks for the lifetime of one invocation",
    after_help = "Examples:\n  \
        taskbook add \"Buy groceries\" \"Milk, bread, eggs\"\n  \
        taskbook list\n  \
        taskbook update 1 \"New title\" \"New description\"\n  \
        taskbook complete 1\n  \
        taskbook delete 1"
)]
pub struct Cli {
    /// Command to execute; usage help is printed when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Add a new task
    Add {
        /// Task title
        title: String,
        /// Task description
        description: Option<String>,
    },
    /// List all tasks
    List {
        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Update a task's title and description
    Update {
        /// Task ID
        id: u64,
        /// New task title
        title: Option<String>,
        /// New task description
        description: Option<String>,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: u64,
    },
    /// Mark a task as complete
    Complete {
        /// Task ID
        id: u64,
    },
    /// Mark a task as incomplete
    Incomplete {
        /// Task ID
        id: u64,
    },
}

/// Output format for the list command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Fixed-width columns with truncated text.
    #[default]
    Table,
    /// Pretty-printed JSON array.
    Json,
}
