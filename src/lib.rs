//! Taskbook: a single-session task tracker.
//!
//! Tasks live in memory for the lifetime of one process invocation; there
//! is no persistence, no concurrency, and no network surface.
//!
//! # Architecture
//!
//! Taskbook follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task data and validation with no infrastructure
//!   dependencies
//! - **Ports**: The registry contract the command layer depends on
//! - **Adapters**: The in-memory registry and the command-line boundary
//!
//! # Modules
//!
//! - [`task`]: Task entity, registry contract, and in-memory registry
//! - [`cli`]: Command parsing, dispatch, and output rendering

pub mod cli;
pub mod task;
