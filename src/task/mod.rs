//! Task management for Taskbook.
//!
//! This module implements the behavioral core: identifier assignment,
//! title validation, lookup, and status mutation over an in-memory task
//! collection. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
