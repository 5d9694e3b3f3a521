//! In-memory task registry adapter.

mod registry;

pub use registry::InMemoryTaskRegistry;
