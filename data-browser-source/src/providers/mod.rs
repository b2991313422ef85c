//! Record source implementations

/// Shared utilities used by source implementations.
pub mod common;

mod memory;
mod rest;

pub use memory::MemorySource;
pub use rest::{RestOptions, RestSource};
