//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: counting a single file or a whole directory tree
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod orchestrator;

pub use orchestrator::CountLines;
