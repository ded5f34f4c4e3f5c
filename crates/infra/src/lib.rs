// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod measurement;
pub mod persistence;
pub mod progress;

pub use filesystem::TreeWalker;
pub use measurement::NonEmptyLineMeasurer;
pub use progress::TracingProgress;
