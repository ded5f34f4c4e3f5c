// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ApplicationError, DomainError, DomainResult, ErrorContext, InfrastructureError, LineCounterError,
    PathKind, PresentationError, Result,
};

pub mod error;
pub mod logging;
pub mod value_objects;

pub use value_objects::{FilePath, LineCount};
