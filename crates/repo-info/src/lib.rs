// crates/repo-info/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod render;
pub mod transport;

pub use client::{RepoInfoClient, RepoSummary};
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};

/// Crate version, also sent in the `User-Agent` header.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
