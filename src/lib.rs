// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod cli;
pub mod config;
pub mod exit;
pub mod presentation;

/// Application version derived from Cargo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
