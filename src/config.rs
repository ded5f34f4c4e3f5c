// src/config.rs
use std::path::PathBuf;

use line_counter_domain::config::ScanOptions;

/// What a single invocation does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    File(PathBuf),
    Directory(PathBuf),
    /// Neither `-f` nor `-d` was given; print usage guidance and exit normally.
    Guidance,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// Fully resolved configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,
    pub scan: ScanOptions,
    pub format: OutputFormat,
    /// Number of `-v` flags.
    pub verbosity: u8,
}
