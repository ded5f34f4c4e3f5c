// src/app.rs
use std::io::Write;

use line_counter_infra::{NonEmptyLineMeasurer, TracingProgress, TreeWalker};
use line_counter_shared_kernel::{ErrorContext, Result};
use line_counter_usecase::CountLines;
use tracing::info;

use crate::{
    config::{Config, Mode},
    exit::ExitStatus,
    presentation::{self, Report},
};

pub const GUIDANCE: &str = "Please specify either a file with -f or a directory with -d.";

/// Runs one invocation, writing the report to `out` and per-file problems to `diagnostics`.
///
/// A directory scan that skipped unreadable files still renders its report
/// but returns [`ExitStatus::Decode`].
///
/// # Errors
///
/// Returns `Err` for invalid paths, fatal decode errors and output failures.
pub fn run(config: &Config, out: &mut impl Write, diagnostics: &mut impl Write) -> Result<ExitStatus> {
    let filesystem = TreeWalker::new();
    let measurer = NonEmptyLineMeasurer::new();
    let progress = TracingProgress;
    let usecase = CountLines::new(&filesystem, &measurer, &progress);

    match &config.mode {
        Mode::Guidance => {
            writeln!(out, "{GUIDANCE}")?;
            Ok(ExitStatus::Success)
        }
        Mode::File(path) => {
            let entry = usecase.count_file(path)?;
            presentation::render(Report::File(&entry), config.format, out).context("writing report")?;
            Ok(ExitStatus::Success)
        }
        Mode::Directory(root) => {
            info!(root = %root.display(), extensions = config.scan.extensions.len(), "scanning directory");
            let result = usecase.count_directory(root, &config.scan)?;
            presentation::render(Report::Directory(&result), config.format, out).context("writing report")?;
            presentation::render_failures(&result, diagnostics).context("reporting skipped files")?;
            Ok(if result.has_failures() { ExitStatus::Decode } else { ExitStatus::Success })
        }
    }
}
