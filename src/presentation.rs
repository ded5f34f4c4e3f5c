// src/presentation.rs
//! Renderers for scan results. Counting code never depends on these.

pub mod delimited;
pub mod structured;
pub mod table;

use std::io::Write;

use line_counter_domain::model::{LineCountEntry, ScanResult};
use line_counter_shared_kernel::Result;

use crate::config::OutputFormat;

/// Something that can be rendered: one file or one directory scan.
#[derive(Debug, Clone, Copy)]
pub enum Report<'a> {
    File(&'a LineCountEntry),
    Directory(&'a ScanResult),
}

/// Render `report` in the requested `format` to `out`.
///
/// # Errors
///
/// Returns `Err` when writing to `out` or serialising fails.
pub fn render(report: Report<'_>, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Table => table::output_table(report, out),
        OutputFormat::Json => structured::output_json(report, out),
        OutputFormat::Csv => delimited::output_csv(report, out),
    }
}

/// One line per file that could not be counted, then a summary line.
///
/// # Errors
///
/// Returns `Err` when writing to `out` fails.
pub fn render_failures(result: &ScanResult, out: &mut impl Write) -> Result<()> {
    if !result.has_failures() {
        return Ok(());
    }
    for failure in result.failures() {
        writeln!(out, "Skipped '{}': {}", failure.path().display(), failure.reason())?;
    }
    writeln!(out, "{} file(s) could not be read", result.failures().len())?;
    Ok(())
}
