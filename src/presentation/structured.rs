// src/presentation/structured.rs
use std::io::Write;

use line_counter_shared_kernel::Result;

use super::Report;

pub fn output_json(report: Report<'_>, out: &mut impl Write) -> Result<()> {
    match report {
        Report::File(entry) => serde_json::to_writer_pretty(&mut *out, entry)?,
        Report::Directory(result) => serde_json::to_writer_pretty(&mut *out, result)?,
    }
    writeln!(out)?;
    Ok(())
}
