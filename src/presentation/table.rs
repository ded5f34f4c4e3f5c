// src/presentation/table.rs
use std::io::Write;

use comfy_table::{CellAlignment, Table, presets::UTF8_FULL};
use line_counter_domain::model::ScanResult;
use line_counter_shared_kernel::Result;

use super::Report;

pub const PATH_HEADER: &str = "File Path";
pub const LINES_HEADER: &str = "Lines Counted";

pub fn output_table(report: Report<'_>, out: &mut impl Write) -> Result<()> {
    match report {
        Report::File(entry) => {
            writeln!(out, "Lines in file '{}': {}", entry.path().display(), entry.non_empty_lines())?;
        }
        Report::Directory(result) => {
            writeln!(out, "{}", build_table(result))?;
            writeln!(out)?;
            writeln!(out, "Total lines in directory '{}': {}", result.root().display(), result.total())?;
        }
    }
    Ok(())
}

fn build_table(result: &ScanResult) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![PATH_HEADER, LINES_HEADER]);
    for entry in result.entries() {
        table.add_row(vec![entry.path().display().to_string(), entry.non_empty_lines().to_string()]);
    }
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}
