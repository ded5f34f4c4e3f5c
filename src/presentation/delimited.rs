// src/presentation/delimited.rs
use std::io::Write;

use line_counter_shared_kernel::Result;

use super::Report;

fn escape_field(s: &str) -> String {
    let escaped = s.replace('"', "\"\"");
    format!("\"{escaped}\"")
}

pub fn output_csv(report: Report<'_>, out: &mut impl Write) -> Result<()> {
    writeln!(out, "path,lines")?;
    match report {
        Report::File(entry) => {
            writeln!(out, "{},{}", escape_field(&entry.path().display().to_string()), entry.non_empty_lines())?;
        }
        Report::Directory(result) => {
            for entry in result.entries() {
                writeln!(out, "{},{}", escape_field(&entry.path().display().to_string()), entry.non_empty_lines())?;
            }
            writeln!(out, "{},{}", escape_field("TOTAL"), result.total())?;
        }
    }
    Ok(())
}
