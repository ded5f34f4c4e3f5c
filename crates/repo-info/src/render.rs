// crates/repo-info/src/render.rs
use std::io::Write;

use comfy_table::{Table, presets::UTF8_FULL};
use serde_json::{Map, Value};

use crate::{client::RepoSummary, error::Result};

/// Longest value shown in the info table before truncation.
pub const MAX_VALUE_CHARS: usize = 30;
const ELLIPSIS: &str = "...";

/// Text for one value: strings unquoted, objects as `k: v` pairs, everything else as JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(fields) => fields
            .iter()
            .map(|(key, nested)| format!("{key}: {}", display_value(nested)))
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

/// Cuts `text` to 27 characters plus `...` when it exceeds [`MAX_VALUE_CHARS`].
pub fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_VALUE_CHARS {
        return text.to_string();
    }
    let keep = MAX_VALUE_CHARS - ELLIPSIS.len();
    let mut short: String = text.chars().take(keep).collect();
    short.push_str(ELLIPSIS);
    short
}

pub fn info_table(info: &Map<String, Value>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Key", "Value"]);
    for (key, value) in info {
        table.add_row(vec![key.clone(), truncate(&display_value(value))]);
    }
    table
}

pub fn list_table(repos: &[RepoSummary]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Repository Name", "Private"]);
    for repo in repos {
        table.add_row(vec![repo.name.clone(), repo.private.to_string()]);
    }
    table
}

pub fn write_info(info: &Map<String, Value>, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", info_table(info))?;
    Ok(())
}

pub fn write_list(repos: &[RepoSummary], out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", list_table(repos))?;
    Ok(())
}
