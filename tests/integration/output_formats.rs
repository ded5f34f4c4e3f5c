// tests/integration/output_formats.rs
use predicates::prelude::*;
use serde_json::Value;

use crate::common::{TempWorkspace, line_counter_cmd};

fn workspace() -> TempWorkspace {
    let ws = TempWorkspace::new("formats");
    ws.create_file("app.ts", "const a = 1;\n\nconst b = 2;\n");
    ws.create_file("style.css", "\n");
    ws
}

#[test]
fn json_output_is_machine_readable() {
    let ws = workspace();
    let output = line_counter_cmd()
        .arg("-d")
        .arg(ws.path())
        .args(["--format", "json"])
        .output()
        .expect("runs");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(json["total"], 2);
    assert_eq!(json["entries"].as_array().unwrap().len(), 2);
    assert!(json["failures"].as_array().unwrap().is_empty());
}

#[test]
fn csv_output_has_header_rows_and_total() {
    let ws = workspace();
    line_counter_cmd()
        .arg("-d")
        .arg(ws.path())
        .args(["--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("path,lines\n"))
        .stdout(predicate::str::contains("app.ts\",2\n"))
        .stdout(predicate::str::contains("style.css\",0\n"))
        .stdout(predicate::str::ends_with("\"TOTAL\",2\n"));
}

#[test]
fn json_file_mode_reports_one_entry() {
    let ws = workspace();
    let output = line_counter_cmd()
        .arg("-f")
        .arg(ws.path().join("app.ts"))
        .args(["--format", "json"])
        .output()
        .expect("runs");
    let json: Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(json["lines"], 2);
}

#[test]
fn verbose_logging_goes_to_stderr_only() {
    let ws = workspace();
    let output = line_counter_cmd()
        .arg("-d")
        .arg(ws.path())
        .args(["--format", "json", "-vv"])
        .output()
        .expect("runs");
    assert!(output.status.success());
    serde_json::from_slice::<Value>(&output.stdout).expect("stdout stays pure JSON");
    assert!(String::from_utf8_lossy(&output.stderr).contains("scan complete"));
}
