// tests/integration/end_to_end.rs
use std::path::Path;

use clap::Parser;
use line_counter::{
    app,
    cli::{Args, build_config},
    exit::ExitStatus,
};
use predicates::prelude::*;
use serde_json::Value;

use crate::common::{TempWorkspace, line_counter_cmd};

fn project() -> TempWorkspace {
    let ws = TempWorkspace::new("proj");
    ws.create_file("a.py", "import sys\n\nprint(sys.argv)\n    \nsys.exit(0)\n");
    ws.create_file("b.js", "\n  \n\t\n");
    ws.create_file("c.md", "# not counted\n\nat all\n");
    ws
}

fn scan_json(root: &Path, extra: &[&str]) -> Value {
    let mut argv = vec!["line_counter", "-d", root.to_str().unwrap(), "--format", "json"];
    argv.extend_from_slice(extra);
    let config = build_config(Args::parse_from(argv)).expect("config builds");
    let mut out = Vec::new();
    let mut diagnostics = Vec::new();
    app::run(&config, &mut out, &mut diagnostics).expect("scan succeeds");
    serde_json::from_slice(&out).expect("valid json")
}

fn entry_names(json: &Value) -> Vec<String> {
    let mut names: Vec<String> = json["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| Path::new(e["path"].as_str().unwrap()).file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn scenario_counts_allowed_files_only() {
    let ws = project();
    let json = scan_json(ws.path(), &[]);

    assert_eq!(entry_names(&json), vec!["a.py", "b.js"]);
    assert_eq!(json["total"], 3);
    let a = json["entries"].as_array().unwrap().iter().find(|e| e["path"].as_str().unwrap().ends_with("a.py")).unwrap();
    assert_eq!(a["lines"], 3);
}

#[test]
fn two_files_add_up() {
    let ws = TempWorkspace::new("additive");
    ws.create_file("one.css", "body {\n  margin: 0;\n}\n");
    ws.create_file("two.html", "<html>\n\n</html>\n");
    let json = scan_json(ws.path(), &[]);

    assert_eq!(json["entries"].as_array().unwrap().len(), 2);
    assert_eq!(json["total"], 5);
}

#[test]
fn declaration_files_are_counted_once() {
    let ws = TempWorkspace::new("dts");
    ws.create_file("index.ts", "export {};\n");
    ws.create_file("types.d.ts", "declare const x: number;\ndeclare const y: string;\n");
    ws.create_file("notes.txt", "ignored\n");
    let json = scan_json(ws.path(), &[]);

    assert_eq!(entry_names(&json), vec!["index.ts", "types.d.ts"]);
    assert_eq!(json["total"], 3);
}

#[test]
fn nested_directories_are_descended() {
    let ws = TempWorkspace::new("nested");
    ws.create_file("a/b/c/d/e/deep.py", "x = 1\n");
    ws.create_file(".hidden/secret.js", "let s;\n");
    let json = scan_json(ws.path(), &[]);

    assert_eq!(entry_names(&json), vec!["deep.py", "secret.js"]);
}

#[test]
fn scanning_twice_gives_identical_results() {
    let ws = project();
    assert_eq!(scan_json(ws.path(), &[]), scan_json(ws.path(), &[]));
}

#[test]
fn ext_flag_switches_allow_list() {
    let ws = project();
    let json = scan_json(ws.path(), &["--ext", "md"]);
    assert_eq!(entry_names(&json), vec!["c.md"]);
    assert_eq!(json["total"], 2);
}

#[test]
fn undecodable_file_is_skipped_and_reported() {
    let ws = project();
    ws.create_bytes("blob.js", &[0xff, 0xfe, 0x00, 0x41, b'\n']);
    let config = build_config(Args::parse_from(["line_counter", "-d", ws.path().to_str().unwrap()])).unwrap();

    let mut out = Vec::new();
    let mut diagnostics = Vec::new();
    let status = app::run(&config, &mut out, &mut diagnostics).unwrap();

    assert_eq!(status, ExitStatus::Decode);
    let stdout = String::from_utf8(out).unwrap();
    assert!(stdout.contains("Total lines in directory"));
    assert!(!stdout.contains("blob.js"));
    let stderr = String::from_utf8(diagnostics).unwrap();
    assert!(stderr.contains("blob.js"));
    assert!(stderr.contains("1 file(s) could not be read"));
}

#[test]
fn binary_prints_table_for_directory() {
    let ws = project();
    line_counter_cmd()
        .arg("-d")
        .arg(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("File Path"))
        .stdout(predicate::str::contains("Lines Counted"))
        .stdout(predicate::str::contains("a.py"))
        .stdout(predicate::str::contains("c.md").not())
        .stdout(predicate::str::contains(format!(
            "\n\nTotal lines in directory '{}': 3\n",
            ws.path().display()
        )));
}

#[test]
fn binary_prints_sentence_for_file() {
    let ws = project();
    let file = ws.path().join("a.py");
    line_counter_cmd()
        .arg("--file")
        .arg(&file)
        .assert()
        .success()
        .stdout(format!("Lines in file '{}': 3\n", file.display()));
}

#[test]
fn file_mode_counts_files_outside_the_allow_list() {
    let ws = project();
    let file = ws.path().join("c.md");
    line_counter_cmd()
        .arg("-f")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::ends_with(": 2\n"));
}
