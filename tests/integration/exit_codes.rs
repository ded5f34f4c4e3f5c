// tests/integration/exit_codes.rs
use predicates::prelude::*;

use crate::common::{TempWorkspace, line_counter_cmd};

#[test]
fn no_arguments_prints_guidance_and_succeeds() {
    line_counter_cmd()
        .assert()
        .code(0)
        .stdout("Please specify either a file with -f or a directory with -d.\n");
}

#[test]
fn help_succeeds() {
    line_counter_cmd().arg("--help").assert().success().stdout(predicate::str::contains("--directory"));
}

#[test]
fn file_and_directory_together_conflict() {
    let ws = TempWorkspace::new("conflict");
    let file = ws.create_file("a.py", "x\n");
    line_counter_cmd()
        .arg("-f")
        .arg(&file)
        .arg("-d")
        .arg(ws.path())
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Please specify either a file or a directory, not both"));
}

#[test]
fn missing_file_is_an_invalid_path() {
    let ws = TempWorkspace::new("missing");
    line_counter_cmd()
        .arg("-f")
        .arg(ws.path().join("nope.py"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid file path"));
}

#[test]
fn directory_given_as_file_is_an_invalid_path() {
    let ws = TempWorkspace::new("kind");
    line_counter_cmd()
        .arg("-f")
        .arg(ws.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Please enter a valid file."));
}

#[test]
fn file_given_as_directory_is_an_invalid_path() {
    let ws = TempWorkspace::new("kind");
    let file = ws.create_file("a.py", "x\n");
    line_counter_cmd()
        .arg("-d")
        .arg(&file)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid directory path"));
}

#[test]
fn undecodable_single_file_fails_with_decode_code() {
    let ws = TempWorkspace::new("decode");
    let file = ws.create_bytes("blob.py", &[0xc3, 0x28, b'\n']);
    line_counter_cmd()
        .arg("-f")
        .arg(&file)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("not valid UTF-8"));
}

#[test]
fn skipped_files_still_print_report_with_decode_code() {
    let ws = TempWorkspace::new("partial");
    ws.create_file("ok.py", "print(1)\n");
    ws.create_bytes("bad.js", &[0xff, b'\n']);
    line_counter_cmd()
        .arg("-d")
        .arg(ws.path())
        .assert()
        .code(4)
        .stdout(predicate::str::contains("Total lines in directory"))
        .stderr(predicate::str::contains("Skipped"));
}

#[test]
fn strict_mode_aborts_without_report() {
    let ws = TempWorkspace::new("strict");
    ws.create_file("ok.py", "print(1)\n");
    ws.create_bytes("bad.js", &[0xff, b'\n']);
    line_counter_cmd()
        .arg("-d")
        .arg(ws.path())
        .arg("--strict")
        .assert()
        .code(4)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("aborted"));
}
