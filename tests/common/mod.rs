// tests/common/mod.rs
//! 共通テストユーティリティ

pub mod temp;

#[allow(unused_imports)]
pub use temp::TempWorkspace;

use assert_cmd::Command;

/// Command for the `line_counter` binary with logging silenced.
#[allow(dead_code)]
pub fn line_counter_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_line_counter"));
    cmd.env_remove("RUST_LOG");
    cmd
}
