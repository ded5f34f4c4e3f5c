// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use line_counter_domain::config::Extension;

use super::value_enum::CliOutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "line_counter",
    version = crate::VERSION,
    about = "Count lines of code in a file or directory.",
    long_about = "Count non-empty lines in a single file, or in every file under a directory whose \
                  name ends with an allowed extension (default: .py .js .html .css .ts .d.ts)."
)]
pub struct Args {
    /// 1ファイルの非空行を数える
    #[arg(short = 'f', long, value_name = "PATH", value_hint = ValueHint::FilePath, conflicts_with = "directory")]
    pub file: Option<PathBuf>,

    /// ディレクトリ以下を再帰的に数える
    #[arg(short = 'd', long, value_name = "PATH", value_hint = ValueHint::DirPath)]
    pub directory: Option<PathBuf>,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table", help_heading = "出力")]
    pub format: CliOutputFormat,

    /// 対象とする拡張子（カンマ区切り/複数指定可）。指定するとデフォルト一覧を置き換える
    #[arg(long, value_delimiter = ',', value_name = "EXT", help_heading = "フィルタ")]
    pub ext: Vec<Extension>,

    /// 読めないファイルがあった時点で集計を中断する
    #[arg(long, help_heading = "動作")]
    pub strict: bool,

    /// シンボリックリンク先のディレクトリにも降りる（ループは検出してスキップ）
    #[arg(long, help_heading = "動作")]
    pub follow_links: bool,

    /// ログを詳細にする（-v: info, -vv: debug）。RUST_LOG が優先される
    #[arg(short, long, action = ArgAction::Count, help_heading = "動作")]
    pub verbose: u8,
}
