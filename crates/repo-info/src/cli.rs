// crates/repo-info/src/cli.rs
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "repo_info", version = crate::VERSION, about = "GitHub API CLI Tool")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// ログを詳細にする（-v: info, -vv: debug）。RUST_LOG が優先される
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// リポジトリ関連のコマンド
    Repo {
        #[command(subcommand)]
        command: RepoCommand,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum RepoCommand {
    /// リポジトリの情報を表示する
    Info {
        /// リポジトリの所有者
        owner: String,
        /// リポジトリ名
        repo: String,
    },
    /// ユーザーのリポジトリ一覧を表示する
    List {
        /// ユーザーまたは組織
        owner: String,
    },
}
