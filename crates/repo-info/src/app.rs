// crates/repo-info/src/app.rs
use std::io::Write;

use crate::{
    cli::{Command, RepoCommand},
    client::RepoInfoClient,
    error::Result,
    render,
    transport::Transport,
};

/// Executes one command and prints its table to `out`.
pub fn run<T: Transport>(command: &Command, client: &RepoInfoClient<T>, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Repo { command: RepoCommand::Info { owner, repo } } => {
            let info = client.repo_info(owner, repo)?;
            render::write_info(&info, out)
        }
        Command::Repo { command: RepoCommand::List { owner } } => {
            let repos = client.list_repositories(owner)?;
            render::write_list(&repos, out)
        }
    }
}
