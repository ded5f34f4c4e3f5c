// crates/repo-info/src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::{
    io::{self, Write},
    process::ExitCode,
};

use anyhow::Result;
use clap::Parser;
use line_counter_shared_kernel::logging;
use repo_info::{ClientConfig, RepoInfoClient, ReqwestTransport, app, cli::Cli};

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    // 既存の環境変数が .env より優先される
    dotenvy::dotenv().ok();
    logging::init(cli.verbose);

    let client = RepoInfoClient::new(ClientConfig::from_env(), ReqwestTransport::new()?);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    app::run(&cli.command, &client, &mut out)?;
    out.flush()?;
    Ok(())
}
