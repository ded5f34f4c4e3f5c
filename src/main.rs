// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::{
    io::{self, Write},
    process::ExitCode,
};

use anyhow::Result;
use line_counter::{app, cli, exit::ExitStatus};
use line_counter_shared_kernel::logging;

fn main() -> ExitCode {
    match try_main() {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("{err:#}");
            ExitStatus::for_anyhow(&err).into()
        }
    }
}

fn try_main() -> Result<ExitStatus> {
    let config = cli::load_config()?;
    logging::init(config.verbosity);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let status = app::run(&config, &mut out, &mut io::stderr().lock())?;
    out.flush()?;
    Ok(status)
}
