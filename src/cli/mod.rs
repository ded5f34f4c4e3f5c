mod args;
mod value_enum;

pub use args::Args;
use clap::{Parser, error::ErrorKind};
use line_counter_domain::config::{DecodePolicy, Extension, ExtensionAllowList, ScanOptions};
use line_counter_shared_kernel::{LineCounterError, PresentationError, Result};
pub use value_enum::CliOutputFormat;

use crate::config::{Config, Mode};

fn conflict() -> PresentationError {
    PresentationError::ArgumentConflict { first: "file".to_string(), second: "directory".to_string() }
}

/// Maps clap's conflict error onto the workspace error taxonomy.
pub fn conflict_error(err: &clap::Error) -> Option<PresentationError> {
    (err.kind() == ErrorKind::ArgumentConflict).then(conflict)
}

/// Parse CLI arguments and materialise a [`Config`].
///
/// Help, version and usage errors other than the `-f`/`-d` conflict are
/// printed by clap, which then exits the process.
///
/// # Errors
///
/// Returns `Err` when both `--file` and `--directory` are given or when the
/// configuration cannot be built.
pub fn load_config() -> Result<Config> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => match conflict_error(&err) {
            Some(conflict) => return Err(conflict.into()),
            None => err.exit(),
        },
    };
    build_config(args)
}

/// Convert parsed CLI arguments into a configuration.
///
/// # Errors
///
/// Returns `Err` when both a file and a directory are requested or the
/// extension list is unusable.
pub fn build_config(args: Args) -> Result<Config> {
    let mode = match (args.file, args.directory) {
        (Some(_), Some(_)) => return Err(conflict().into()),
        (Some(file), None) => Mode::File(file),
        (None, Some(dir)) => Mode::Directory(dir),
        (None, None) => Mode::Guidance,
    };

    let extensions = if args.ext.is_empty() {
        ExtensionAllowList::default()
    } else {
        ExtensionAllowList::new(args.ext.iter().map(Extension::as_str))?
    };
    let decode_policy = if args.strict { DecodePolicy::Abort } else { DecodePolicy::Skip };

    Ok(Config {
        mode,
        scan: ScanOptions::default()
            .with_extensions(extensions)
            .with_decode_policy(decode_policy)
            .with_follow_links(args.follow_links),
        format: args.format.into(),
        verbosity: args.verbose,
    })
}

impl TryFrom<Args> for Config {
    type Error = LineCounterError;

    fn try_from(args: Args) -> Result<Self> {
        build_config(args)
    }
}
