//! Trailing-newline cleanup, for files another tool rewrote.

use super::{OutputArgs, load_config};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct TrimArgs {
    /// File to clean up
    pub file: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Config file (default: global config merged with .zobject/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: TrimArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    zobject_fixtures::trim_trailing_newlines(&args.file, args.output.resolve(&config))?;
    Ok(())
}
