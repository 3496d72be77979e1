//! Show the effective fixed element-type table.

use super::load_config;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ElementTypesArgs {
    /// Config file (default: global config merged with .zobject/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Print the table in the same form the `[element_types]` config uses.
pub fn run(args: ElementTypesArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    for (field, tag) in config.element_types().iter() {
        println!("{field} = \"{tag}\"");
    }
    Ok(())
}
