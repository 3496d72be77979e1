//! CLI command implementations - one module per command family.

use anyhow::Context as _;
use clap::{Args, ValueEnum};
use std::path::{Path, PathBuf};
use zobject_fixtures::{Format, Output, Scope, ZObjectConfig};

pub mod element_types;
pub mod transform;
pub mod trim;

/// Arguments shared by every fixture-rewriting command.
#[derive(Args, Debug)]
pub struct FixtureArgs {
    /// Fixture file to rewrite
    pub file: PathBuf,

    /// File format (defaults to the file extension, then config)
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Which part of the document to transform
    #[arg(short, long, value_enum, default_value = "auto")]
    pub scope: ScopeArg,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Config file (default: global config merged with .zobject/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Dry-run vs. write selection.
#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Overwrite the file instead of printing the result
    #[arg(short, long)]
    pub write: bool,

    /// Print the result even if config enables writing
    #[arg(long, conflicts_with = "write")]
    pub dry_run: bool,
}

impl OutputArgs {
    pub fn resolve(&self, config: &ZObjectConfig) -> Output {
        if self.dry_run {
            Output::DryRun
        } else {
            Output::from_write_flag(self.write || config.write())
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    /// YAML
    Yaml,
    /// JSON, four-space indented
    Json,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Yaml => Format::Yaml,
            FormatArg::Json => Format::Json,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ScopeArg {
    /// Test objects if the file has test_objects, else the whole document
    Auto,
    /// Only the `object` of each success/failure entry
    Objects,
    /// The whole document
    Document,
}

impl From<ScopeArg> for Scope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::Auto => Scope::Auto,
            ScopeArg::Objects => Scope::Objects,
            ScopeArg::Document => Scope::Document,
        }
    }
}

/// Explicit config file if given, otherwise global + project config.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<ZObjectConfig> {
    match explicit {
        Some(path) => Ok(ZObjectConfig::load_file(path)?),
        None => {
            let root = std::env::current_dir().context("cannot determine working directory")?;
            Ok(ZObjectConfig::load(&root))
        }
    }
}
