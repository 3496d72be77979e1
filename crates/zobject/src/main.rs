use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use zobject_fixtures::Operation;

mod commands;

use commands::FixtureArgs;
use commands::element_types::ElementTypesArgs;
use commands::trim::TrimArgs;

/// Rewrite ZObject test fixtures between encodings.
///
/// Every command prints the rewritten file unless --write is given.
#[derive(Parser)]
#[command(name = "zobject", version)]
struct Cli {
    /// More log output on stderr (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Reduce test objects to canonical form
    Canonicalize(FixtureArgs),
    /// Flatten Z10 cons-lists into arrays
    #[command(name = "replace-z10s")]
    ReplaceZ10s(FixtureArgs),
    /// Rewrite every list, cons-list or array, as a Z881 typed list
    #[command(name = "typed-lists")]
    TypedLists(FixtureArgs),
    /// Prefix every array with its element type
    Benjamin(FixtureArgs),
    /// Append the stock Z9 and Z18 success cases
    #[command(name = "add-tests")]
    AddTests(FixtureArgs),
    /// Constrain a schema's Z1K1 to the type named by its file
    #[command(name = "canonicalize-z1k1")]
    CanonicalizeZ1K1(FixtureArgs),
    /// Strip trailing newlines from a file
    #[command(name = "trim-newline")]
    TrimNewline(TrimArgs),
    /// Show the fixed element types used by typed-lists
    #[command(name = "element-types")]
    ElementTypes(ElementTypesArgs),
}

/// Reset SIGPIPE to default behavior so piping to `head` etc. doesn't panic.
#[cfg(unix)]
fn reset_sigpipe() {
    // SAFETY: libc::signal is a standard POSIX function; this only restores
    // the default disposition for SIGPIPE.
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    reset_sigpipe();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Command::Canonicalize(args) => commands::transform::run(Operation::Canonicalize, args),
        Command::ReplaceZ10s(args) => commands::transform::run(Operation::ReplaceZ10s, args),
        Command::TypedLists(args) => commands::transform::run(Operation::TypedLists, args),
        Command::Benjamin(args) => commands::transform::run(Operation::Benjamin, args),
        Command::AddTests(args) => commands::transform::run(Operation::AddTests, args),
        Command::CanonicalizeZ1K1(args) => {
            commands::transform::run(Operation::CanonicalizeZ1K1, args)
        }
        Command::TrimNewline(args) => commands::trim::run(args),
        Command::ElementTypes(args) => commands::element_types::run(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
