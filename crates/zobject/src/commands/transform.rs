//! Fixture transforms: load, rewrite, print or write back.

use super::{FixtureArgs, load_config};
use anyhow::Context as _;
use zobject_fixtures::{Context, Operation};

/// Run one fixture operation.
pub fn run(op: Operation, args: FixtureArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let format = match args.format {
        Some(format) => format.into(),
        None => config.format_for(&args.file),
    };
    let ctx = Context {
        scope: args.scope.into(),
        element_types: config.element_types(),
    };
    let output = args.output.resolve(&config);
    tracing::debug!(%op, %format, ?output, scope = ?ctx.scope, "resolved options");

    zobject_fixtures::run(&args.file, format, op, &ctx, output)
        .with_context(|| format!("{op} failed for {}", args.file.display()))?;
    Ok(())
}
