//! Schema command: JSON Schema of the critique report.

use clap::Args;
use tracing::{debug, instrument};

use copy_critique_core::CritiqueReport;

/// Arguments for the `schema` subcommand.
#[derive(Args, Debug, Default)]
pub struct SchemaArgs {}

/// Print the JSON Schema for `critique --json` output.
///
/// Always JSON, so the global `--json` flag changes nothing.
#[instrument(name = "cmd_schema", skip_all)]
pub fn cmd_schema(_args: SchemaArgs) -> anyhow::Result<()> {
    debug!("executing schema command");
    let schema = schemars::schema_for!(CritiqueReport);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
