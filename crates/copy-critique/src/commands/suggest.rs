//! Suggest command: rule-based improvement suggestions.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use copy_critique_core::{ContentType, Severity, Suggestion, suggest};

use super::{InputArgs, check_fail_on, print_suggestions};

/// Arguments for the `suggest` subcommand.
#[derive(Args, Debug, Default)]
pub struct SuggestArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Content type the rules are selected for [default: config or email].
    #[arg(long, value_enum)]
    pub content_type: Option<ContentType>,

    /// Exit non-zero when a suggestion reaches this severity.
    #[arg(long, value_enum)]
    pub fail_on: Option<Severity>,
}

#[derive(Serialize)]
struct SuggestOutput<'a> {
    content_type: ContentType,
    suggestions: &'a [Suggestion],
}

/// Print suggestions for the input.
#[instrument(name = "cmd_suggest", skip_all, fields(source))]
pub fn cmd_suggest(
    args: SuggestArgs,
    global_json: bool,
    config_content_type: Option<ContentType>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let source = args.input.source();
    tracing::Span::current().record("source", source.as_str());
    let content_type = args.content_type.or(config_content_type).unwrap_or_default();
    debug!(%source, %content_type, fail_on = ?args.fail_on, "executing suggest command");

    let content = args.input.read(max_input_bytes)?;
    let suggestions = suggest(&content, content_type);

    if global_json {
        let output = SuggestOutput {
            content_type,
            suggestions: &suggestions,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if suggestions.is_empty() {
        println!(
            "{} {} has no suggestions ({})",
            "PASS:".green(),
            source,
            content_type
        );
    } else {
        println!(
            "{} suggestion(s) for {} ({}):",
            suggestions.len(),
            source.bold(),
            content_type.label().cyan()
        );
        print_suggestions(&suggestions);
    }

    let max = suggestions.iter().map(|s| s.severity).max();
    check_fail_on(&source, max, args.fail_on)
}
