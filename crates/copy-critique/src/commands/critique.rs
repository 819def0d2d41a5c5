//! Critique command: metrics, ratings, suggestions and tips in one report.

use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use copy_critique_core::{ContentType, CritiqueReport, KeywordTables, Severity, critique};

use super::{InputArgs, check_fail_on, print_suggestions};
use crate::commands::analyze::print_metrics;

/// Arguments for the `critique` subcommand.
#[derive(Args, Debug, Default)]
pub struct CritiqueArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Content type the rules are selected for [default: config or email].
    #[arg(long, value_enum)]
    pub content_type: Option<ContentType>,

    /// Exit non-zero when a suggestion or tip reaches this severity.
    #[arg(long, value_enum)]
    pub fail_on: Option<Severity>,
}

/// Run every analysis stage over the input and print the report.
#[instrument(name = "cmd_critique", skip_all, fields(source))]
pub fn cmd_critique(
    args: CritiqueArgs,
    global_json: bool,
    config_content_type: Option<ContentType>,
    tables: &KeywordTables,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let source = args.input.source();
    tracing::Span::current().record("source", source.as_str());
    let content_type = args.content_type.or(config_content_type).unwrap_or_default();
    debug!(%source, %content_type, fail_on = ?args.fail_on, "executing critique command");

    let content = args.input.read(max_input_bytes)?;
    let report = critique(&content, content_type, tables);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&source, &report);
    }

    check_fail_on(&source, report.max_severity(), args.fail_on)
}

fn print_report(source: &str, report: &CritiqueReport) {
    println!(
        "{} ({})",
        source.bold(),
        report.content_type.label().cyan()
    );
    println!(
        "{}: {}  {}: {}",
        "Mots".dimmed(),
        report.stats.words,
        "Caractères".dimmed(),
        report.stats.characters
    );
    println!();
    print_metrics(&report.analysis, &report.ratings);

    println!();
    if report.is_clean() {
        println!("{} no suggestions", "PASS:".green());
        return;
    }
    if !report.suggestions.is_empty() {
        println!("{}", "Suggestions".bold().underline());
        print_suggestions(&report.suggestions);
    }
    if !report.tips.is_empty() {
        println!("{}", "Conseils".bold().underline());
        print_suggestions(&report.tips);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(text: &str) -> CritiqueArgs {
        CritiqueArgs {
            input: InputArgs {
                file: None,
                text: Some(text.to_string()),
            },
            ..Default::default()
        }
    }

    #[test]
    fn clean_text_passes() {
        let result = cmd_critique(args("  "), false, None, KeywordTables::builtin(), None);
        assert!(result.is_ok());
    }

    #[test]
    fn fail_on_error_rejects_generic_cta() {
        let mut args = args("Cliquez ici maintenant.");
        args.content_type = Some(ContentType::Cta);
        args.fail_on = Some(Severity::Error);
        let err = cmd_critique(args, true, None, KeywordTables::builtin(), None).unwrap_err();
        assert!(err.to_string().contains("error-level"));
    }

    #[test]
    fn config_content_type_applies_without_flag() {
        let mut args = args("Cliquez ici maintenant.");
        args.fail_on = Some(Severity::Error);
        let result = cmd_critique(
            args,
            true,
            Some(ContentType::Cta),
            KeywordTables::builtin(),
            None,
        );
        assert!(result.is_err());
    }
}
