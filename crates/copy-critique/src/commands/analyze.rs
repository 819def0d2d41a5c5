//! Analyze command: readability and tone metrics with their ratings.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use copy_critique_core::{AnalysisResult, KeywordTables, MetricRatings, Rating, analyze_with, rate};

use super::InputArgs;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Serialize)]
struct AnalyzeOutput {
    #[serde(flatten)]
    analysis: AnalysisResult,
    ratings: MetricRatings,
}

/// Compute and print metrics for the input.
#[instrument(name = "cmd_analyze", skip_all, fields(source))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    tables: &KeywordTables,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let source = args.input.source();
    tracing::Span::current().record("source", source.as_str());
    debug!(%source, "executing analyze command");

    let content = args.input.read(max_input_bytes)?;
    let analysis = analyze_with(&content, tables);
    let ratings = rate(&analysis);

    if global_json {
        let output = AnalyzeOutput { analysis, ratings };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_metrics(&analysis, &ratings);
    }

    Ok(())
}

/// Print the metric panel, shared with `critique`.
pub fn print_metrics(analysis: &AnalysisResult, ratings: &MetricRatings) {
    println!("{}", "Métriques".bold().underline());
    println!(
        "  {:<26} {:>3}  {}",
        "Longueur moyenne des phrases",
        analysis.avg_sentence_length,
        rating_label(ratings.sentence_length)
    );
    println!(
        "  {:<26} {:>3}  {}",
        "Mots complexes",
        analysis.complex_words,
        rating_label(ratings.complex_words)
    );
    println!(
        "  {:<26} {:>3}  {}",
        "Verbes d'action",
        analysis.action_verbs,
        rating_label(ratings.action_verbs)
    );
    println!("  {:<26} {}", "Ton", analysis.tone.label());
    println!(
        "  {:<26} {}% émotionnel / {}% rationnel",
        "Équilibre",
        analysis.emotional_ratio,
        analysis.rational_ratio
    );
}

fn rating_label(rating: Rating) -> String {
    match rating {
        Rating::Good => rating.as_str().green().to_string(),
        Rating::Fair => rating.as_str().yellow().to_string(),
        Rating::Poor => rating.as_str().red().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_text_succeeds() {
        let args = AnalyzeArgs {
            input: InputArgs {
                file: None,
                text: Some("Découvrez notre offre. Profitez-en vite!".to_string()),
            },
        };
        assert!(cmd_analyze(args, false, KeywordTables::builtin(), None).is_ok());
    }

    #[test]
    fn output_flattens_metrics() {
        let analysis = copy_critique_core::analyze("Découvrez notre offre.");
        let output = AnalyzeOutput {
            analysis,
            ratings: rate(&analysis),
        };
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["action_verbs"], 1);
        assert_eq!(json["ratings"]["action_verbs"], "poor");
    }
}
