//! Tokenize command.

use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use copy_critique_core::tokenize;

use super::InputArgs;

/// Arguments for the `tokenize` subcommand.
#[derive(Args, Debug, Default)]
pub struct TokenizeArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Print the words and sentences the analyzers see.
#[instrument(name = "cmd_tokenize", skip_all)]
pub fn cmd_tokenize(
    args: TokenizeArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(source = %args.input.source(), "executing tokenize command");

    let content = args.input.read(max_input_bytes)?;
    let tokens = tokenize(&content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&tokens)?);
        return Ok(());
    }

    println!("{} ({})", "Mots".bold().underline(), tokens.words.len());
    println!("  {}", tokens.words.join(" | "));
    println!();
    println!("{} ({})", "Phrases".bold().underline(), tokens.sentences.len());
    for (i, sentence) in tokens.sentences.iter().enumerate() {
        println!("  {:>3}. {}", i + 1, sentence);
    }

    Ok(())
}
