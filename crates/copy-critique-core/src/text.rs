//! Tokenizer.
//!
//! Splits raw copy into lowercase words and sentences. Splitting is purely
//! whitespace/punctuation based: no abbreviation or decimal handling, so
//! `"3.5"` is two sentences. That keeps results predictable while the user
//! is still typing.
//!
//! Word splitting cuts on whitespace runs without trimming first, so text
//! with leading or trailing whitespace gets an empty edge word. Those empty
//! words count toward the average sentence length and never match a keyword.
//! Lengths are UTF-16 code units: an emoji counts as two.

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Runs of whitespace between words.
static WORD_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Runs of sentence-ending punctuation.
static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Words and sentences extracted from a text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Tokens {
    /// Lowercase words in reading order. Punctuation stays attached; the
    /// first and last word are empty when the text starts or ends with
    /// whitespace.
    pub words: Vec<String>,
    /// Trimmed sentences in reading order, without their terminators.
    pub sentences: Vec<String>,
}

impl Tokens {
    /// Returns `true` if the text had no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Tokenize text into words and sentences.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn tokenize(text: &str) -> Tokens {
    Tokens {
        words: split_words(text),
        sentences: split_sentences(text),
    }
}

/// Lowercase the text and split it on whitespace runs.
///
/// Blank text has no words.
pub fn split_words(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    WORD_BREAK
        .split(&text.to_lowercase())
        .map(str::to_string)
        .collect()
}

/// Split text on runs of `.`, `!` and `?`, dropping blank pieces.
pub fn split_sentences(text: &str) -> Vec<String> {
    SENTENCE_BREAK
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Length of a text in UTF-16 code units, the unit editors report.
pub fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}
