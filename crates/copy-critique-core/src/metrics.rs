//! Metric calculator.
//!
//! Derives readability and tone metrics from the token stream using the
//! [`KeywordTables`]. Every call recomputes everything; there is no
//! incremental state.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::keywords::{KeywordCategory, KeywordTables};
use crate::text::{self, Tokens};

/// Words longer than this many characters count as complex.
pub const LONG_WORD_CHARS: usize = 12;

/// Coarse register of the copy.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// More formal than informal indicators.
    Formal,
    /// More informal than formal indicators.
    Informal,
    /// Tied indicator counts, including none at all.
    #[default]
    Neutral,
}

impl Tone {
    /// Classify from indicator tallies.
    pub const fn from_counts(formal: usize, informal: usize) -> Self {
        if formal > informal {
            Self::Formal
        } else if informal > formal {
            Self::Informal
        } else {
            Self::Neutral
        }
    }

    /// Returns the tone as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Formal => "formal",
            Self::Informal => "informal",
            Self::Neutral => "neutral",
        }
    }

    /// French label shown to copywriters.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Formal => "formel",
            Self::Informal => "informel",
            Self::Neutral => "neutre",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metrics computed for one version of the text.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub struct AnalysisResult {
    /// Words per sentence, rounded half up. 0 without sentences.
    pub avg_sentence_length: usize,
    /// Words containing a complex substring or longer than 12 characters.
    pub complex_words: usize,
    /// Words containing an action-verb substring.
    pub action_verbs: usize,
    /// Register inferred from formal/informal indicators.
    pub tone: Tone,
    /// Share of emotional words among emotional + rational matches (0-100).
    pub emotional_ratio: u8,
    /// Share of rational words among emotional + rational matches (0-100).
    pub rational_ratio: u8,
}

/// Analyze text with the built-in keyword tables.
pub fn analyze(text: &str) -> AnalysisResult {
    analyze_with(text, KeywordTables::builtin())
}

/// Analyze text with custom keyword tables.
///
/// Blank input returns [`AnalysisResult::default`] without scanning.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn analyze_with(text: &str, tables: &KeywordTables) -> AnalysisResult {
    if text.trim().is_empty() {
        return AnalysisResult::default();
    }
    analyze_tokens(&text::tokenize(text), tables)
}

/// Compute metrics from already tokenized text.
pub fn analyze_tokens(tokens: &Tokens, tables: &KeywordTables) -> AnalysisResult {
    let words = &tokens.words;
    if words.is_empty() {
        return AnalysisResult::default();
    }

    let avg_sentence_length = rounded_div(words.len(), tokens.sentences.len());

    let complex_words = words
        .iter()
        .filter(|w| {
            tables.matches(KeywordCategory::ComplexWords, w)
                || text::utf16_len(w) > LONG_WORD_CHARS
        })
        .count();

    let action_verbs = tables.count_matches(KeywordCategory::ActionVerbs, words);

    let tone = Tone::from_counts(
        tables.count_matches(KeywordCategory::FormalIndicators, words),
        tables.count_matches(KeywordCategory::InformalIndicators, words),
    );

    let emotional = tables.count_matches(KeywordCategory::EmotionalWords, words);
    let rational = tables.count_matches(KeywordCategory::RationalWords, words);
    let relevant = emotional + rational;

    let result = AnalysisResult {
        avg_sentence_length,
        complex_words,
        action_verbs,
        tone,
        emotional_ratio: percent(emotional, relevant),
        rational_ratio: percent(rational, relevant),
    };
    tracing::debug!(?result, words = words.len(), "metrics computed");
    result
}

/// `round(n / d)` with halves rounded up; 0 when `d` is 0.
const fn rounded_div(n: usize, d: usize) -> usize {
    if d == 0 { 0 } else { (2 * n + d) / (2 * d) }
}

/// Rounded percentage of `part` in `total`; 0 when `total` is 0.
fn percent(part: usize, total: usize) -> u8 {
    // part <= total keeps this within 0..=100
    u8::try_from(rounded_div(part * 100, total)).unwrap_or(100)
}
