//! Metric ratings and content-type tips.
//!
//! Turns a raw [`AnalysisResult`] into traffic-light ratings, and adds the
//! tips that depend on metrics rather than on the text itself.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::content_type::ContentType;
use crate::metrics::{AnalysisResult, Tone};
use crate::suggestions::Suggestion;

/// Average sentence length at or below which copy reads easily.
pub const SENTENCE_LENGTH_GOOD: usize = 15;
/// Average sentence length at or above which copy is hard to read.
pub const SENTENCE_LENGTH_POOR: usize = 25;
/// Complex word count at or below which copy is accessible.
pub const COMPLEX_WORDS_GOOD: usize = 2;
/// Complex word count at or above which copy is jargon-heavy.
pub const COMPLEX_WORDS_POOR: usize = 8;
/// Minimum action verbs for persuasive copy.
pub const ACTION_VERBS_GOOD: usize = 2;

/// Traffic-light rating of a single metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    /// Within the target range.
    Good,
    /// Between the targets.
    Fair,
    /// Outside the target range.
    Poor,
}

impl Rating {
    /// Rate a metric where lower is better.
    pub const fn lower_is_better(value: usize, good: usize, poor: usize) -> Self {
        if value <= good {
            Self::Good
        } else if value >= poor {
            Self::Poor
        } else {
            Self::Fair
        }
    }

    /// Returns the rating as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ratings for the metrics that have a target range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MetricRatings {
    /// Average sentence length: ideal 10-15 words.
    pub sentence_length: Rating,
    /// Complex words: fewer is better.
    pub complex_words: Rating,
    /// Action verbs: more is better.
    pub action_verbs: Rating,
}

/// Rate the metrics of an analysis.
pub const fn rate(result: &AnalysisResult) -> MetricRatings {
    MetricRatings {
        sentence_length: Rating::lower_is_better(
            result.avg_sentence_length,
            SENTENCE_LENGTH_GOOD,
            SENTENCE_LENGTH_POOR,
        ),
        complex_words: Rating::lower_is_better(
            result.complex_words,
            COMPLEX_WORDS_GOOD,
            COMPLEX_WORDS_POOR,
        ),
        action_verbs: if result.action_verbs >= ACTION_VERBS_GOOD {
            Rating::Good
        } else {
            Rating::Poor
        },
    }
}

/// Tips derived from the metrics for a given content type.
///
/// Only meaningful for non-blank text; callers skip it otherwise.
pub fn content_tips(result: &AnalysisResult, content_type: ContentType) -> Vec<Suggestion> {
    let mut tips = Vec::new();
    match content_type {
        ContentType::Cta if result.action_verbs == 0 => tips.push(Suggestion::info(
            "Verbes d'action",
            "Ajoutez des verbes d'action pour un CTA plus efficace.",
        )),
        ContentType::Email if result.tone == Tone::Formal => tips.push(Suggestion::info(
            "Ton trop formel",
            "Un ton plus personnel pourrait améliorer l'engagement.",
        )),
        _ => {}
    }
    tips
}
