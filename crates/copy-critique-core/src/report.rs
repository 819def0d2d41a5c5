//! Full critique of a piece of copy.
//!
//! Orchestrates the tokenizer, metric calculator, ratings and suggestion
//! generator into one serializable [`CritiqueReport`]. Callers can also
//! invoke each stage individually.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::content_type::ContentType;
use crate::insights::{self, MetricRatings};
use crate::keywords::KeywordTables;
use crate::metrics::{self, AnalysisResult};
use crate::stats::{self, TextStats};
use crate::suggestions::{self, Severity, Suggestion};

/// Everything the critique panel shows for one version of the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CritiqueReport {
    /// Content type the rules were selected for.
    pub content_type: ContentType,
    /// Word and character counts.
    pub stats: TextStats,
    /// Readability and tone metrics.
    pub analysis: AnalysisResult,
    /// Traffic-light ratings of the metrics.
    pub ratings: MetricRatings,
    /// Rule-based suggestions, in rule order.
    pub suggestions: Vec<Suggestion>,
    /// Metric-based tips for the content type.
    pub tips: Vec<Suggestion>,
}

impl CritiqueReport {
    /// Highest severity among suggestions and tips, if any.
    pub fn max_severity(&self) -> Option<Severity> {
        self.suggestions
            .iter()
            .chain(&self.tips)
            .map(|s| s.severity)
            .max()
    }

    /// Returns `true` if nothing needs improving.
    pub fn is_clean(&self) -> bool {
        self.suggestions.is_empty() && self.tips.is_empty()
    }
}

/// Critique a text.
///
/// Never fails: blank text produces zeroed metrics and no suggestions.
#[tracing::instrument(skip(text, tables), fields(text_len = text.len()))]
pub fn critique(text: &str, content_type: ContentType, tables: &KeywordTables) -> CritiqueReport {
    let analysis = metrics::analyze_with(text, tables);
    let tips = if text.trim().is_empty() {
        Vec::new()
    } else {
        insights::content_tips(&analysis, content_type)
    };

    CritiqueReport {
        content_type,
        stats: stats::text_stats(text),
        analysis,
        ratings: insights::rate(&analysis),
        suggestions: suggestions::suggest(text, content_type),
        tips,
    }
}
