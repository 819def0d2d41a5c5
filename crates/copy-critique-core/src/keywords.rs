//! Keyword tables driving the metric calculator.
//!
//! Six named lists of lowercase substrings. The built-in French tables are
//! embedded as JSON and parsed once on first use; a configuration file can
//! replace any subset of categories (see [`crate::config::Config::keywords`]).
//!
//! Matching is substring containment against a single lowercase word, so
//! `"découvrez"` also matches `"découvrez-le"`.

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Raw JSON for the built-in tables.
const BUILTIN_JSON: &str = include_str!("../data/keywords.json");

static BUILTIN: LazyLock<KeywordTables> = LazyLock::new(|| {
    let raw: BuiltinTables =
        serde_json::from_str(BUILTIN_JSON).expect("built-in keyword tables are valid JSON");
    KeywordTables {
        action_verbs: normalize(raw.action_verbs),
        emotional_words: normalize(raw.emotional_words),
        rational_words: normalize(raw.rational_words),
        complex_words: normalize(raw.complex_words),
        formal_indicators: normalize(raw.formal_indicators),
        informal_indicators: normalize(raw.informal_indicators),
    }
});

/// One of the six keyword categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// Imperative verbs that push the reader to act.
    ActionVerbs,
    /// Words appealing to feelings.
    EmotionalWords,
    /// Words appealing to facts, figures and proof.
    RationalWords,
    /// Jargon that hurts readability.
    ComplexWords,
    /// Markers of a formal register.
    FormalIndicators,
    /// Markers of a casual register.
    InformalIndicators,
}

impl KeywordCategory {
    /// Every category, in table order.
    pub const ALL: [Self; 6] = [
        Self::ActionVerbs,
        Self::EmotionalWords,
        Self::RationalWords,
        Self::ComplexWords,
        Self::FormalIndicators,
        Self::InformalIndicators,
    ];

    /// The snake_case key used in JSON and config files.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ActionVerbs => "action_verbs",
            Self::EmotionalWords => "emotional_words",
            Self::RationalWords => "rational_words",
            Self::ComplexWords => "complex_words",
            Self::FormalIndicators => "formal_indicators",
            Self::InformalIndicators => "informal_indicators",
        }
    }
}

impl fmt::Display for KeywordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable keyword lists, one per [`KeywordCategory`].
///
/// Entries are trimmed, lowercased and deduplicated (first occurrence wins);
/// empty entries are dropped so a blank substring never matches every word.
/// When deserialized, missing categories fall back to the built-in lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "KeywordOverrides")]
pub struct KeywordTables {
    action_verbs: Vec<String>,
    emotional_words: Vec<String>,
    rational_words: Vec<String>,
    complex_words: Vec<String>,
    formal_indicators: Vec<String>,
    informal_indicators: Vec<String>,
}

impl KeywordTables {
    /// The built-in French tables, shared for the whole process.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Replace one category with a new list of substrings.
    pub fn with_category<I, S>(mut self, category: KeywordCategory, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        *self.slot_mut(category) = normalize(entries.into_iter().map(Into::into).collect());
        self
    }

    /// Substrings configured for a category.
    pub fn category(&self, category: KeywordCategory) -> &[String] {
        match category {
            KeywordCategory::ActionVerbs => &self.action_verbs,
            KeywordCategory::EmotionalWords => &self.emotional_words,
            KeywordCategory::RationalWords => &self.rational_words,
            KeywordCategory::ComplexWords => &self.complex_words,
            KeywordCategory::FormalIndicators => &self.formal_indicators,
            KeywordCategory::InformalIndicators => &self.informal_indicators,
        }
    }

    /// Whether `word` contains any substring of `category`.
    pub fn matches(&self, category: KeywordCategory, word: &str) -> bool {
        contains_any(word, self.category(category))
    }

    /// Number of words matching `category`. Each word counts at most once.
    pub fn count_matches(&self, category: KeywordCategory, words: &[String]) -> usize {
        words.iter().filter(|w| self.matches(category, w)).count()
    }

    fn slot_mut(&mut self, category: KeywordCategory) -> &mut Vec<String> {
        match category {
            KeywordCategory::ActionVerbs => &mut self.action_verbs,
            KeywordCategory::EmotionalWords => &mut self.emotional_words,
            KeywordCategory::RationalWords => &mut self.rational_words,
            KeywordCategory::ComplexWords => &mut self.complex_words,
            KeywordCategory::FormalIndicators => &mut self.formal_indicators,
            KeywordCategory::InformalIndicators => &mut self.informal_indicators,
        }
    }
}

impl Default for KeywordTables {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

/// Whether `word` contains any of `needles`.
pub(crate) fn contains_any<S: AsRef<str>>(word: &str, needles: &[S]) -> bool {
    needles.iter().any(|n| word.contains(n.as_ref()))
}

fn normalize(entries: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .map(|e| e.trim().to_lowercase())
        .filter(|e| !e.is_empty())
        .filter(|e| seen.insert(e.clone()))
        .collect()
}

/// Shape of the embedded JSON: every category is required.
#[derive(Deserialize)]
struct BuiltinTables {
    action_verbs: Vec<String>,
    emotional_words: Vec<String>,
    rational_words: Vec<String>,
    complex_words: Vec<String>,
    formal_indicators: Vec<String>,
    informal_indicators: Vec<String>,
}

/// Shape accepted from configuration: every category is optional.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct KeywordOverrides {
    action_verbs: Option<Vec<String>>,
    emotional_words: Option<Vec<String>>,
    rational_words: Option<Vec<String>>,
    complex_words: Option<Vec<String>>,
    formal_indicators: Option<Vec<String>>,
    informal_indicators: Option<Vec<String>>,
}

impl From<KeywordOverrides> for KeywordTables {
    fn from(o: KeywordOverrides) -> Self {
        let mut tables = Self::default();
        let pairs = [
            (KeywordCategory::ActionVerbs, o.action_verbs),
            (KeywordCategory::EmotionalWords, o.emotional_words),
            (KeywordCategory::RationalWords, o.rational_words),
            (KeywordCategory::ComplexWords, o.complex_words),
            (KeywordCategory::FormalIndicators, o.formal_indicators),
            (KeywordCategory::InformalIndicators, o.informal_indicators),
        ];
        for (category, entries) in pairs {
            if let Some(entries) = entries {
                *tables.slot_mut(category) = normalize(entries);
            }
        }
        tables
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn builtin_tables_are_populated() {
        let tables = KeywordTables::builtin();
        for category in KeywordCategory::ALL {
            assert!(
                !tables.category(category).is_empty(),
                "{category} should not be empty"
            );
        }
    }

    #[test]
    fn builtin_entries_are_lowercase_and_non_empty() {
        let tables = KeywordTables::builtin();
        for category in KeywordCategory::ALL {
            for entry in tables.category(category) {
                assert!(!entry.is_empty());
                assert_eq!(entry, &entry.to_lowercase(), "{category}: {entry}");
            }
        }
    }

    #[test]
    fn matching_is_substring_containment() {
        let tables = KeywordTables::builtin();
        assert!(tables.matches(KeywordCategory::ActionVerbs, "découvrez-le"));
        assert!(tables.matches(KeywordCategory::RationalWords, "30%"));
        assert!(!tables.matches(KeywordCategory::ActionVerbs, "maison"));
    }

    #[test]
    fn count_matches_counts_each_word_once() {
        let tables = KeywordTables::builtin()
            .clone()
            .with_category(KeywordCategory::ComplexWords, ["syn", "ergie"]);
        // "synergie" matches both substrings but is one word
        let list = words(&["synergie", "simple"]);
        assert_eq!(tables.count_matches(KeywordCategory::ComplexWords, &list), 1);
    }

    #[test]
    fn with_category_normalizes_entries() {
        let tables = KeywordTables::default().with_category(
            KeywordCategory::FormalIndicators,
            ["  Madame ", "", "madame", "   "],
        );
        assert_eq!(
            tables.category(KeywordCategory::FormalIndicators),
            &["madame".to_string()]
        );
    }

    #[test]
    fn partial_overrides_keep_builtin_categories() {
        let json = r#"{ "action_verbs": ["Signez"] }"#;
        let tables: KeywordTables = serde_json::from_str(json).unwrap();
        assert_eq!(
            tables.category(KeywordCategory::ActionVerbs),
            &["signez".to_string()]
        );
        assert_eq!(
            tables.category(KeywordCategory::EmotionalWords),
            KeywordTables::builtin().category(KeywordCategory::EmotionalWords)
        );
    }

    #[test]
    fn unknown_category_is_rejected() {
        let json = r#"{ "slogans": ["x"] }"#;
        assert!(serde_json::from_str::<KeywordTables>(json).is_err());
    }
}
