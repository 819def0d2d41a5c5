//! Suggestion generator.
//!
//! A stateless rule set. Five common rules run on every text, then the
//! rules of the selected [`ContentType`]. Each rule is an independent
//! predicate that yields at most one [`Suggestion`]; the output keeps rule
//! order, not severity order.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::content_type::ContentType;
use crate::keywords::contains_any;
use crate::text::{self, Tokens};
use crate::word_lists::{
    FILLER_WORDS, GENERIC_CTA_PHRASES, PASSIVE_INDICATORS, PERSONAL_PRONOUN, VAGUE_WORDS,
    WEAK_WORDS,
};

/// Sentences with more words than this are too long.
pub const MAX_SENTENCE_WORDS: usize = 25;

/// How many offending words a message quotes.
const MAX_QUOTED: usize = 3;

/// Suggestion severity.
///
/// Ordered from least to most urgent so `severity >= Severity::Warning`
/// reads naturally.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Severity {
    /// Optional tip.
    Info,
    /// Should fix.
    Warning,
    /// Must fix.
    Error,
}

impl Severity {
    /// Returns the severity as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One improvement hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Suggestion {
    /// Short label.
    pub tag: String,
    /// Human-readable advice.
    pub message: String,
    /// How urgent the fix is.
    pub severity: Severity,
}

impl Suggestion {
    /// Build a suggestion.
    pub fn new(severity: Severity, tag: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            message: message.into(),
            severity,
        }
    }

    /// An [`Severity::Error`] suggestion.
    pub fn error(tag: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, tag, message)
    }

    /// A [`Severity::Warning`] suggestion.
    pub fn warning(tag: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, tag, message)
    }

    /// An [`Severity::Info`] suggestion.
    pub fn info(tag: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, tag, message)
    }
}

/// Everything a rule may look at, computed once per call.
pub struct RuleInput<'a> {
    /// Text as typed.
    pub text: &'a str,
    /// Lowercased text for phrase lookups.
    pub lower: String,
    /// Tokenized text.
    pub tokens: Tokens,
    /// Length of `text` in UTF-16 code units.
    pub len: usize,
}

impl<'a> RuleInput<'a> {
    /// Prepare rule input for a text.
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            lower: text.to_lowercase(),
            tokens: text::tokenize(text),
            len: text::utf16_len(text),
        }
    }

    fn words_matching(&self, needles: &[&str]) -> Vec<&str> {
        self.tokens
            .words
            .iter()
            .filter(|w| contains_any(w, needles))
            .map(String::as_str)
            .collect()
    }
}

/// A single suggestion rule.
pub type Rule = fn(&RuleInput<'_>) -> Option<Suggestion>;

/// Rules applied to every content type, in evaluation order.
pub const COMMON_RULES: &[Rule] = &[
    long_sentences,
    weak_language,
    passive_voice,
    vague_words,
    filler_words,
];

const EMAIL_RULES: &[Rule] = &[missing_personalization, missing_question];
const CTA_RULES: &[Rule] = &[short_cta, generic_cta];
const LANDING_PAGE_RULES: &[Rule] = &[missing_figures, thin_landing_page];
const SOCIAL_AD_RULES: &[Rule] = &[long_social_ad, missing_hashtags];

/// Rules specific to a content type, in evaluation order.
pub const fn content_rules(content_type: ContentType) -> &'static [Rule] {
    match content_type {
        ContentType::Email => EMAIL_RULES,
        ContentType::Cta => CTA_RULES,
        ContentType::LandingPage => LANDING_PAGE_RULES,
        ContentType::SocialAd => SOCIAL_AD_RULES,
    }
}

/// Generate suggestions for a text.
///
/// Blank text yields no suggestions. Otherwise every common rule runs, then
/// every rule of `content_type`.
#[tracing::instrument(skip_all, fields(text_len = text.len(), content_type = %content_type))]
pub fn suggest(text: &str, content_type: ContentType) -> Vec<Suggestion> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let input = RuleInput::new(text);
    let suggestions: Vec<Suggestion> = COMMON_RULES
        .iter()
        .chain(content_rules(content_type))
        .filter_map(|rule| rule(&input))
        .collect();

    tracing::debug!(count = suggestions.len(), "suggestions generated");
    suggestions
}

// -- Common rules ------------------------------------------------------------

fn long_sentences(input: &RuleInput<'_>) -> Option<Suggestion> {
    let count = input
        .tokens
        .sentences
        .iter()
        .filter(|s| s.split_whitespace().count() > MAX_SENTENCE_WORDS)
        .count();
    (count > 0).then(|| {
        Suggestion::warning(
            "Phrases trop longues",
            format!("{count} phrase(s) dépassent {MAX_SENTENCE_WORDS} mots. Divisez-les."),
        )
    })
}

fn weak_language(input: &RuleInput<'_>) -> Option<Suggestion> {
    let found = input.words_matching(WEAK_WORDS);
    (!found.is_empty()).then(|| {
        Suggestion::warning(
            "Langage faible",
            format!("Évitez: {}. Soyez plus affirmatif.", quote(&found)),
        )
    })
}

fn passive_voice(input: &RuleInput<'_>) -> Option<Suggestion> {
    contains_any(&input.lower, PASSIVE_INDICATORS).then(|| {
        Suggestion::error(
            "Trop passif",
            "Utilisez la voix active pour plus d'impact.",
        )
    })
}

fn vague_words(input: &RuleInput<'_>) -> Option<Suggestion> {
    (input.words_matching(VAGUE_WORDS).len() > 1).then(|| {
        Suggestion::warning(
            "Trop vague",
            "Soyez plus spécifique dans vos formulations.",
        )
    })
}

fn filler_words(input: &RuleInput<'_>) -> Option<Suggestion> {
    let found = input.words_matching(FILLER_WORDS);
    (found.len() > 2).then(|| {
        Suggestion::info(
            "Mots inutiles",
            format!("Supprimez les mots de remplissage: {}.", quote(&found)),
        )
    })
}

fn quote(words: &[&str]) -> String {
    words
        .iter()
        .take(MAX_QUOTED)
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
}

// -- CTA -----------------------------------------------------------------------

fn short_cta(input: &RuleInput<'_>) -> Option<Suggestion> {
    (input.len < 10).then(|| {
        Suggestion::info(
            "CTA trop court",
            "Ajoutez une valeur ou un bénéfice à votre CTA.",
        )
    })
}

fn generic_cta(input: &RuleInput<'_>) -> Option<Suggestion> {
    contains_any(&input.lower, GENERIC_CTA_PHRASES).then(|| {
        Suggestion::error(
            "CTA générique",
            "Votre CTA manque de spécificité. Soyez plus précis.",
        )
    })
}

// -- Email ---------------------------------------------------------------------

fn missing_personalization(input: &RuleInput<'_>) -> Option<Suggestion> {
    (!input.lower.contains(PERSONAL_PRONOUN)).then(|| {
        Suggestion::warning(
            "Manque de personnalisation",
            "Utilisez 'vous' pour créer une connexion personnelle.",
        )
    })
}

fn missing_question(input: &RuleInput<'_>) -> Option<Suggestion> {
    (!input.text.contains('?') && input.len > 50).then(|| {
        Suggestion::info(
            "Manque d'engagement",
            "Posez des questions pour engager votre lecteur.",
        )
    })
}

// -- Social ad -----------------------------------------------------------------

fn long_social_ad(input: &RuleInput<'_>) -> Option<Suggestion> {
    (input.len > 125).then(|| {
        Suggestion::warning(
            "Trop long",
            "Les publications courtes performent mieux sur les réseaux.",
        )
    })
}

fn missing_hashtags(input: &RuleInput<'_>) -> Option<Suggestion> {
    (!input.text.contains('#') && input.len > 20).then(|| {
        Suggestion::info(
            "Missing hashtags",
            "Ajoutez des hashtags pour améliorer la visibilité.",
        )
    })
}

// -- Landing page --------------------------------------------------------------

fn missing_figures(input: &RuleInput<'_>) -> Option<Suggestion> {
    (!input.text.chars().any(|c| c.is_ascii_digit())).then(|| {
        Suggestion::info(
            "Manque de preuves",
            "Ajoutez des chiffres pour renforcer votre crédibilité.",
        )
    })
}

fn thin_landing_page(input: &RuleInput<'_>) -> Option<Suggestion> {
    (input.len < 100).then(|| {
        Suggestion::warning(
            "Contenu insuffisant",
            "Une landing page nécessite plus de contenu.",
        )
    })
}
