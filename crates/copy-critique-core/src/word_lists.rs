//! Fixed word lists used by the suggestion rules.
//!
//! Unlike the [`crate::keywords`] tables these are not configurable: each
//! list belongs to exactly one rule and its message.

/// Hedging words that make copy sound unsure.
pub const WEAK_WORDS: &[&str] = &["peut-être", "probablement", "essayer", "penser", "croire"];

/// Phrases hinting at a passive construction, matched against the whole text.
pub const PASSIVE_INDICATORS: &[&str] = &["est fait", "a été", "sera fait", "être"];

/// Words that say little.
pub const VAGUE_WORDS: &[&str] = &["chose", "truc", "beaucoup", "plusieurs", "certains"];

/// Intensifiers and padding.
///
/// `"quelque peu"` spans two words and never matches a single token; it is
/// kept so the list reads the way copywriters expect.
pub const FILLER_WORDS: &[&str] = &["vraiment", "très", "assez", "plutôt", "quelque peu"];

/// Call-to-action labels too generic to convert.
pub const GENERIC_CTA_PHRASES: &[&str] = &["cliquez ici", "en savoir plus", "voir plus"];

/// Second-person pronoun expected in personalised emails.
pub const PERSONAL_PRONOUN: &str = "vous";
