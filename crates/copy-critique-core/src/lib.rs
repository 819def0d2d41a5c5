//! Core library for copy-critique.
//!
//! Heuristic analysis of marketing copy: a tokenizer, a keyword-driven
//! metric calculator and a content-type-aware suggestion generator. All
//! analysis functions are pure and total over any string input.
//!
//! # Modules
//!
//! - [`text`] - Word and sentence tokenizer
//! - [`metrics`] - Readability and tone metrics
//! - [`suggestions`] - Rule-based improvement suggestions
//! - [`keywords`] - Keyword tables behind the metrics
//! - [`report`] - All of the above in one serializable report
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use copy_critique_core::{ContentType, Severity, analyze, suggest};
//!
//! let result = analyze("Découvrez notre offre. Profitez-en vite!");
//! assert_eq!(result.action_verbs, 2);
//!
//! let suggestions = suggest("Cliquez ici", ContentType::Cta);
//! assert!(suggestions.iter().any(|s| s.severity == Severity::Error));
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod content_type;
pub mod error;
pub mod insights;
pub mod keywords;
pub mod metrics;
pub mod report;
pub mod stats;
pub mod suggestions;
pub mod text;
pub mod word_lists;

pub use config::{Config, ConfigLoader, DEFAULT_MAX_INPUT_BYTES, LogLevel};
pub use content_type::ContentType;
pub use error::{ConfigError, ConfigResult, ParseContentTypeError};
pub use insights::{MetricRatings, Rating, content_tips, rate};
pub use keywords::{KeywordCategory, KeywordTables};
pub use metrics::{AnalysisResult, Tone, analyze, analyze_with};
pub use report::{CritiqueReport, critique};
pub use stats::{TextStats, text_stats};
pub use suggestions::{Severity, Suggestion, suggest};
pub use text::{Tokens, tokenize};
