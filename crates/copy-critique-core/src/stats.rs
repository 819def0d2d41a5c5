//! Live text counters.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text;

/// Word and character counts shown next to the editor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TextStats {
    /// Whitespace-separated words.
    pub words: usize,
    /// UTF-16 code units, whitespace included.
    pub characters: usize,
}

/// Count words and characters in a text.
pub fn text_stats(text: &str) -> TextStats {
    TextStats {
        words: text.split_whitespace().count(),
        characters: text::utf16_len(text),
    }
}
