// Metric readouts and text statistics
//
// Plain result types returned by the syllable engine's consumers. They carry
// no behavior beyond formatting; the counting itself lives in the language
// module.

use std::fmt;

use serde::Serialize;

/// Placeholder shown in place of a verse name when nothing was counted.
pub const NO_VERSE_NAME: &str = "\u{2014}";

/// Live statistics for a whole text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStats {
    /// Whitespace-delimited tokens, punctuation-only tokens included.
    pub words: usize,
    /// Total syllables across all words.
    pub syllables: usize,
    /// Characters in the untrimmed text, counted as Unicode scalar values.
    /// Emoji and other non-BMP characters count once here but twice in a
    /// JavaScript `String.length`.
    pub chars: usize,
}

impl fmt::Display for TextStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} palabras · {} síl. · {} car.",
            self.words, self.syllables, self.chars
        )
    }
}

/// Metrical feedback for a single line or selection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricReadout {
    pub syllables: usize,
    /// Traditional verse-length name, or `None` when no syllables were found.
    pub verse_name: Option<String>,
}

impl MetricReadout {
    /// The verse name, or [`NO_VERSE_NAME`] when there is none.
    pub fn label(&self) -> &str {
        self.verse_name.as_deref().unwrap_or(NO_VERSE_NAME)
    }
}

impl fmt::Display for MetricReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} síl. · {}", self.syllables, self.label())
    }
}

/// Readout for one line of a multi-line text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineReadout {
    /// Zero-based line number.
    pub line: usize,
    /// The line's text, trimmed.
    pub text: String,
    #[serde(flatten)]
    pub readout: MetricReadout,
}
