// Metric feedback -- live syllable readouts for an editing surface
//
// Editors call into this module on text changes, cursor moves and selection
// changes. Each call recomputes from the given text; nothing is cached.
// Offsets are character offsets, matching `verso_core::token::Token`.

use std::borrow::Cow;

use verso_core::character::is_whitespace;
use verso_core::metric::{LineReadout, MetricReadout, TextStats};

use crate::syllables::{count_text, count_words, verse_name};

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Configuration options for metric feedback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricOptions {
    /// When true, bracketed song section markers such as `[Coro]` or
    /// `[ Verso 1 ]` are removed, content included, before counting.
    /// When false, brackets are stripped as punctuation but the words inside
    /// still count.
    pub ignore_section_markers: bool,
}

impl MetricOptions {
    /// Apply the options to a text before it is counted.
    pub fn prepare<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.ignore_section_markers {
            strip_section_markers(text)
        } else {
            Cow::Borrowed(text)
        }
    }
}

// ---------------------------------------------------------------------------
// Readouts
// ---------------------------------------------------------------------------

/// Compute word, syllable and character statistics for a whole text.
///
/// `chars` counts Unicode scalar values, not UTF-16 code units, so it differs
/// from a browser's `String.length` for text outside the BMP such as emoji.
pub fn text_stats(text: &str) -> TextStats {
    TextStats {
        words: count_words(text),
        syllables: count_text(text),
        chars: text.chars().count(),
    }
}

/// Compute the metric readout for a fragment of verse.
///
/// The verse name is `None` when the fragment has no syllables.
pub fn readout(text: &str) -> MetricReadout {
    let syllables = count_text(text);
    let verse_name = (syllables > 0).then(|| verse_name(syllables as i64).into_owned());
    MetricReadout {
        syllables,
        verse_name,
    }
}

/// Return the line of `text` that contains the character offset `cursor`.
///
/// Lines are separated by `'\n'`. A cursor sitting on a line break belongs to
/// the line the break ends. Offsets past the end are clamped to the last
/// line. The returned line is not trimmed.
pub fn line_at(text: &str, cursor: usize) -> &str {
    let byte = text
        .char_indices()
        .nth(cursor)
        .map_or(text.len(), |(b, _)| b);
    let start = text[..byte].rfind('\n').map_or(0, |i| i + 1);
    let end = text[byte..].find('\n').map_or(text.len(), |i| byte + i);
    &text[start..end]
}

/// Compute the metric readout for the line under the cursor.
pub fn line_readout(text: &str, cursor: usize) -> MetricReadout {
    readout(trim(line_at(text, cursor)))
}

/// Compute the metric readout for a selection.
///
/// Returns `None` for a blank selection so the caller can keep showing the
/// previous readout.
pub fn selection_readout(selection: &str) -> Option<MetricReadout> {
    let trimmed = trim(selection);
    if trimmed.is_empty() {
        return None;
    }
    Some(readout(trimmed))
}

/// Compute a readout for every line of a text, blank lines included.
pub fn line_readouts(text: &str) -> Vec<LineReadout> {
    text.split('\n')
        .enumerate()
        .map(|(line, raw)| {
            let trimmed = trim(raw);
            LineReadout {
                line,
                text: trimmed.to_string(),
                readout: readout(trimmed),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Song section markers
// ---------------------------------------------------------------------------

/// Remove bracketed section markers (`[Coro]`, `[ Puente ]`) from lyrics.
///
/// Everything from `[` to the next `]` on the same line is removed. A `[`
/// with no `]` before the line break is kept and scanning resumes after it,
/// so line breaks are never removed. Nested brackets are not supported: the
/// first `]` closes the marker.
pub fn strip_section_markers(text: &str) -> Cow<'_, str> {
    if !text.contains('[') {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('[') {
        let line_end = rest[open..].find('\n').map_or(rest.len(), |i| open + i);
        match rest[open..line_end].find(']') {
            Some(close) => {
                result.push_str(&rest[..open]);
                log::trace!("meter: dropping section marker {:?}", &rest[open..=open + close]);
                rest = &rest[open + close + 1..];
            }
            None => {
                result.push_str(&rest[..=open]);
                rest = &rest[open + 1..];
            }
        }
    }
    result.push_str(rest);
    Cow::Owned(result)
}

fn trim(text: &str) -> &str {
    text.trim_matches(is_whitespace)
}
