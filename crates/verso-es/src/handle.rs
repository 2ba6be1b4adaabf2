// VersoHandle: top-level integration point for Spanish verse analysis.
//
// Bundles the syllable engine, metric feedback and form checking behind one
// API that applies a shared set of options. The handle holds nothing but
// options, so it is cheap to create, `Send + Sync`, and every method is a
// fresh computation.

use std::borrow::Cow;

use verso_core::metric::{LineReadout, MetricReadout, TextStats};

use crate::forms::{self, FormReport, PoemForm};
use crate::meter::{self, MetricOptions};
use crate::syllables;

/// Entry point for editors and tools that want counting with options applied.
#[derive(Debug, Clone, Default)]
pub struct VersoHandle {
    options: MetricOptions,
}

impl VersoHandle {
    /// Create a handle with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handle with the given options.
    pub fn with_options(options: MetricOptions) -> Self {
        Self { options }
    }

    /// The options currently applied.
    pub fn options(&self) -> MetricOptions {
        self.options
    }

    // =========================================================================
    // Core counting
    // =========================================================================

    /// Count the syllables of a single word. Options do not apply to words.
    pub fn count_word(&self, word: &str) -> usize {
        syllables::count_word(word)
    }

    /// Count the syllables of free text.
    pub fn count_text(&self, text: &str) -> usize {
        syllables::count_text(&self.prepare(text))
    }

    /// Count the whitespace-delimited words of free text.
    pub fn count_words(&self, text: &str) -> usize {
        syllables::count_words(&self.prepare(text))
    }

    /// Name the verse length for a syllable count.
    pub fn verse_name(&self, syllables: i64) -> Cow<'static, str> {
        syllables::verse_name(syllables)
    }

    // =========================================================================
    // Metric feedback
    // =========================================================================

    /// Word, syllable and character statistics for a whole text.
    ///
    /// The character count always covers the raw text, section markers
    /// included.
    pub fn text_stats(&self, text: &str) -> TextStats {
        let prepared = self.prepare(text);
        TextStats {
            words: syllables::count_words(&prepared),
            syllables: syllables::count_text(&prepared),
            chars: text.chars().count(),
        }
    }

    /// Readout for the line containing the character offset `cursor`.
    pub fn line_readout(&self, text: &str, cursor: usize) -> MetricReadout {
        let line = meter::line_at(text, cursor);
        meter::readout(&self.prepare(line))
    }

    /// Readout for a selection, or `None` when the selection is blank.
    pub fn selection_readout(&self, selection: &str) -> Option<MetricReadout> {
        meter::selection_readout(&self.prepare(selection))
    }

    /// Readouts for every line of a text.
    pub fn line_readouts(&self, text: &str) -> Vec<LineReadout> {
        meter::line_readouts(&self.prepare(text))
    }

    // =========================================================================
    // Forms
    // =========================================================================

    /// Check a poem against a form.
    pub fn check_poem(&self, form: PoemForm, text: &str) -> FormReport {
        forms::check_poem(form, &self.prepare(text))
    }

    /// Every form in the catalog.
    pub fn forms(&self) -> &'static [PoemForm] {
        &PoemForm::ALL
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Set whether bracketed song section markers are dropped before counting.
    pub fn set_ignore_section_markers(&mut self, value: bool) {
        log::debug!("handle: ignore_section_markers = {value}");
        self.options.ignore_section_markers = value;
    }

    fn prepare<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.options.prepare(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SONG: &str = "[Coro]\nla luna llena\n[Verso 1]\nsobre el agua del mar";

    #[test]
    fn handle_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<VersoHandle>();
    }

    #[test]
    fn default_options_count_marker_words() {
        let handle = VersoHandle::new();
        assert!(!handle.options().ignore_section_markers);
        // "Coro" and "Verso" add 2 each; "1]" cleans down to nothing
        assert_eq!(handle.count_text(SONG), 4 + 5 + 7);
        assert_eq!(handle.count_words(SONG), 11);
    }

    #[test]
    fn ignoring_markers() {
        let mut handle = VersoHandle::new();
        handle.set_ignore_section_markers(true);
        assert_eq!(handle.count_text(SONG), 12);
        assert_eq!(handle.count_words(SONG), 8);

        let stats = handle.text_stats(SONG);
        assert_eq!(stats.words, 8);
        assert_eq!(stats.syllables, 12);
        assert_eq!(stats.chars, SONG.chars().count());
    }

    #[test]
    fn line_readout_on_marker_line() {
        let handle = VersoHandle::with_options(MetricOptions {
            ignore_section_markers: true,
        });
        let marker = handle.line_readout(SONG, 2);
        assert_eq!(marker.syllables, 0);
        assert_eq!(marker.verse_name, None);

        let verse = handle.line_readout(SONG, 10);
        assert_eq!(verse.syllables, 5);
        assert_eq!(verse.verse_name.as_deref(), Some("Pentas\u{00ED}labo"));
    }

    #[test]
    fn selection_of_only_a_marker_is_blank_when_ignored() {
        let mut handle = VersoHandle::new();
        assert_eq!(handle.selection_readout("[Coro]").unwrap().syllables, 2);
        handle.set_ignore_section_markers(true);
        assert_eq!(handle.selection_readout("[Coro]"), None);
    }

    #[test]
    fn check_song_against_form() {
        let handle = VersoHandle::with_options(MetricOptions {
            ignore_section_markers: true,
        });
        let poem = "[Intro]\nla luna llena\nsobre el agua del mar\ncanta la rana";
        let report = handle.check_poem(PoemForm::Haiku, poem);
        assert!(report.is_valid(), "{report:?}");
    }

    #[test]
    fn verse_name_and_forms() {
        let handle = VersoHandle::new();
        assert_eq!(handle.verse_name(8), "Octos\u{00ED}labo");
        assert_eq!(handle.forms().len(), 9);
        assert_eq!(handle.count_word("aire"), 2);
    }

    #[test]
    fn line_readouts_with_markers() {
        let handle = VersoHandle::with_options(MetricOptions {
            ignore_section_markers: true,
        });
        let lines = handle.line_readouts(SONG);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].readout.syllables, 0);
        assert_eq!(lines[3].readout.syllables, 7);
    }

    #[test]
    fn unclosed_marker_keeps_following_lines() {
        let handle = VersoHandle::with_options(MetricOptions {
            ignore_section_markers: true,
        });
        let text = "[nota\nla luna llena\nsobre el mar]\ncanta la rana";
        let lines = handle.line_readouts(text);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].text, "[nota");
        assert_eq!(lines[2].readout.syllables, 4);
        assert_eq!(handle.check_poem(PoemForm::Libre, text).verses.len(), 4);
    }
}
