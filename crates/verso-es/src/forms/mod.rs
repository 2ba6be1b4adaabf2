// Poem forms -- catalog of classical forms and meter checking
//
// Each form describes its stanzas (for an editor's composition guide) and a
// meter rule. Checking a poem counts every non-blank line with the syllable
// engine and compares it against the rule.

mod catalog;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use verso_core::character::{is_whitespace, simple_lower};

use crate::VersoError;
use crate::syllables::count_text;

// ---------------------------------------------------------------------------
// Form descriptions
// ---------------------------------------------------------------------------

/// A stanza of a poem form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stanza {
    /// Display label, e.g. `"1.er Cuarteto"`. May be empty.
    pub label: &'static str,
    /// Number of verses, or 0 when the stanza has no fixed length.
    pub verses: usize,
    /// Short composition hint (rhyme scheme, meter).
    pub hint: &'static str,
}

/// Syllable constraint a form places on its verses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeterRule {
    /// Every verse has exactly this many syllables.
    Fixed(usize),
    /// Verse `i` has `pattern[i % pattern.len()]` syllables.
    Pattern(&'static [usize]),
    /// Every verse has one of these syllable counts.
    OneOf(&'static [usize]),
    /// No metric constraint.
    Free,
}

impl MeterRule {
    /// Syllable counts accepted for the verse at `index`.
    ///
    /// An empty slice means any count is accepted.
    pub fn expected_at(&self, index: usize) -> &[usize] {
        match self {
            MeterRule::Fixed(n) => std::slice::from_ref(n),
            MeterRule::Pattern(pattern) if pattern.is_empty() => &[],
            MeterRule::Pattern(pattern) => std::slice::from_ref(&pattern[index % pattern.len()]),
            MeterRule::OneOf(counts) => *counts,
            MeterRule::Free => &[],
        }
    }

    /// Whether a verse at `index` with `syllables` syllables satisfies the rule.
    pub fn accepts(&self, index: usize, syllables: usize) -> bool {
        let expected = self.expected_at(index);
        expected.is_empty() || expected.contains(&syllables)
    }
}

/// Full description of a poem form.
#[derive(Debug, PartialEq, Eq)]
pub struct FormSpec {
    /// Stable identifier, ASCII lowercase.
    pub id: &'static str,
    pub name: &'static str,
    pub tag: &'static str,
    pub description: &'static str,
    pub stanzas: &'static [Stanza],
    pub meter: MeterRule,
}

impl FormSpec {
    /// Total number of verses the form requires, or `None` when any stanza
    /// has no fixed length.
    pub fn verse_count(&self) -> Option<usize> {
        if self.stanzas.iter().any(|s| s.verses == 0) {
            return None;
        }
        Some(self.stanzas.iter().map(|s| s.verses).sum())
    }

    /// Composition guide lines for an editor.
    ///
    /// Forms without a fixed length get a single `"<name>: <hint>"` line;
    /// other forms get a `"<label> (<n> versos)"` line followed by the hint
    /// for every stanza.
    pub fn guide(&self) -> Vec<String> {
        if self.verse_count().is_none() {
            let hint = self.stanzas.first().map_or("", |s| s.hint);
            return vec![format!("{}: {}", self.name, hint)];
        }
        self.stanzas
            .iter()
            .flat_map(|s| [format!("{} ({} versos)", s.label, s.verses), s.hint.to_string()])
            .collect()
    }
}

// ---------------------------------------------------------------------------
// PoemForm
// ---------------------------------------------------------------------------

/// The classical forms known to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoemForm {
    Soneto,
    Cuarteto,
    Terceto,
    Lira,
    Haiku,
    Silva,
    Decima,
    Oda,
    Libre,
}

impl PoemForm {
    /// Every form, in catalog order.
    pub const ALL: [PoemForm; 9] = [
        PoemForm::Soneto,
        PoemForm::Cuarteto,
        PoemForm::Terceto,
        PoemForm::Lira,
        PoemForm::Haiku,
        PoemForm::Silva,
        PoemForm::Decima,
        PoemForm::Oda,
        PoemForm::Libre,
    ];

    /// The form's catalog entry.
    pub fn spec(self) -> &'static FormSpec {
        match self {
            PoemForm::Soneto => &catalog::SONETO,
            PoemForm::Cuarteto => &catalog::CUARTETO,
            PoemForm::Terceto => &catalog::TERCETO,
            PoemForm::Lira => &catalog::LIRA,
            PoemForm::Haiku => &catalog::HAIKU,
            PoemForm::Silva => &catalog::SILVA,
            PoemForm::Decima => &catalog::DECIMA,
            PoemForm::Oda => &catalog::ODA,
            PoemForm::Libre => &catalog::LIBRE,
        }
    }

    pub fn id(self) -> &'static str {
        self.spec().id
    }
}

impl fmt::Display for PoemForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spec().name)
    }
}

impl FromStr for PoemForm {
    type Err = VersoError;

    /// Parse a form from its id or display name.
    ///
    /// Matching ignores case, accents and surrounding whitespace, so
    /// `"decima"`, `"Décima"` and `"DÉCIMA"` all resolve to the same form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = fold_name(s);
        let form = match key.as_str() {
            "soneto" | "sonnet" => PoemForm::Soneto,
            "cuarteto" => PoemForm::Cuarteto,
            "terceto" => PoemForm::Terceto,
            "lira" => PoemForm::Lira,
            "haiku" => PoemForm::Haiku,
            "silva" => PoemForm::Silva,
            "decima" | "espinela" => PoemForm::Decima,
            "oda" => PoemForm::Oda,
            "libre" | "verso libre" => PoemForm::Libre,
            _ => return Err(VersoError::UnknownForm(s.to_string())),
        };
        Ok(form)
    }
}

/// Lowercase, strip Spanish accents and collapse whitespace.
fn fold_name(name: &str) -> String {
    let folded: String = name
        .chars()
        .map(|c| match simple_lower(c) {
            '\u{00E1}' => 'a',
            '\u{00E9}' => 'e',
            '\u{00ED}' => 'i',
            '\u{00F3}' => 'o',
            '\u{00FA}' | '\u{00FC}' => 'u',
            other => other,
        })
        .collect();
    folded
        .split(is_whitespace)
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// Checking
// ---------------------------------------------------------------------------

/// Result of checking one verse against a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerseCheck {
    /// Zero-based line number in the checked text.
    pub line: usize,
    /// The verse text, trimmed.
    pub text: String,
    pub syllables: usize,
    /// Accepted syllable counts; empty when the form is free.
    pub expected: Vec<usize>,
    pub matches: bool,
}

/// Result of checking a whole poem against a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormReport {
    /// Id of the form checked against.
    pub form: &'static str,
    pub verses: Vec<VerseCheck>,
    /// Verse count the form requires, `None` for open-ended forms.
    pub expected_verses: Option<usize>,
    pub verse_count_matches: bool,
}

impl FormReport {
    /// Whether every verse matches and the verse count is right.
    pub fn is_valid(&self) -> bool {
        self.verse_count_matches && self.verses.iter().all(|v| v.matches)
    }

    /// Number of verses whose syllable count does not fit the form.
    pub fn mismatches(&self) -> usize {
        self.verses.iter().filter(|v| !v.matches).count()
    }
}

/// Check a poem against a form.
///
/// Blank lines separate stanzas and are skipped; every other line is a verse.
/// Verses are numbered in order of appearance when applying the meter rule.
pub fn check_poem(form: PoemForm, text: &str) -> FormReport {
    let spec = form.spec();
    let verses: Vec<VerseCheck> = text
        .split('\n')
        .enumerate()
        .map(|(line, raw)| (line, raw.trim_matches(is_whitespace)))
        .filter(|(_, verse)| !verse.is_empty())
        .enumerate()
        .map(|(index, (line, verse))| {
            let syllables = count_text(verse);
            VerseCheck {
                line,
                text: verse.to_string(),
                syllables,
                expected: spec.meter.expected_at(index).to_vec(),
                matches: spec.meter.accepts(index, syllables),
            }
        })
        .collect();

    let expected_verses = spec.verse_count();
    let verse_count_matches = expected_verses.is_none_or(|n| n == verses.len());

    let report = FormReport {
        form: spec.id,
        verses,
        expected_verses,
        verse_count_matches,
    };
    log::debug!(
        "forms: checked {} verses against {} ({} mismatches, verse count ok: {})",
        report.verses.len(),
        spec.id,
        report.mismatches(),
        report.verse_count_matches
    );
    report
}
