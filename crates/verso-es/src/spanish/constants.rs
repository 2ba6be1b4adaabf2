// Spanish phonological and metrical tables.
//
// Both tables are closed, hand-curated lists. Verse counts downstream depend
// on their exact contents, so entries must not be added or derived by rule.

/// Adjacent vowel pairs that form a single syllable nucleus (diphthongs).
///
/// Lowercase only; callers lowercase before lookup. Any vowel pair not listed
/// here is a hiatus and counts as two nuclei. Triphthongs are not listed:
/// "uai" scans as the diphthong "ua" followed by a separate "i".
pub(crate) const DIPHTHONGS: &[[char; 2]] = &[
    ['a', 'i'],
    ['a', 'u'],
    ['e', 'i'],
    ['e', 'u'],
    ['o', 'i'],
    ['o', 'u'],
    ['i', 'a'],
    ['i', 'e'],
    ['i', 'o'],
    ['i', 'u'],
    ['u', 'a'],
    ['u', 'e'],
    ['u', 'i'],
    ['u', 'o'],
    ['\u{00E1}', 'i'], // ái
    ['\u{00E1}', 'u'], // áu
    ['\u{00E9}', 'i'], // éi
    ['\u{00E9}', 'u'], // éu
    ['\u{00F3}', 'i'], // ói
    ['\u{00ED}', 'u'], // íu
    ['\u{00FA}', 'i'], // úi
    ['\u{00ED}', 'a'], // ía (po-e-sía)
    ['i', '\u{00E1}'], // iá
    ['i', '\u{00E9}'], // ié
    ['i', '\u{00F3}'], // ió
    ['i', '\u{00FA}'], // iú
    ['u', '\u{00E1}'], // uá
    ['u', '\u{00E9}'], // ué
    ['u', '\u{00F3}'], // uó
    ['\u{00FC}', 'e'], // üe
    ['\u{00FC}', 'i'], // üi
];

/// Traditional names for verses of 1 to 14 syllables, indexed by count - 1.
pub(crate) const VERSE_NAMES: [&str; 14] = [
    "Monosílabo",
    "Bisílabo",
    "Trisílabo",
    "Tetrasílabo",
    "Pentasílabo",
    "Hexasílabo",
    "Heptasílabo",
    "Octosílabo",
    "Eneasílabo",
    "Decasílabo",
    "Endecasílabo",
    "Dodecasílabo",
    "Tridecasílabo",
    "Alejandrino",
];

/// Check whether two adjacent lowercase characters form a listed diphthong.
pub(crate) fn is_diphthong(first: char, second: char) -> bool {
    DIPHTHONGS.contains(&[first, second])
}
