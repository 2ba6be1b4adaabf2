// Character classification and Unicode utilities for Spanish text

use unicode_normalization::UnicodeNormalization;

// ---------------------------------------------------------------------------
// Spanish phonological constants
// ---------------------------------------------------------------------------

/// Spanish vowels (lowercase): a e i o u á é í ó ú ü
const SPANISH_VOWELS: &[char] = &[
    'a', 'e', 'i', 'o', 'u', '\u{00E1}', '\u{00E9}', '\u{00ED}', '\u{00F3}', '\u{00FA}',
    '\u{00FC}',
];

/// Spanish vowels (uppercase): A E I O U Á É Í Ó Ú Ü
const SPANISH_VOWELS_UPPER: &[char] = &[
    'A', 'E', 'I', 'O', 'U', '\u{00C1}', '\u{00C9}', '\u{00CD}', '\u{00D3}', '\u{00DA}',
    '\u{00DC}',
];

/// Letters outside ASCII that belong to the Spanish alphabet (both cases):
/// á é í ó ú ü ñ Á É Í Ó Ú Ü Ñ
const SPANISH_EXTRA_LETTERS: &[char] = &[
    '\u{00E1}', '\u{00E9}', '\u{00ED}', '\u{00F3}', '\u{00FA}', '\u{00FC}', '\u{00F1}',
    '\u{00C1}', '\u{00C9}', '\u{00CD}', '\u{00D3}', '\u{00DA}', '\u{00DC}', '\u{00D1}',
];

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Check whether a character is a Spanish vowel, in either case.
///
/// Only precomposed forms are recognized: a combining accent (U+0301) on its
/// own is not a vowel. Callers that accept decomposed input must normalize
/// first (see [`normalize_word`]).
pub fn is_vowel(c: char) -> bool {
    SPANISH_VOWELS.contains(&c) || SPANISH_VOWELS_UPPER.contains(&c)
}

/// Check whether a character belongs to the Spanish alphabet: basic Latin
/// letters, ñ, and the accented/diaeresis vowels, in either case.
pub fn is_spanish_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || SPANISH_EXTRA_LETTERS.contains(&c)
}

/// Check whether a character is whitespace for the purpose of splitting
/// editor text into words.
///
/// This is the set browsers use for `\s` and `String.prototype.trim`:
/// ASCII controls U+0009..U+000D, space, no-break space, the Unicode space
/// separators, line/paragraph separators and the byte-order mark. Unlike
/// `char::is_whitespace`, U+0085 (NEXT LINE) is not included.
pub fn is_whitespace(c: char) -> bool {
    let cp = c as u32;
    (0x09..=0x0D).contains(&cp)
        || cp == 0x20
        || cp == 0xA0
        || cp == 0x1680
        || (0x2000..=0x200A).contains(&cp)
        || cp == 0x2028
        || cp == 0x2029
        || cp == 0x202F
        || cp == 0x205F
        || cp == 0x3000
        || cp == 0xFEFF
}

// ---------------------------------------------------------------------------
// Case folding and normalization
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
///
/// For characters with multi-character lowercase expansions, returns only the
/// first character.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Lowercase a word and recompose it into canonical composed form (NFC).
///
/// Lowercasing happens first, then composition, so `"E\u{0301}"` becomes
/// `['é']`. The result is a character vector ready for left-to-right scanning.
pub fn normalize_word(word: &str) -> Vec<char> {
    word.to_lowercase().nfc().collect()
}
