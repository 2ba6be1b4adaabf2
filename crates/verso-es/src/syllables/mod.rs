// Syllable engine -- Spanish syllable counting and verse-length names
//
// The engine works in three steps:
// 1. Text is split into whitespace-delimited words and each word is cleaned
//    down to Spanish letters
// 2. Each word is lowercased and recomposed into NFC, then scanned for vowel
//    nuclei; adjacent vowels listed as diphthongs share one nucleus
// 3. Syllable totals are mapped onto traditional verse-length names
//
// Every function here is total. Empty, blank, symbol-only and non-Spanish
// input produce a well-defined count instead of an error.

use std::borrow::Cow;

use verso_core::character::{is_vowel, normalize_word};

use crate::spanish::constants::{VERSE_NAMES, is_diphthong};
use crate::tokenizer::{clean_token, split_words};

/// Count the syllables of a single word.
///
/// The word is lowercased and normalized to composed form, then scanned one
/// character at a time. Each vowel opens a nucleus; when the vowel and the
/// next character form a listed diphthong the pair is consumed as one
/// nucleus. Vowel pairs not in the table (hiatus) count twice. Consonants and
/// any other characters are skipped.
///
/// Returns 0 for an empty word and at least 1 for any non-empty word, so
/// vowelless abbreviations such as `"pst"` still count as one syllable.
///
/// Punctuation is not stripped here; see [`count_text`] for the cleaning
/// policy applied to running text.
pub fn count_word(word: &str) -> usize {
    if word.is_empty() {
        return 0;
    }

    let chars = normalize_word(word);
    let mut count = 0;
    let mut i = 0;
    while i < chars.len() {
        if is_vowel(chars[i]) {
            count += 1;
            if i + 1 < chars.len() && is_diphthong(chars[i], chars[i + 1]) {
                i += 1;
            }
        }
        i += 1;
    }

    count.max(1)
}

/// Count the syllables of free text.
///
/// The text is split on whitespace runs. Each word is cleaned down to
/// Spanish letters before counting, so punctuation, digits and brackets are
/// ignored while letters inside brackets still count: `"[Coro]"` counts as
/// `"Coro"`. Words that clean down to nothing contribute 0.
///
/// Markup is not stripped; callers extract plain text first.
pub fn count_text(text: &str) -> usize {
    split_words(text)
        .map(clean_token)
        .filter(|w| !w.is_empty())
        .map(|w| count_word(&w))
        .sum()
}

/// Count the whitespace-delimited words of free text.
///
/// Punctuation-only tokens count as words; this is a token count, not a
/// linguistic word count.
pub fn count_words(text: &str) -> usize {
    split_words(text).count()
}

/// Name the verse length for a syllable count.
///
/// Counts from 1 to 14 map to their traditional Spanish names
/// (`11` -> `"Endecasílabo"`, `14` -> `"Alejandrino"`). Any other value,
/// zero and negatives included, falls back to `"<n> sílabas"`.
pub fn verse_name(n: i64) -> Cow<'static, str> {
    match usize::try_from(n) {
        Ok(k @ 1..=14) => Cow::Borrowed(VERSE_NAMES[k - 1]),
        _ => Cow::Owned(format!("{n} sílabas")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- count_word --

    #[test]
    fn count_word_empty() {
        assert_eq!(count_word(""), 0);
    }

    #[test]
    fn count_word_basic() {
        assert_eq!(count_word("hola"), 2);
        assert_eq!(count_word("teatro"), 3);
        assert_eq!(count_word("ley"), 1);
    }

    #[test]
    fn count_word_diphthongs() {
        assert_eq!(count_word("aire"), 2);
        assert_eq!(count_word("ciudad"), 2);
        assert_eq!(count_word("canci\u{00F3}n"), 2); // ió
        assert_eq!(count_word("ping\u{00FC}ino"), 3); // üi
        assert_eq!(count_word("buey"), 1);
    }

    #[test]
    fn count_word_hiatus() {
        assert_eq!(count_word("pa\u{00ED}s"), 2); // aí
        assert_eq!(count_word("ba\u{00FA}l"), 2); // aú
        assert_eq!(count_word("o\u{00ED}do"), 3); // oí
        assert_eq!(count_word("a\u{00E9}reo"), 4);
    }

    #[test]
    fn count_word_poesia() {
        assert_eq!(count_word("poes\u{00ED}a"), 3);
    }

    #[test]
    fn count_word_decomposed_accents() {
        assert_eq!(count_word("poesi\u{0301}a"), 3);
        assert_eq!(count_word("pingu\u{0308}ino"), 3);
    }

    #[test]
    fn count_word_case_insensitive() {
        assert_eq!(count_word("HOLA"), count_word("hola"));
        assert_eq!(count_word("CANCI\u{00D3}N"), 2);
        assert_eq!(count_word("PA\u{00CD}S"), 2);
    }

    #[test]
    fn count_word_without_vowels_floors_to_one() {
        assert_eq!(count_word("xyz"), 1);
        assert_eq!(count_word("pst"), 1);
        assert_eq!(count_word("!"), 1);
    }

    #[test]
    fn count_word_triphthong_is_not_special() {
        // a-ve-ri-guá-is: "uá" is a diphthong, the trailing "i" stands alone.
        assert_eq!(count_word("averigu\u{00E1}is"), 5);
        assert_eq!(count_word("Uruguay"), 3);
    }

    // -- count_text --

    #[test]
    fn count_text_empty_and_blank() {
        assert_eq!(count_text(""), 0);
        assert_eq!(count_text("   "), 0);
        assert_eq!(count_text("\n\t"), 0);
    }

    #[test]
    fn count_text_sums_words() {
        let line = "Verso de once s\u{00ED}labas aqu\u{00ED}";
        let expected: usize = ["Verso", "de", "once", "s\u{00ED}labas", "aqu\u{00ED}"]
            .iter()
            .map(|w| count_word(w))
            .sum();
        assert_eq!(count_text(line), expected);
        assert_eq!(count_text(line), 11);
    }

    #[test]
    fn count_text_brackets_and_punctuation() {
        assert_eq!(count_text("[Coro]"), 2);
        assert_eq!(count_text("\u{00A1}Hola, mundo!"), 4);
    }

    #[test]
    fn count_text_punctuation_only_tokens_contribute_zero() {
        assert_eq!(count_text("... --- !!"), 0);
        assert_eq!(count_text("hola -- 2024"), 2);
    }

    #[test]
    fn count_text_is_deterministic() {
        let text = "En tanto que de rosa y azucena";
        assert_eq!(count_text(text), count_text(text));
    }

    // -- count_words --

    #[test]
    fn count_words_basic() {
        assert_eq!(count_words("uno dos tres"), 3);
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   "), 0);
    }

    #[test]
    fn count_words_counts_punctuation_tokens() {
        assert_eq!(count_words("hola , mundo"), 3);
        assert_eq!(count_words("  uno\n\ndos  "), 2);
    }

    // -- verse_name --

    #[test]
    fn verse_name_table() {
        assert_eq!(verse_name(1), "Monos\u{00ED}labo");
        assert_eq!(verse_name(8), "Octos\u{00ED}labo");
        assert_eq!(verse_name(11), "Endecas\u{00ED}labo");
        assert_eq!(verse_name(14), "Alejandrino");
    }

    #[test]
    fn verse_name_fallback() {
        assert_eq!(verse_name(0), "0 s\u{00ED}labas");
        assert_eq!(verse_name(15), "15 s\u{00ED}labas");
        assert_eq!(verse_name(20), "20 s\u{00ED}labas");
        assert_eq!(verse_name(-3), "-3 s\u{00ED}labas");
        assert_eq!(verse_name(i64::MIN), format!("{} s\u{00ED}labas", i64::MIN));
    }
}
