// Tokenizer module -- whitespace splitting and letter-only cleaning
//
// Word boundaries are runs of whitespace only. Punctuation stays attached to
// its token; the syllable engine strips it per token with `clean_token`,
// while word counting keeps punctuation-only tokens as words.

use verso_core::character::{is_spanish_letter, is_whitespace};
use verso_core::token::Token;

/// Iterate over the whitespace-delimited words of `text`.
///
/// Leading/trailing whitespace and runs of whitespace never yield empty
/// words. This is the allocation-free path used on every keystroke.
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_whitespace).filter(|w| !w.is_empty())
}

/// Tokenize text into whitespace-delimited tokens with character offsets.
pub fn tokens(text: &str) -> Vec<Token> {
    let mut result = Vec::new();
    let mut start: Option<usize> = None;
    let mut current = String::new();

    for (pos, c) in text.chars().enumerate() {
        if is_whitespace(c) {
            if let Some(s) = start.take() {
                result.push(Token::new(std::mem::take(&mut current), s));
            }
        } else {
            if start.is_none() {
                start = Some(pos);
            }
            current.push(c);
        }
    }
    if let Some(s) = start {
        result.push(Token::new(current, s));
    }

    result
}

/// Strip every character that is not a Spanish letter from a token.
///
/// Brackets, punctuation, digits and symbols are removed character by
/// character; letters inside brackets survive (`"[Coro]"` -> `"Coro"`).
/// No normalization happens here, so a decomposed combining accent is
/// removed along with the other non-letters.
pub fn clean_token(token: &str) -> String {
    token.chars().filter(|&c| is_spanish_letter(c)).collect()
}
