//! Golden tests: check the engine against hand-verified counts.
//!
//! The expected values live in `tests/data/syllables.json` so the table can
//! be reviewed by people who scan verse, not just by people who read Rust.
//!
//! Run: cargo test -p verso-es --test golden

use std::path::PathBuf;

use serde_json::Value;
use verso_es::forms::PoemForm;
use verso_es::handle::VersoHandle;
use verso_es::{count_text, count_word, count_words, verse_name};

// ---------------------------------------------------------------------------
// Helper: load golden data
// ---------------------------------------------------------------------------

fn load_golden(filename: &str) -> Value {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(filename);
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse golden file {}: {}", path.display(), e))
}

fn as_count(value: &Value) -> usize {
    value.as_u64().expect("count must be a non-negative integer") as usize
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

#[test]
fn golden_word_counts() {
    let golden = load_golden("syllables.json");
    let words = golden["words"].as_object().expect("words object");
    assert!(!words.is_empty());

    let mut mismatches = Vec::new();
    for (word, expected) in words {
        let expected = as_count(expected);
        let actual = count_word(word);
        if actual != expected {
            mismatches.push(format!("{word:?}: expected {expected}, got {actual}"));
        }
    }
    assert!(mismatches.is_empty(), "word mismatches:\n{}", mismatches.join("\n"));
}

#[test]
fn golden_text_counts() {
    let golden = load_golden("syllables.json");
    let texts = golden["texts"].as_array().expect("texts array");

    for case in texts {
        let text = case["text"].as_str().expect("text string");
        assert_eq!(count_text(text), as_count(&case["syllables"]), "syllables of {text:?}");
        assert_eq!(count_words(text), as_count(&case["words"]), "words of {text:?}");
    }
}

#[test]
fn golden_verse_names() {
    let golden = load_golden("syllables.json");
    let names = golden["verseNames"].as_object().expect("verseNames object");

    for (n, expected) in names {
        let n: i64 = n.parse().expect("verse name key must be an integer");
        assert_eq!(verse_name(n), expected.as_str().expect("name string"), "verse_name({n})");
    }
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn nonempty_words_have_at_least_one_syllable() {
    let samples = [
        "a", "b", "\u{00F1}", "Z", "mmm", "\u{00BF}", "r\u{00ED}o", "\u{00FC}", "1", "\u{0301}",
    ];
    for word in samples {
        assert!(count_word(word) >= 1, "{word:?}");
    }
}

#[test]
fn counting_is_case_insensitive() {
    for word in ["hola", "canci\u{00F3}n", "ping\u{00FC}ino", "averigu\u{00E1}is"] {
        assert_eq!(count_word(&word.to_uppercase()), count_word(word), "{word}");
    }
}

#[test]
fn text_count_equals_sum_of_cleaned_words() {
    let text = "\u{00BF}D\u{00F3}nde est\u{00E1}s, coraz\u{00F3}n? [Coro] 1, 2, 3...";
    let by_hand = ["D\u{00F3}nde", "est\u{00E1}s", "coraz\u{00F3}n", "Coro"]
        .iter()
        .map(|w| count_word(w))
        .sum::<usize>();
    assert_eq!(count_text(text), by_hand);
}

#[test]
fn functions_are_total_on_odd_input() {
    let odd = [
        "\u{0000}",
        "\u{FEFF}",
        "\u{1F3B5}\u{1F3B6}",
        "\u{0301}\u{0301}\u{0301}",
        "\u{3000}\u{3000}",
        "\u{0130}stanbul",
        "\u{05E9}\u{05DC}\u{05D5}\u{05DD}",
    ];
    for text in odd {
        let _ = count_word(text);
        let _ = count_text(text);
        let _ = count_words(text);
    }
    let _ = verse_name(i64::MAX);
    let _ = verse_name(i64::MIN);
}

// ---------------------------------------------------------------------------
// Handle end to end
// ---------------------------------------------------------------------------

#[test]
fn decima_of_octosyllables() {
    // Counts are per word with no sinalefa, so every line sums to 8 on its
    // own: diphthongs (ua, ie, ui, ue, ió, üi, ía, au) and hiatus (río).
    let poem = "\
Yo soy un hombre sincero
la luna llena de plata
canta la rana del r\u{00ED}o
suave murmullo del viento
la poes\u{00ED}a de cada d\u{00ED}a

bajo el cielo de marzo
guitarra que nunca calla
el ping\u{00FC}ino de tierra fr\u{00ED}a
y la canci\u{00F3}n se despide
cantando con la aurora";

    let handle = VersoHandle::new();
    let report = handle.check_poem(PoemForm::Decima, poem);
    assert_eq!(report.verses.len(), 10);
    assert!(report.is_valid(), "{report:?}");
    assert_eq!(report.verses[5].line, 6);
}

#[test]
fn live_feedback_flow() {
    let handle = VersoHandle::new();
    let text = "Verso de once s\u{00ED}labas aqu\u{00ED}\nla luna";

    let stats = handle.text_stats(text);
    assert_eq!(stats.words, 7);
    assert_eq!(stats.syllables, 14);

    let line = handle.line_readout(text, 3);
    assert_eq!(line.to_string(), "11 s\u{00ED}l. \u{00B7} Endecas\u{00ED}labo");

    let selection = handle.selection_readout("la luna").expect("non-blank selection");
    assert_eq!(selection.to_string(), "3 s\u{00ED}l. \u{00B7} Tris\u{00ED}labo");
    assert_eq!(handle.selection_readout("   "), None);
}
