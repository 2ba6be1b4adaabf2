// verso-syllables: Count syllables in Spanish words.
//
// Prints each word with its syllable count. Punctuation is stripped from
// each word before counting, as it is for running text.
//
// Usage:
//   verso-syllables [WORD...]
//
// Options:
//   -h, --help    Print help

use std::io::{self, BufRead, Write};

use verso_es::tokenizer::{clean_token, tokens};

fn main() {
    verso_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if verso_cli::wants_help(&args) {
        println!("verso-syllables: Count syllables in Spanish words.");
        println!();
        println!("Usage: verso-syllables [WORD...]");
        println!();
        println!("If WORD arguments are given, counts each word.");
        println!("Otherwise reads text from stdin and counts every word in it.");
        println!();
        println!("Options:");
        println!("  -h, --help    Print this help");
        return;
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let mut print_word = |raw: &str| {
        let word = clean_token(raw);
        if word.is_empty() {
            return;
        }
        let _ = writeln!(out, "{word} {}", verso_es::count_word(&word));
    };

    if args.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            for token in tokens(&line) {
                print_word(&token.text);
            }
        }
    } else {
        args.iter().for_each(|a| print_word(a.as_str()));
    }
}
