// verso-count: Word, syllable and character statistics for Spanish text.
//
// Reads text from stdin and prints the same statistics an editor shows in
// its status bar.
//
// Usage:
//   verso-count [--songs]
//
// Options:
//   --songs       Ignore bracketed section markers such as [Coro]
//   -h, --help    Print help

use std::io::{self, Write};

use verso_es::handle::VersoHandle;

fn main() {
    verso_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if verso_cli::wants_help(&args) {
        println!("verso-count: Word, syllable and character statistics for Spanish text.");
        println!();
        println!("Usage: verso-count [--songs]");
        println!();
        println!("Reads text from stdin.");
        println!();
        println!("Options:");
        println!("  --songs       Ignore bracketed section markers such as [Coro]");
        println!("  -h, --help    Print this help");
        return;
    }

    let mut handle = VersoHandle::new();
    handle.set_ignore_section_markers(verso_cli::has_flag(&args, "--songs"));

    let input = verso_cli::read_stdin().unwrap_or_else(|e| verso_cli::fatal(&e));
    let stats = handle.text_stats(&input);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let _ = writeln!(out, "Palabras: {}", stats.words);
    let _ = writeln!(out, "S\u{00ED}labas: {}", stats.syllables);
    let _ = writeln!(out, "Caracteres: {}", stats.chars);
}
