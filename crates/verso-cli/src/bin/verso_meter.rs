// verso-meter: Per-line metrical readout for Spanish verse.
//
// Reads a poem from stdin and prints each line's syllable count and verse
// name. With a form, each verse is also checked against the form's meter
// and a summary is printed.
//
// Usage:
//   verso-meter [-f FORM] [--songs] [--guide]
//
// Options:
//   -f, --form NAME   Check against a poem form (soneto, lira, haiku, ...).
//                     Defaults to $VERSO_FORM when set.
//   --songs           Ignore bracketed section markers such as [Coro]
//   --guide           Print the form's composition guide first
//   -h, --help        Print help

use std::io::{self, Write};

use verso_core::metric::NO_VERSE_NAME;
use verso_es::forms::PoemForm;
use verso_es::handle::VersoHandle;

fn main() {
    verso_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if verso_cli::wants_help(&args) {
        let forms: Vec<&str> = PoemForm::ALL.iter().map(|f| f.id()).collect();
        println!("verso-meter: Per-line metrical readout for Spanish verse.");
        println!();
        println!("Usage: verso-meter [-f FORM] [--songs] [--guide]");
        println!();
        println!("Reads a poem from stdin.");
        println!();
        println!("Options:");
        println!("  -f, --form NAME   Check against a poem form. Defaults to ${}", verso_cli::FORM_ENV);
        println!("                    Forms: {}", forms.join(", "));
        println!("  --songs           Ignore bracketed section markers such as [Coro]");
        println!("  --guide           Print the form's composition guide first");
        println!("  -h, --help        Print this help");
        return;
    }

    let (form, args) = verso_cli::parse_form(&args).unwrap_or_else(|e| verso_cli::fatal(&e));

    let mut handle = VersoHandle::new();
    handle.set_ignore_section_markers(verso_cli::has_flag(&args, "--songs"));

    let input = verso_cli::read_stdin().unwrap_or_else(|e| verso_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let Some(form) = form else {
        for line in handle.line_readouts(&input) {
            if line.text.is_empty() {
                let _ = writeln!(out);
                continue;
            }
            let _ = writeln!(
                out,
                "{:>3}  {:<16} {}",
                line.readout.syllables,
                line.readout.label(),
                line.text
            );
        }
        return;
    };

    let spec = form.spec();
    if verso_cli::has_flag(&args, "--guide") {
        let _ = writeln!(out, "{} \u{00B7} {}", spec.name, spec.tag);
        for guide_line in spec.guide() {
            let _ = writeln!(out, "  {guide_line}");
        }
        let _ = writeln!(out);
    }

    let report = handle.check_poem(form, &input);
    for verse in &report.verses {
        let mark = if verse.matches { "ok" } else { "!!" };
        let expected = if verse.expected.is_empty() {
            NO_VERSE_NAME.to_string()
        } else {
            verse
                .expected
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join("/")
        };
        let _ = writeln!(
            out,
            "{mark} {:>3} ({:>5})  {}",
            verse.syllables, expected, verse.text
        );
    }

    let _ = writeln!(out);
    match report.expected_verses {
        Some(n) => {
            let _ = writeln!(
                out,
                "{}: {} de {} versos, {} fuera de metro",
                spec.name,
                report.verses.len(),
                n,
                report.mismatches()
            );
        }
        None => {
            let _ = writeln!(
                out,
                "{}: {} versos, {} fuera de metro",
                spec.name,
                report.verses.len(),
                report.mismatches()
            );
        }
    }

    if !report.is_valid() {
        let _ = out.flush();
        std::process::exit(2);
    }
}
