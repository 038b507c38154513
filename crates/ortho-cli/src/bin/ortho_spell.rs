// ortho-spell: Check spelling of words from stdin.
//
// Reads words from stdin (one per line) and reports whether each word is
// in the reference dictionary:
//   C: word    (correct)
//   W: word    (wrong / misspelled)
//
// Usage:
//   ortho-spell [-d DICT_PATH] [-l LANGUAGE]
//
// Options:
//   -d, --dict-path PATH   Directory containing <language>.txt word lists
//   -l, --language LANG    Language to check against (default: english)
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = ortho_cli::parse_dict_path(&args);

    if ortho_cli::wants_help(&args) {
        println!("ortho-spell: Check spelling of words from stdin.");
        println!();
        println!("Usage: ortho-spell [-d DICT_PATH] [-l LANGUAGE]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  C: word    (correct)");
        println!("  W: word    (misspelled)");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Directory containing <language>.txt word lists");
        println!(
            "  -l, --language LANG    Language to check against (default: english)"
        );
        println!("                         Supported: {}", ortho_cli::supported_languages());
        println!("  -h, --help             Print this help");
        return;
    }

    let (language, _args) = ortho_cli::parse_language(&args);

    let mut handle = ortho_cli::load_handle(dict_path.as_deref(), language)
        .unwrap_or_else(|e| ortho_cli::fatal(&e));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        match handle.spell(language.tag(), word) {
            Ok(true) => {
                let _ = writeln!(out, "C: {word}");
            }
            Ok(false) => {
                let _ = writeln!(out, "W: {word}");
            }
            Err(e) => ortho_cli::fatal(&e.to_string()),
        }
    }
}
