// ortho-check: Check the spelling of a block of text.
//
// With TEXT arguments, checks their concatenation; otherwise reads the
// whole of stdin. Prints the statistics report:
//   Total number of words checked: ...
//   Number of misspelled words: ...
//   Misspelled words: [...]
//   Number of words in dictionary: ...
//   Checking time / Words loading time / Text adjustment time
//
// Usage:
//   ortho-check [-d DICT_PATH] [-l LANGUAGE] [--json] [TEXT...]
//
// Options:
//   -d, --dict-path PATH   Directory containing <language>.txt word lists
//   -l, --language LANG    Language to check against (default: english)
//   --json                 Print the statistics record as JSON
//   -h, --help             Print help

use std::io::Read;
use std::time::Duration;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = ortho_cli::parse_dict_path(&args);

    if ortho_cli::wants_help(&args) {
        println!("ortho-check: Check the spelling of a block of text.");
        println!();
        println!("Usage: ortho-check [-d DICT_PATH] [-l LANGUAGE] [--json] [TEXT...]");
        println!();
        println!("With TEXT arguments, checks their concatenation; otherwise reads");
        println!("the whole of stdin.");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Directory containing <language>.txt word lists");
        println!(
            "  -l, --language LANG    Language to check against (default: english)"
        );
        println!("                         Supported: {}", ortho_cli::supported_languages());
        println!("  --json                 Print the statistics record as JSON");
        println!("  -h, --help             Print this help");
        return;
    }

    let (language, args) = ortho_cli::parse_language(&args);
    let json = args.iter().any(|a| a == "--json");
    let text_args: Vec<&String> = args.iter().filter(|a| !a.starts_with('-')).collect();

    let text = if text_args.is_empty() {
        let mut buffer = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut buffer) {
            ortho_cli::fatal(&format!("failed to read stdin: {e}"));
        }
        buffer
    } else {
        text_args
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    };

    let mut handle = ortho_cli::load_handle(dict_path.as_deref(), language)
        .unwrap_or_else(|e| ortho_cli::fatal(&e));

    let stats = handle
        .check(language.tag(), &text)
        .unwrap_or_else(|e| ortho_cli::fatal(&e.to_string()));

    if json {
        match serde_json::to_string_pretty(&stats) {
            Ok(rendered) => println!("{rendered}"),
            Err(e) => ortho_cli::fatal(&format!("failed to render JSON: {e}")),
        }
        return;
    }

    println!("Total number of words checked: {}", stats.total_words);
    println!("Number of misspelled words: {}", stats.misspelled_num);
    println!("Misspelled words: [{}]", stats.misspelled_words.join(", "));
    println!("Number of words in dictionary: {}", stats.dictionary_words);
    println!("Checking time: {}", format_ms(stats.lookup_time));
    println!("Words loading time: {}", format_ms(stats.load_time));
    println!("Text adjustment time: {}", format_ms(stats.clean_time));
}

/// Render a duration as fractional milliseconds.
fn format_ms(d: Duration) -> String {
    format!("{:.3} ms", d.as_secs_f64() * 1_000.0)
}
