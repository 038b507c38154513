// ortho-cli: shared utilities for the command-line tools.

use std::path::PathBuf;
use std::process;

use ortho_core::language::Language;
use ortho_speller::handle::SpellerHandle;
use ortho_speller::wordlist::DirectorySource;

/// Word-list directory name under the user's home directory.
const HOME_SUBDIR: &str = ".ortho/wordlists";

/// System-wide word-list directory.
const SYSTEM_DIR: &str = "/usr/share/ortho/wordlists";

/// Search for a word-list directory and create a SpellerHandle.
///
/// Search order:
/// 1. `dict_path` argument (if provided)
/// 2. `ORTHO_DICT_PATH` environment variable
/// 3. `~/.ortho/wordlists`
/// 4. `/usr/share/ortho/wordlists`
/// 5. Current working directory
///
/// A directory qualifies when it contains the word-list file for the
/// requested language (`<tag>.txt`).
pub fn load_handle(dict_path: Option<&str>, language: Language) -> Result<SpellerHandle, String> {
    let search_paths = build_search_paths(dict_path);
    let list_name = format!("{}.txt", language.tag());

    for dir in &search_paths {
        if dir.join(&list_name).is_file() {
            return Ok(SpellerHandle::new(Box::new(DirectorySource::new(
                dir.clone(),
            ))));
        }
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        list_name,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of directories to search for word-list files.
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
    }

    // 2. ORTHO_DICT_PATH environment variable
    if let Ok(env_path) = std::env::var("ORTHO_DICT_PATH") {
        paths.push(PathBuf::from(env_path));
    }

    // 3. Home directory
    if let Some(home) = home_dir() {
        paths.push(home.join(HOME_SUBDIR));
    }

    // 4. System path
    paths.push(PathBuf::from(SYSTEM_DIR));

    // 5. Current directory (fallback for local development)
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--dict-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut dict_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--dict-path=") {
            dict_path = Some(val.to_string());
        } else if arg == "--dict-path" || arg == "-d" {
            if i + 1 < args.len() {
                dict_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {} requires a value", arg);
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (dict_path, remaining)
}

/// Parse a `--language=LANG` or `-l LANG` argument from command line args.
///
/// Returns `(language, remaining_args)`; exits with an error message
/// listing the supported languages when the tag is not recognized.
/// Defaults to english.
pub fn parse_language(args: &[String]) -> (Language, Vec<String>) {
    let mut tag: Option<String> = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--language=") {
            tag = Some(val.to_string());
        } else if arg == "--language" || arg == "-l" {
            if i + 1 < args.len() {
                tag = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {} requires a value", arg);
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    let language = match tag {
        None => Language::English,
        Some(tag) => tag.parse().unwrap_or_else(|_| {
            eprintln!(
                "error: unsupported language {:?} (supported: {})",
                tag,
                supported_languages()
            );
            process::exit(1);
        }),
    };

    (language, remaining)
}

/// Comma-separated list of the supported language tags, for help output.
pub fn supported_languages() -> String {
    Language::ALL
        .iter()
        .map(|l| l.tag())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_dict_path_equals_form() {
        let (path, rest) = parse_dict_path(&args(&["--dict-path=/tmp/w", "x"]));
        assert_eq!(path.as_deref(), Some("/tmp/w"));
        assert_eq!(rest, args(&["x"]));
    }

    #[test]
    fn parse_dict_path_space_form() {
        let (path, rest) = parse_dict_path(&args(&["-d", "/tmp/w", "x"]));
        assert_eq!(path.as_deref(), Some("/tmp/w"));
        assert_eq!(rest, args(&["x"]));
    }

    #[test]
    fn parse_dict_path_absent() {
        let (path, rest) = parse_dict_path(&args(&["x", "y"]));
        assert_eq!(path, None);
        assert_eq!(rest, args(&["x", "y"]));
    }

    #[test]
    fn parse_language_defaults_to_english() {
        let (language, rest) = parse_language(&args(&["some", "text"]));
        assert_eq!(language, Language::English);
        assert_eq!(rest, args(&["some", "text"]));
    }

    #[test]
    fn parse_language_space_and_equals_forms() {
        let (language, _) = parse_language(&args(&["-l", "german"]));
        assert_eq!(language, Language::German);
        let (language, _) = parse_language(&args(&["--language=Italian"]));
        assert_eq!(language, Language::Italian);
    }

    #[test]
    fn wants_help_finds_both_spellings() {
        assert!(wants_help(&args(&["-h"])));
        assert!(wants_help(&args(&["x", "--help"])));
        assert!(!wants_help(&args(&["x"])));
    }

    #[test]
    fn supported_languages_lists_all_five() {
        let listed = supported_languages();
        for lang in Language::ALL {
            assert!(listed.contains(lang.tag()));
        }
    }
}
