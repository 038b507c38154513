// Top-level check pipeline
//
// The phases run in a strict order: validate the language tag and input
// text, clean the text, obtain the word list and build the table, then
// look up every token. Each phase is timed; the three durations end up in
// the statistics record.

use std::time::{Duration, Instant};

use ortho_core::language::{Language, ParseLanguageError};
use ortho_core::stats::CheckStatistics;
use ortho_dict::{DEFAULT_CAPACITY, TableError, WordTable};

use crate::normalizer::clean_text;
use crate::wordlist::WordListSource;

/// Error type for check failures.
///
/// Every variant is an immediate, local validation failure reported
/// synchronously; nothing here is transient, so there are no retries and
/// no partial results. A failed check produces no statistics record.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// The language tag is not in the supported set.
    #[error(transparent)]
    UnsupportedLanguage(#[from] ParseLanguageError),

    /// The input text is empty or whitespace-only.
    #[error("input text is empty")]
    EmptyText,

    /// The dictionary table was configured with an unusable bucket count.
    #[error(transparent)]
    InvalidCapacity(#[from] TableError),

    /// The word list for a language could not be obtained. Surfaced as an
    /// error rather than an empty dictionary: an empty dictionary would
    /// silently mark every word as misspelled.
    #[error("word list for {language} unavailable ({path}): {source}")]
    DictionaryUnavailable {
        language: Language,
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Build a word table from a list of dictionary words, timing the build.
pub fn build_table(
    words: &[String],
    capacity: usize,
) -> Result<(WordTable, Duration), CheckError> {
    let start = Instant::now();
    let mut table = WordTable::with_capacity(capacity)?;
    for word in words {
        table.insert(word);
    }
    Ok((table, start.elapsed()))
}

/// Classify every whitespace-delimited token of `cleaned` against `table`,
/// producing the statistics record. `clean_time` and `load_time` are the
/// timings of the phases the caller already ran.
pub fn classify_tokens(
    table: &WordTable,
    cleaned: &str,
    clean_time: Duration,
    load_time: Duration,
) -> CheckStatistics {
    let start = Instant::now();
    let mut total_words = 0;
    let mut misspelled_words = Vec::new();
    for token in cleaned.split_whitespace() {
        total_words += 1;
        if !table.contains(token) {
            misspelled_words.push(token.to_string());
        }
    }
    let lookup_time = start.elapsed();

    CheckStatistics {
        total_words,
        misspelled_num: misspelled_words.len(),
        misspelled_words,
        dictionary_words: table.len(),
        clean_time,
        load_time,
        lookup_time,
    }
}

/// One-shot check: parse the language tag, validate and clean the text,
/// load the word list, build a fresh table, classify every token.
///
/// The table is discarded when the call returns. Callers that check
/// repeatedly in the same language should hold a
/// [`SpellerHandle`](crate::handle::SpellerHandle) instead, which keeps
/// built tables in an explicit per-language cache.
pub fn run_check(
    language: &str,
    text: &str,
    source: &dyn WordListSource,
) -> Result<CheckStatistics, CheckError> {
    let language: Language = language.parse()?;
    run_check_for(language, text, source)
}

/// Check with an already-parsed language tag.
pub fn run_check_for(
    language: Language,
    text: &str,
    source: &dyn WordListSource,
) -> Result<CheckStatistics, CheckError> {
    if text.trim().is_empty() {
        return Err(CheckError::EmptyText);
    }

    let start = Instant::now();
    let cleaned = clean_text(text);
    let clean_time = start.elapsed();

    let words = source.load(language)?;
    let (table, load_time) = build_table(&words, DEFAULT_CAPACITY)?;

    Ok(classify_tokens(&table, &cleaned, clean_time, load_time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlist::StaticSource;

    fn dict(words: &[&str]) -> StaticSource {
        StaticSource::new(words.iter().copied())
    }

    #[test]
    fn unknown_language_is_rejected() {
        let result = run_check("klingon", "some text", &dict(&["some"]));
        assert!(matches!(
            result,
            Err(CheckError::UnsupportedLanguage(_))
        ));
    }

    #[test]
    fn empty_text_is_rejected() {
        let result = run_check("english", "", &dict(&["cat"]));
        assert!(matches!(result, Err(CheckError::EmptyText)));
    }

    #[test]
    fn whitespace_only_text_is_rejected() {
        let result = run_check("english", " \t\n ", &dict(&["cat"]));
        assert!(matches!(result, Err(CheckError::EmptyText)));
    }

    #[test]
    fn language_tag_is_case_insensitive() {
        let stats = run_check("English", "cat", &dict(&["cat"])).unwrap();
        assert_eq!(stats.misspelled_num, 0);
    }

    #[test]
    fn punctuation_only_text_yields_zero_tokens() {
        // Non-empty input whose every character is stripped: the check
        // runs and simply has nothing to look up.
        let stats = run_check("english", "?!...", &dict(&["cat"])).unwrap();
        assert_eq!(stats.total_words, 0);
        assert_eq!(stats.misspelled_num, 0);
    }

    #[test]
    fn build_table_skips_blank_lines() {
        let words = vec!["cat".to_string(), String::new(), "  ".to_string()];
        let (table, _) = build_table(&words, 1024).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn build_table_rejects_zero_capacity() {
        let result = build_table(&[], 0);
        assert!(matches!(
            result,
            Err(CheckError::InvalidCapacity(TableError::InvalidCapacity))
        ));
    }

    #[test]
    fn classify_counts_repeated_misses_per_occurrence() {
        let (table, load_time) = build_table(&["cat".to_string()], 1024).unwrap();
        let stats = classify_tokens(&table, "dog cat dog", Duration::ZERO, load_time);
        assert_eq!(stats.total_words, 3);
        assert_eq!(stats.misspelled_num, 2);
        assert_eq!(stats.misspelled_words, vec!["dog", "dog"]);
    }

    #[test]
    fn misses_keep_text_order() {
        let (table, _) = build_table(&["dog".to_string()], 1024).unwrap();
        let stats = classify_tokens(&table, "zebra dog apple", Duration::ZERO, Duration::ZERO);
        assert_eq!(stats.misspelled_words, vec!["zebra", "apple"]);
    }
}
