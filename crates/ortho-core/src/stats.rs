// Per-check statistics record

use std::time::Duration;

use serde::Serialize;

/// Outcome of one spell-check run.
///
/// Created once per check and returned to the caller; the core retains
/// nothing. `dictionary_words` is part of the record so callers can tell
/// "zero misspellings because the text was perfect" apart from "zero
/// entries because the word list was empty".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckStatistics {
    /// Number of word tokens in the cleaned text.
    pub total_words: usize,

    /// Number of tokens absent from the dictionary.
    pub misspelled_num: usize,

    /// The misspelled tokens in their cleaned, case-folded form, in text
    /// order. Repeated misses appear once per occurrence.
    pub misspelled_words: Vec<String>,

    /// Entry count of the dictionary table the text was checked against.
    pub dictionary_words: usize,

    /// Time spent normalizing the input text.
    pub clean_time: Duration,

    /// Time spent building the dictionary table from the word list.
    /// Zero when a previously built table was reused.
    pub load_time: Duration,

    /// Time spent looking up every token.
    pub lookup_time: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CheckStatistics {
        CheckStatistics {
            total_words: 3,
            misspelled_num: 1,
            misspelled_words: vec!["the".to_string()],
            dictionary_words: 3,
            clean_time: Duration::from_micros(12),
            load_time: Duration::from_micros(340),
            lookup_time: Duration::from_micros(5),
        }
    }

    #[test]
    fn clone_preserves_fields() {
        let stats = sample();
        assert_eq!(stats.clone(), stats);
    }

    #[test]
    fn misspelled_count_matches_list() {
        let stats = sample();
        assert_eq!(stats.misspelled_num, stats.misspelled_words.len());
    }
}
