// SpellerHandle: top-level integration point.
//
// Owns the word-list source and the tables built from it, and exposes the
// check/spell entry points the CLI tools build on. Tables are kept in an
// explicit per-language cache owned by the handle: a language's table is
// built on its first check and reused for later checks through the same
// handle. Nothing is shared between handles and nothing survives a handle
// being dropped.

use std::time::{Duration, Instant};

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

use ortho_core::language::Language;
use ortho_core::stats::CheckStatistics;
use ortho_dict::{DEFAULT_CAPACITY, WordTable};

use crate::checker::{self, CheckError};
use crate::normalizer::clean_text;
use crate::wordlist::WordListSource;

/// Top-level handle that owns the word-list source and built tables.
pub struct SpellerHandle {
    source: Box<dyn WordListSource>,

    /// Bucket count for newly built tables.
    capacity: usize,

    /// Tables built so far, keyed by language.
    tables: HashMap<Language, WordTable>,
}

impl SpellerHandle {
    /// Create a handle with the default table capacity.
    pub fn new(source: Box<dyn WordListSource>) -> Self {
        Self {
            source,
            capacity: DEFAULT_CAPACITY,
            tables: HashMap::new(),
        }
    }

    /// Create a handle whose tables use `capacity` buckets.
    ///
    /// The capacity is validated here so a misconfigured handle fails at
    /// construction rather than on the first check.
    pub fn with_table_capacity(
        source: Box<dyn WordListSource>,
        capacity: usize,
    ) -> Result<Self, CheckError> {
        // Probe constructs a throwaway table purely for validation.
        WordTable::with_capacity(capacity)?;
        Ok(Self {
            source,
            capacity,
            tables: HashMap::new(),
        })
    }

    /// Check a block of text against the dictionary for `language`.
    ///
    /// The language's table is built from the word-list source on the
    /// first check and reused afterwards; on a reuse, `load_time` in the
    /// returned statistics is zero while `dictionary_words` still reports
    /// the cached table's entry count.
    pub fn check(&mut self, language: &str, text: &str) -> Result<CheckStatistics, CheckError> {
        let language: Language = language.parse()?;
        if text.trim().is_empty() {
            return Err(CheckError::EmptyText);
        }

        let start = Instant::now();
        let cleaned = clean_text(text);
        let clean_time = start.elapsed();

        let (table, load_time) = self.table_for(language)?;
        Ok(checker::classify_tokens(table, &cleaned, clean_time, load_time))
    }

    /// Check a single word, returning whether it is in the dictionary.
    ///
    /// The word goes through the same normalization as full-text checks,
    /// so `"Dog!"` matches a dictionary entry `dog`.
    pub fn spell(&mut self, language: &str, word: &str) -> Result<bool, CheckError> {
        let language: Language = language.parse()?;
        if word.trim().is_empty() {
            return Err(CheckError::EmptyText);
        }
        let (table, _) = self.table_for(language)?;
        Ok(table.contains(&clean_text(word)))
    }

    /// Get the table for `language`, building it on first use.
    ///
    /// Returns the table together with the build duration (zero on a
    /// cache hit).
    fn table_for(&mut self, language: Language) -> Result<(&WordTable, Duration), CheckError> {
        match self.tables.entry(language) {
            Entry::Occupied(entry) => Ok((entry.into_mut(), Duration::ZERO)),
            Entry::Vacant(entry) => {
                let words = self.source.load(language)?;
                let (table, load_time) = checker::build_table(&words, self.capacity)?;
                Ok((entry.insert(table), load_time))
            }
        }
    }
}
