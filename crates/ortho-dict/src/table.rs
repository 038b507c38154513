// Fixed-bucket word membership table

use crate::TableError;
use crate::hash::{bucket_index, word_hash};

/// Default bucket count: 26^4. Large relative to the bundled reference
/// dictionaries, so chains stay short.
pub const DEFAULT_CAPACITY: usize = 456_976;

/// A fixed-bucket-count hash set of normalized dictionary words.
///
/// The table is used in two strict phases: bulk insertion while the word
/// list streams in, then read-only lookups for the rest of the check. The
/// bucket count is fixed at creation; the table never resizes or rehashes.
///
/// Both the insert and the lookup path normalize identically (trim, then
/// case-fold), so a word inserted is always retrievable by any casing of
/// the same normalized form.
#[derive(Debug, Clone)]
pub struct WordTable {
    capacity: usize,
    buckets: Vec<Vec<String>>,
    entries: usize,
}

impl WordTable {
    /// Create an empty table with [`DEFAULT_CAPACITY`] buckets.
    pub fn new() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            buckets: vec![Vec::new(); DEFAULT_CAPACITY],
            entries: 0,
        }
    }

    /// Create an empty table with `capacity` buckets.
    ///
    /// Returns [`TableError::InvalidCapacity`] for a zero bucket count.
    pub fn with_capacity(capacity: usize) -> Result<Self, TableError> {
        if capacity == 0 {
            return Err(TableError::InvalidCapacity);
        }
        Ok(Self {
            capacity,
            buckets: vec![Vec::new(); capacity],
            entries: 0,
        })
    }

    /// Insert a dictionary word.
    ///
    /// The word is trimmed and case-folded before hashing; entries left
    /// empty by trimming (blank word-list lines) are skipped. Duplicate
    /// insertion is permitted and harmless: membership is idempotent,
    /// the duplicate entries simply coexist in their chain.
    pub fn insert(&mut self, word: &str) {
        let normalized = normalize(word);
        if normalized.is_empty() {
            return;
        }
        let index = bucket_index(word_hash(&normalized), self.capacity);
        self.buckets[index].push(normalized);
        self.entries += 1;
    }

    /// Check whether a word is present.
    ///
    /// The query is normalized exactly like inserted words, then only the
    /// target bucket's chain is scanned, comparing full string equality.
    pub fn contains(&self, word: &str) -> bool {
        let normalized = normalize(word);
        if normalized.is_empty() {
            return false;
        }
        let index = bucket_index(word_hash(&normalized), self.capacity);
        self.buckets[index].iter().any(|entry| *entry == normalized)
    }

    /// Number of entries inserted so far (duplicates included).
    pub fn len(&self) -> usize {
        self.entries
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// The fixed bucket count chosen at creation.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for WordTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalization applied on both the insert and the lookup path.
fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}
