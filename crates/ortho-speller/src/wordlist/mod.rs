// Word-list sources: where reference dictionaries come from

use std::fs;
use std::path::PathBuf;

use ortho_core::language::Language;

use crate::checker::CheckError;

/// A provider of reference word lists.
///
/// Implementations hand the checker a completed, ordered sequence of
/// dictionary words, one entry per line of the underlying list. Transport
/// concerns (filesystem layout, remote fetch, embedding) stay behind this
/// trait; the checker only requires that the words are available before
/// lookups begin.
pub trait WordListSource {
    /// Load the word list for `language`.
    ///
    /// A successfully loaded but empty list is returned as-is; the caller
    /// can observe that degenerate case through the dictionary size in
    /// the statistics record. Failing to obtain the list at all must be
    /// reported as [`CheckError::DictionaryUnavailable`], never as an
    /// empty list.
    fn load(&self, language: Language) -> Result<Vec<String>, CheckError>;
}

/// Reads `<dir>/<tag>.txt` word lists from a directory.
///
/// This matches the layout reference dictionaries ship in: one plain-text
/// file per language (`english.txt`, `german.txt`, ...), one word per
/// line.
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the word-list file for `language`.
    pub fn list_path(&self, language: Language) -> PathBuf {
        self.dir.join(format!("{}.txt", language.tag()))
    }
}

impl WordListSource for DirectorySource {
    fn load(&self, language: Language) -> Result<Vec<String>, CheckError> {
        let path = self.list_path(language);
        let contents =
            fs::read_to_string(&path).map_err(|source| CheckError::DictionaryUnavailable {
                language,
                path: path.display().to_string(),
                source,
            })?;
        Ok(contents.lines().map(str::to_string).collect())
    }
}

/// A fixed in-memory word list, served for every language.
///
/// Useful for tests and for embedding a list directly in a binary.
pub struct StaticSource {
    words: Vec<String>,
}

impl StaticSource {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

impl WordListSource for StaticSource {
    fn load(&self, _language: Language) -> Result<Vec<String>, CheckError> {
        Ok(self.words.clone())
    }
}
