// Language tags for the supported reference dictionaries

use std::fmt;
use std::str::FromStr;

/// Languages with a reference dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    German,
    French,
    Spanish,
    Italian,
}

/// Error returned when a language tag is outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language: {0}")]
pub struct ParseLanguageError(pub String);

impl Language {
    /// All supported languages, in a stable order.
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::German,
        Language::French,
        Language::Spanish,
        Language::Italian,
    ];

    /// The lowercase tag for this language. Word-list files are named
    /// after the tag (`english.txt`, `german.txt`, ...).
    pub fn tag(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::German => "german",
            Language::French => "french",
            Language::Spanish => "spanish",
            Language::Italian => "italian",
        }
    }
}

impl FromStr for Language {
    type Err = ParseLanguageError;

    /// Tags compare case-insensitively: "English" and "ENGLISH" both
    /// resolve to [`Language::English`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "english" => Ok(Language::English),
            "german" => Ok(Language::German),
            "french" => Ok(Language::French),
            "spanish" => Ok(Language::Spanish),
            "italian" => Ok(Language::Italian),
            _ => Err(ParseLanguageError(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
