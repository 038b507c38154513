//! Spell checking pipeline.
//!
//! Given a language tag and a block of text, determines which words are
//! absent from the reference dictionary for that language and reports the
//! misses together with phase timings.
//!
//! # Architecture
//!
//! - [`normalizer`] -- punctuation stripping and case folding
//! - [`wordlist`] -- word-list sources (filesystem, in-memory)
//! - [`checker`] -- the phased check pipeline and its error type
//! - [`handle`] -- [`SpellerHandle`], the top-level integration point

pub mod checker;
pub mod handle;
pub mod normalizer;
pub mod wordlist;

pub use checker::{CheckError, run_check};
pub use handle::SpellerHandle;
