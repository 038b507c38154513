//! Dictionary membership engine.
//!
//! A fixed-bucket-count, open-chaining hash set of normalized words. The
//! table is built once per check from a word list and then queried
//! read-only, one lookup per input token.
//!
//! # Architecture
//!
//! - [`hash`] -- full-string polynomial hash and bucket reduction
//! - [`table`] -- the `WordTable` bucket store

pub mod hash;
pub mod table;

pub use table::{DEFAULT_CAPACITY, WordTable};

/// Error type for table construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// The requested bucket count was zero. The bucket count is fixed at
    /// creation time and every entry index is reduced modulo it, so a
    /// zero-bucket table cannot hold anything.
    #[error("table capacity must be at least one bucket")]
    InvalidCapacity,
}
