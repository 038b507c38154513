//! Shared types for the ortho spell checker.
//!
//! This crate holds the leaf types the rest of the workspace builds on:
//!
//! - [`language`] -- the supported language tags
//! - [`character`] -- the punctuation set stripped during normalization
//! - [`stats`] -- the per-check statistics record

pub mod character;
pub mod language;
pub mod stats;
