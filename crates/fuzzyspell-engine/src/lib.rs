//! Edit-distance spell checking engine.
//!
//! The engine owns an in-memory word list and answers two questions about a
//! query word: is it in the dictionary, and which dictionary words are close
//! to it under the restricted Damerau-Levenshtein metric.
//!
//! # Architecture
//!
//! - [`distance`] -- Restricted Damerau-Levenshtein distance
//! - [`dictionary`] -- Word storage, line normalization and loading
//! - [`suggestion`] -- Bounded suggestion collection (first-N or best-N)
//! - [`speller`] -- The `Speller` engine: load, check, suggest
//! - [`tokenizer`] -- Splitting free text into word/punctuation/space tokens
//! - [`text`] -- Checking whole texts and rebuilding them after a correction
//! - [`shared`] -- A lock-guarded `Speller` for multi-threaded hosts

pub mod dictionary;
pub mod distance;
#[cfg(feature = "shared")]
pub mod shared;
pub mod speller;
pub mod suggestion;
pub mod text;
pub mod tokenizer;

pub use dictionary::{Dictionary, DictionaryWord, LoadStats};
pub use distance::{DistanceTable, distance};
#[cfg(feature = "shared")]
pub use shared::SharedSpeller;
pub use speller::{Speller, SpellerOptions, SuggestParams};
pub use suggestion::{CapPolicy, SuggestionCollector};
pub use text::{CheckedToken, TextReport};

pub use fuzzyspell_core::{MAX_WORD_LEN, Suggestion, Token, TokenType};

/// Error type for dictionary loading.
///
/// A failed load never leaves a partially populated dictionary behind: the
/// engine that attempted the load is left empty.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read dictionary {origin}: {source}")]
    Unreadable {
        origin: String,
        #[source]
        source: std::io::Error,
    },
    #[error("out of memory growing the word table past {requested} words")]
    OutOfMemory { requested: usize },
}

/// Error type for distance computation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DistanceError {
    #[error("out of memory allocating a {rows}x{cols} distance table")]
    OutOfMemory { rows: usize, cols: usize },
}

/// Error type for suggestion queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SuggestError {
    #[error(transparent)]
    Distance(#[from] DistanceError),
    #[error("out of memory collecting {requested} suggestions")]
    OutOfMemory { requested: usize },
}
