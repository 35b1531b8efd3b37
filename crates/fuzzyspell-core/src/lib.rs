//! Shared types and utilities for the fuzzyspell engine.
//!
//! This crate holds the pieces that both the engine and the presentation
//! layer (the CLI) need to agree on:
//!
//! - [`character`] -- Character classification and query normalization
//! - [`enums`] -- Token types and engine-wide constants
//! - [`suggestion`] -- The ranked `(word, distance)` result type
//! - [`token`] -- Text tokens produced by the tokenizer

pub mod character;
pub mod enums;
pub mod suggestion;
pub mod token;

pub use enums::{DEFAULT_MAX_SUGGESTIONS, MAX_WORD_LEN, TokenType};
pub use suggestion::Suggestion;
pub use token::Token;
