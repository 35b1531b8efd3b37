// Shared enums and engine-wide constants

use serde::{Deserialize, Serialize};

/// Token types for text tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// Run of word characters (letters, digits, underscore).
    Word,
    /// Run of characters that are neither word characters nor whitespace.
    Punctuation,
    /// Run of whitespace.
    Whitespace,
}

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Word length bound, in characters. Dictionary words must be strictly
/// shorter than this; queries are truncated to `MAX_WORD_LEN - 1` characters.
pub const MAX_WORD_LEN: usize = 50;

/// Default cap on the number of suggestions collected per query.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 1000;
