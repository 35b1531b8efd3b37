// Character classification, simple case folding and word normalization

// ---------------------------------------------------------------------------
// Character type classification
// ---------------------------------------------------------------------------

/// Character type classification used by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    Letter,
    Digit,
    /// The underscore: part of a word run, but neither letter nor digit.
    Connector,
    Whitespace,
    Punctuation,
}

/// Returns the character type for a given character.
///
/// Everything that is not a word character or whitespace is classified as
/// punctuation, so every character falls into exactly one class.
pub fn get_char_type(c: char) -> CharType {
    if c.is_alphabetic() {
        return CharType::Letter;
    }
    if c.is_numeric() {
        return CharType::Digit;
    }
    if c == '_' {
        return CharType::Connector;
    }
    if c.is_whitespace() {
        return CharType::Whitespace;
    }
    CharType::Punctuation
}

/// Check whether a character belongs to a word run (letter, digit or `_`).
pub fn is_word_char(c: char) -> bool {
    matches!(
        get_char_type(c),
        CharType::Letter | CharType::Digit | CharType::Connector
    )
}

// ---------------------------------------------------------------------------
// Simple (one-to-one) case mapping
//
// Multi-character lowercase expansions are cut to their first character so
// that folding never changes the character count of a word.
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Fold every character of `s` to lowercase, keeping the character count.
pub fn fold_lower(s: &str) -> String {
    s.chars().map(simple_lower).collect()
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Cut a raw dictionary line at its first line terminator (`\n` or `\r`).
pub fn strip_line_ending(line: &str) -> &str {
    match line.find(['\n', '\r']) {
        Some(end) => &line[..end],
        None => line,
    }
}

/// Normalize a query word: keep at most `max_len - 1` characters, then fold
/// to lowercase.
///
/// Queries are truncated, never rejected, so that a query and the stored
/// dictionary words always live under the same length bound.
pub fn normalize_word(word: &str, max_len: usize) -> String {
    word.chars()
        .take(max_len.saturating_sub(1))
        .map(simple_lower)
        .collect()
}
