// Whole-text checking
//
// Tokenizes a text, checks every purely alphabetic word against the
// speller and keeps the token stream so a caller can replace one token and
// rebuild the text.

use fuzzyspell_core::Token;
use serde::{Deserialize, Serialize};

use crate::speller::Speller;
use crate::tokenizer::tokenize;

/// A token together with its spell check outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckedToken {
    pub token: Token,
    /// `true` for alphabetic words missing from the dictionary. Always
    /// `false` for whitespace, punctuation and words with digits or `_`.
    pub misspelled: bool,
}

/// Result of checking a text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextReport {
    pub tokens: Vec<CheckedToken>,
    /// Number of alphabetic words checked.
    pub word_count: usize,
    /// Number of checked words not found in the dictionary.
    pub error_count: usize,
}

impl TextReport {
    /// Tokenize and check `text`.
    pub fn check(speller: &Speller, text: &str) -> Self {
        let mut word_count = 0;
        let mut error_count = 0;
        let tokens = tokenize(text)
            .into_iter()
            .map(|token| {
                let mut misspelled = false;
                if token.is_alphabetic_word() {
                    word_count += 1;
                    if !speller.is_correct(&token.text) {
                        misspelled = true;
                        error_count += 1;
                    }
                }
                CheckedToken { token, misspelled }
            })
            .collect();
        Self {
            tokens,
            word_count,
            error_count,
        }
    }

    /// Percentage of checked words that are correct, rounded down. A text
    /// without words scores 100.
    pub fn accuracy(&self) -> u8 {
        if self.word_count == 0 {
            return 100;
        }
        ((self.word_count - self.error_count) * 100 / self.word_count) as u8
    }

    /// Iterate over `(token index, token)` for misspelled words.
    pub fn misspelled(&self) -> impl Iterator<Item = (usize, &Token)> {
        self.tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| t.misspelled)
            .map(|(i, t)| (i, &t.token))
    }

    /// Rebuild the text with the token at `index` replaced.
    ///
    /// Returns `None` if `index` is out of range.
    pub fn replace(&self, index: usize, replacement: &str) -> Option<String> {
        if index >= self.tokens.len() {
            return None;
        }
        let mut out = String::new();
        for (i, checked) in self.tokens.iter().enumerate() {
            if i == index {
                out.push_str(replacement);
            } else {
                out.push_str(&checked.token.text);
            }
        }
        Some(out)
    }

    /// Rebuild the original text.
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.token.text.as_str()).collect()
    }
}
