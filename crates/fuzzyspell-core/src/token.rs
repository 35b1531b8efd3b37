// Token public API type

use serde::{Deserialize, Serialize};

use crate::enums::TokenType;

/// A text token produced by the tokenizer.
///
/// Tokens cover their source text without gaps: concatenating the `text` of
/// every token yields the original input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The type of this token.
    pub token_type: TokenType,

    /// The text content of this token.
    pub text: String,

    /// Length of the token in characters.
    pub token_len: usize,

    /// Position of this token within the text (character offset).
    pub pos: usize,
}

impl Token {
    /// Create a new token.
    pub fn new(token_type: TokenType, text: impl Into<String>, pos: usize) -> Self {
        let text = text.into();
        let token_len = text.chars().count();
        Self {
            token_type,
            text,
            token_len,
            pos,
        }
    }

    /// Whether this is a word token made only of alphabetic characters.
    ///
    /// Word runs that contain digits or underscores are not spell checked.
    pub fn is_alphabetic_word(&self) -> bool {
        self.token_type == TokenType::Word
            && !self.text.is_empty()
            && self.text.chars().all(char::is_alphabetic)
    }
}
