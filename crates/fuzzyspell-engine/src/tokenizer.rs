// Tokenizer: split free text into word, punctuation and whitespace runs
//
// Every character belongs to exactly one run, so the tokens cover the input
// without gaps and concatenating them reproduces it.

use fuzzyspell_core::character::{CharType, get_char_type, is_word_char};
use fuzzyspell_core::{Token, TokenType};

/// Coarse class of a character for run splitting.
fn run_class(c: char) -> TokenType {
    if is_word_char(c) {
        TokenType::Word
    } else if get_char_type(c) == CharType::Whitespace {
        TokenType::Whitespace
    } else {
        TokenType::Punctuation
    }
}

/// Split `text` into maximal runs of word characters, whitespace, and
/// everything else.
///
/// Token positions are character offsets into `text`.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut run_start_byte = 0;
    let mut run_start_char = 0;
    let mut current: Option<TokenType> = None;

    for (char_idx, (byte_idx, c)) in text.char_indices().enumerate() {
        let class = run_class(c);
        match current {
            Some(kind) if kind == class => {}
            Some(kind) => {
                tokens.push(Token::new(
                    kind,
                    &text[run_start_byte..byte_idx],
                    run_start_char,
                ));
                run_start_byte = byte_idx;
                run_start_char = char_idx;
                current = Some(class);
            }
            None => current = Some(class),
        }
    }

    if let Some(kind) = current {
        tokens.push(Token::new(kind, &text[run_start_byte..], run_start_char));
    }
    tokens
}

/// Iterate over the word tokens of `text`.
pub fn words(text: &str) -> impl Iterator<Item = Token> {
    tokenize(text)
        .into_iter()
        .filter(|t| t.token_type == TokenType::Word)
}
