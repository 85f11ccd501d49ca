//! Lexeme classification.
//!
//! The scanner decides *where* a lexeme starts and ends and which lexical
//! category it was recognised under. This module decides which
//! [`TokenKind`] it becomes.

use crate::kind::TokenKind;
use crate::vocabulary::Vocabulary;

/// The lexical rule a lexeme was recognised by.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LexemeCategory {
    /// Letter or `_` followed by letters, digits, `_` or `.`.
    Identifier,
    /// Run of digits and `.eE+-` starting with a digit.
    Numeric,
    /// Double-quoted string, possibly unterminated.
    String,
    /// Either comment form, possibly unterminated.
    Comment,
    /// A single character that is not part of any longer lexeme.
    Symbol,
}

/// Maps lexemes to token kinds against a borrowed [`Vocabulary`].
#[derive(Copy, Clone, Debug)]
pub struct Classifier<'v> {
    vocab: &'v Vocabulary,
}

impl<'v> Classifier<'v> {
    pub fn new(vocab: &'v Vocabulary) -> Self {
        Classifier { vocab }
    }

    /// Classify `lexeme` recognised under `category`.
    ///
    /// Returns `None` only for a symbol that is neither an operator nor
    /// punctuation; the scanner skips such characters without a token.
    pub fn classify(&self, lexeme: &str, category: LexemeCategory) -> Option<TokenKind> {
        match category {
            LexemeCategory::Comment => Some(TokenKind::Comment),
            LexemeCategory::String => Some(TokenKind::String),
            LexemeCategory::Numeric => Some(TokenKind::Number),
            LexemeCategory::Identifier => Some(self.identifier(lexeme)),
            LexemeCategory::Symbol => {
                let mut chars = lexeme.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => self.symbol(ch),
                    _ => None,
                }
            }
        }
    }

    /// Classify an identifier-like lexeme.
    ///
    /// Precedence is keyword, then type (by set membership or a leading
    /// uppercase letter), then built-in function, then variable. A
    /// capitalised keyword such as `Constructor` stays a keyword.
    pub fn identifier(&self, word: &str) -> TokenKind {
        if self.vocab.keywords().contains(word) {
            TokenKind::Keyword
        } else if self.vocab.types().contains(word) || starts_uppercase(word) {
            TokenKind::Type
        } else if self.vocab.builtin_functions().contains(word) {
            TokenKind::Function
        } else {
            TokenKind::Variable
        }
    }

    /// Classify a single character. Operators win over punctuation when a
    /// character is configured as both.
    pub fn symbol(&self, ch: char) -> Option<TokenKind> {
        if self.vocab.operators().contains(ch) {
            Some(TokenKind::Operator)
        } else if self.vocab.punctuation().contains(ch) {
            Some(TokenKind::Punctuation)
        } else {
            None
        }
    }
}

#[inline]
fn starts_uppercase(word: &str) -> bool {
    word.as_bytes().first().is_some_and(u8::is_ascii_uppercase)
}
