//! Single-pass scanner producing positioned, classified tokens.
//!
//! The scanner walks the source once, left to right, and yields a
//! [`RawToken`] for every lexeme that maps to a [`TokenKind`]. Whitespace,
//! newlines and unrecognised characters advance the cursor without a token.
//!
//! # Rules
//!
//! Tried in order at each position:
//!
//! 1. `\n` moves to the next line.
//! 2. Other whitespace moves the column.
//! 3. `/*` starts a line comment running to (not including) the newline.
//! 4. `/!` starts a block comment running through the closing `!/`.
//! 5. `"` starts a string running through the next quote not preceded by
//!    a backslash.
//! 6. An ASCII digit starts a number: a run of digits and `.eE+-`.
//! 7. An ASCII letter or `_` starts an identifier: a run of letters, digits,
//!    `_` and `.`.
//! 8. An operator character.
//! 9. A punctuation character.
//! 10. Anything else is skipped.
//!
//! # Recovery
//!
//! The scanner never fails. An unterminated block comment or string runs to
//! the end of the document, and unknown characters are skipped silently.

use memchr::{memchr, memmem};

use crate::classify::{Classifier, LexemeCategory};
use crate::kind::TokenKind;
use crate::position::{char_width, utf16_len, LineColumn};
use crate::vocabulary::Vocabulary;

/// Opens a comment that runs to end of line.
pub const LINE_COMMENT: &str = "/*";
/// Opens a comment closed by [`BLOCK_COMMENT_CLOSE`].
pub const BLOCK_COMMENT_OPEN: &str = "/!";
/// Closes a comment opened by [`BLOCK_COMMENT_OPEN`].
pub const BLOCK_COMMENT_CLOSE: &str = "!/";

/// A classified token at an absolute position.
///
/// `length` is in UTF-16 code units and is never zero. For a token spanning
/// several lines it covers the whole lexeme, newlines included.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RawToken {
    pub line: u32,
    pub column: u32,
    pub length: u32,
    pub kind: TokenKind,
}

impl RawToken {
    #[inline]
    pub fn start(&self) -> LineColumn {
        LineColumn::new(self.line, self.column)
    }
}

/// Scan position: byte offset plus the line/column it corresponds to.
///
/// Owned by one [`Scanner`] and never shared.
#[derive(Copy, Clone, Debug, Default)]
struct ScanCursor {
    pos: usize,
    at: LineColumn,
}

/// Iterator over the tokens of one document.
///
/// ```
/// use nexus_lexer_core::{Scanner, TokenKind, Vocabulary};
///
/// let vocab = Vocabulary::default();
/// let kinds: Vec<TokenKind> = Scanner::new("x = 1", &vocab).map(|t| t.kind).collect();
/// assert_eq!(kinds, [TokenKind::Variable, TokenKind::Operator, TokenKind::Number]);
/// ```
pub struct Scanner<'src, 'v> {
    text: &'src str,
    classifier: Classifier<'v>,
    cursor: ScanCursor,
}

impl<'src, 'v> Scanner<'src, 'v> {
    /// Create a scanner at the start of `text`.
    pub fn new(text: &'src str, vocab: &'v Vocabulary) -> Self {
        Scanner {
            text,
            classifier: Classifier::new(vocab),
            cursor: ScanCursor::default(),
        }
    }

    #[inline]
    fn bytes(&self) -> &'src [u8] {
        self.text.as_bytes()
    }

    #[inline]
    fn current_char(&self) -> Option<char> {
        self.text[self.cursor.pos..].chars().next()
    }

    #[inline]
    fn at_marker(&self, marker: &str) -> bool {
        self.bytes()[self.cursor.pos..].starts_with(marker.as_bytes())
    }

    /// Move past `ch` without emitting anything.
    fn skip(&mut self, ch: char) {
        self.cursor.pos += ch.len_utf8();
        if ch == '\n' {
            self.cursor.at = LineColumn::new(self.cursor.at.line + 1, 0);
        } else {
            self.cursor.at.column = self.cursor.at.column.saturating_add(char_width(ch));
        }
    }

    /// Consume `start..end` as one lexeme and emit it if it classifies.
    ///
    /// The cursor always moves to `end`, so a lexeme that does not
    /// classify is skipped as a whole.
    fn lexeme(&mut self, end: usize, category: LexemeCategory) -> Option<RawToken> {
        let start = self.cursor.pos;
        debug_assert!(end > start, "lexeme at {start} is empty");
        let origin = self.cursor.at;
        let text = &self.text[start..end];

        self.cursor.at = origin.advance(self.text, start, end);
        self.cursor.pos = end;

        let kind = self.classifier.classify(text, category)?;
        Some(RawToken {
            line: origin.line,
            column: origin.column,
            length: utf16_len(text),
            kind,
        })
    }

    fn line_comment(&mut self) -> Option<RawToken> {
        let start = self.cursor.pos;
        let end = memchr(b'\n', &self.bytes()[start..]).map_or(self.text.len(), |i| start + i);
        self.lexeme(end, LexemeCategory::Comment)
    }

    fn block_comment(&mut self) -> Option<RawToken> {
        let body = self.cursor.pos + BLOCK_COMMENT_OPEN.len();
        let end = memmem::find(&self.bytes()[body..], BLOCK_COMMENT_CLOSE.as_bytes())
            .map_or(self.text.len(), |i| body + i + BLOCK_COMMENT_CLOSE.len());
        self.lexeme(end, LexemeCategory::Comment)
    }

    fn string(&mut self) -> Option<RawToken> {
        let bytes = self.bytes();
        let mut end = self.cursor.pos + 1;
        while end < bytes.len() && (bytes[end] != b'"' || bytes[end - 1] == b'\\') {
            end += 1;
        }
        if end < bytes.len() {
            end += 1; // closing quote
        }
        self.lexeme(end, LexemeCategory::String)
    }

    fn number(&mut self) -> Option<RawToken> {
        let end = self.eat_while(is_number_continue);
        self.lexeme(end, LexemeCategory::Numeric)
    }

    fn identifier(&mut self) -> Option<RawToken> {
        let end = self.eat_while(is_ident_continue);
        self.lexeme(end, LexemeCategory::Identifier)
    }

    fn symbol(&mut self, ch: char) -> Option<RawToken> {
        let end = self.cursor.pos + ch.len_utf8();
        self.lexeme(end, LexemeCategory::Symbol)
    }

    /// End offset of the run of bytes matching `pred`, from the cursor.
    fn eat_while(&self, pred: fn(u8) -> bool) -> usize {
        let start = self.cursor.pos;
        let run = self.bytes()[start..]
            .iter()
            .take_while(|&&b| pred(b))
            .count();
        start + run
    }
}

impl Iterator for Scanner<'_, '_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        while let Some(ch) = self.current_char() {
            let token = match ch {
                '\n' => {
                    self.skip(ch);
                    None
                }
                c if c.is_whitespace() => {
                    self.skip(c);
                    None
                }
                _ if self.at_marker(LINE_COMMENT) => self.line_comment(),
                _ if self.at_marker(BLOCK_COMMENT_OPEN) => self.block_comment(),
                '"' => self.string(),
                '0'..='9' => self.number(),
                c if is_ident_start(c) => self.identifier(),
                c => self.symbol(c),
            };
            if token.is_some() {
                return token;
            }
        }
        None
    }
}

/// Scan all of `text` into tokens, in document order.
pub fn scan(text: &str, vocab: &Vocabulary) -> Vec<RawToken> {
    Scanner::new(text, vocab).collect()
}

#[inline]
fn is_ident_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'.'
}

#[inline]
fn is_number_continue(b: u8) -> bool {
    matches!(b, b'0'..=b'9' | b'.' | b'e' | b'E' | b'+' | b'-')
}

#[cfg(test)]
mod tests;
