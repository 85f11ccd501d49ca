//! Relative-position encoding of scanned tokens.
//!
//! Each token is rewritten relative to the token before it (or to the
//! origin for the first one) and flattened to five integers:
//! `[delta_line, delta_column, length, kind, modifiers]`.
//!
//! When a token starts on a later line than its predecessor, `delta_column`
//! is its absolute column. On the same line it is the column difference.

use crate::kind::TokenKind;
use crate::position::LineColumn;
use crate::scanner::RawToken;

/// Integers per encoded token.
pub const WORDS_PER_TOKEN: usize = 5;

/// A token positioned relative to its predecessor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EncodedToken {
    pub delta_line: u32,
    pub delta_column: u32,
    pub length: u32,
    pub kind: TokenKind,
    /// No modifiers are defined; always zero.
    pub modifiers: u32,
}

impl EncodedToken {
    #[inline]
    pub fn to_words(self) -> [u32; WORDS_PER_TOKEN] {
        [
            self.delta_line,
            self.delta_column,
            self.length,
            self.kind.code(),
            self.modifiers,
        ]
    }
}

/// Stateful encoder remembering the previous token's start.
///
/// Only correct when tokens are fed in document order, which is the order
/// the scanner produces them in.
#[derive(Clone, Debug, Default)]
pub struct DeltaEncoder {
    previous: LineColumn,
}

impl DeltaEncoder {
    pub fn new() -> Self {
        DeltaEncoder::default()
    }

    pub fn encode(&mut self, token: &RawToken) -> EncodedToken {
        let start = token.start();
        debug_assert!(
            start >= self.previous,
            "token at {start:?} precedes previous token at {:?}",
            self.previous
        );

        let delta_line = start.line - self.previous.line;
        let delta_column = if delta_line == 0 {
            start.column - self.previous.column
        } else {
            start.column
        };
        self.previous = start;

        EncodedToken {
            delta_line,
            delta_column,
            length: token.length,
            kind: token.kind,
            modifiers: 0,
        }
    }
}

/// Encode an ordered token sequence.
pub fn encode<'a, I>(tokens: I) -> Vec<EncodedToken>
where
    I: IntoIterator<Item = &'a RawToken>,
{
    let mut encoder = DeltaEncoder::new();
    tokens.into_iter().map(|t| encoder.encode(t)).collect()
}

/// Flatten encoded tokens into the wire array.
pub fn flatten(tokens: &[EncodedToken]) -> Vec<u32> {
    let mut data = Vec::with_capacity(tokens.len() * WORDS_PER_TOKEN);
    for token in tokens {
        data.extend_from_slice(&token.to_words());
    }
    data
}
