//! Token kinds and their wire codes.

use std::fmt;

/// Lexical category of an emitted token.
///
/// The discriminant is the code sent on the wire, and it indexes the
/// semantic-token legend the server declares at initialization. The two are
/// correlated only by position, so the variant order here is the legend
/// order and must not change.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    Keyword = 0,
    Type = 1,
    Function = 2,
    Variable = 3,
    Number = 4,
    String = 5,
    Comment = 6,
    Operator = 7,
    Punctuation = 8,
}

impl TokenKind {
    /// Every kind, in legend order.
    pub const ALL: [TokenKind; 9] = [
        TokenKind::Keyword,
        TokenKind::Type,
        TokenKind::Function,
        TokenKind::Variable,
        TokenKind::Number,
        TokenKind::String,
        TokenKind::Comment,
        TokenKind::Operator,
        TokenKind::Punctuation,
    ];

    /// Wire code (0-8).
    #[inline]
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Inverse of [`code()`](Self::code).
    pub fn from_code(code: u32) -> Option<TokenKind> {
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// Name of this kind in the semantic-token legend.
    pub const fn legend_name(self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Type => "type",
            TokenKind::Function => "function",
            TokenKind::Variable => "variable",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Comment => "comment",
            TokenKind::Operator => "operator",
            TokenKind::Punctuation => "punctuation",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.legend_name())
    }
}
