//! Line/column tracking across spans of source text.
//!
//! Positions are zero-based. Columns and lengths are counted in UTF-16 code
//! units, which is the default position encoding of the language server
//! protocol. For ASCII text a code unit is one character.
//!
//! Offsets passed into this module are byte offsets into a `&str` and must
//! fall on `char` boundaries.

use memchr::memchr;

/// A zero-based `(line, column)` position.
///
/// Ordering is lexicographic: line first, then column. The scanner relies on
/// this to check that tokens come out in document order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineColumn {
    pub line: u32,
    pub column: u32,
}

impl LineColumn {
    /// Start of the document.
    pub const ORIGIN: LineColumn = LineColumn { line: 0, column: 0 };

    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        LineColumn { line, column }
    }

    /// Position reached after consuming `text[start..end]` from `self`.
    ///
    /// Each `\n` moves to column 0 of the next line; every other character
    /// moves the column forward by its UTF-16 width. A zero-length span
    /// returns `self` unchanged.
    ///
    /// Spans without a newline take a fast path that only measures width.
    pub fn advance(self, text: &str, start: usize, end: usize) -> LineColumn {
        debug_assert!(start <= end, "span start {start} is past end {end}");
        let span = &text[start..end];

        if memchr(b'\n', span.as_bytes()).is_none() {
            return LineColumn {
                line: self.line,
                column: self.column.saturating_add(utf16_len(span)),
            };
        }

        let mut line = self.line;
        let mut column = self.column;
        for ch in span.chars() {
            if ch == '\n' {
                line += 1;
                column = 0;
            } else {
                column = column.saturating_add(char_width(ch));
            }
        }
        LineColumn { line, column }
    }

    /// Position of the end of `text`, starting from the origin.
    pub fn end_of(text: &str) -> LineColumn {
        LineColumn::ORIGIN.advance(text, 0, text.len())
    }
}

/// Width of `text` in UTF-16 code units, saturating at `u32::MAX`.
#[inline]
pub fn utf16_len(text: &str) -> u32 {
    let units = if text.is_ascii() {
        text.len()
    } else {
        text.encode_utf16().count()
    };
    u32::try_from(units).unwrap_or(u32::MAX)
}

/// Width of one character in UTF-16 code units (1 or 2).
#[inline]
pub fn char_width(ch: char) -> u32 {
    u32::try_from(ch.len_utf16()).unwrap_or(2)
}
