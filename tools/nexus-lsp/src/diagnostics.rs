//! Brace-balance diagnostic.
//!
//! A plain count of `{` against `}` over the whole text. It does not match
//! pairs and does not look at tokens, so braces inside strings and comments
//! count too.

use nexus_lexer_core::{char_width, LineColumn};
use tower_lsp::lsp_types::{Diagnostic, DiagnosticSeverity, Position, Range};

/// Source name attached to published diagnostics.
pub const SOURCE: &str = "nexus-lsp";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BraceCount {
    pub open: usize,
    pub close: usize,
}

impl BraceCount {
    pub fn of(text: &str) -> Self {
        text.bytes().fold(BraceCount { open: 0, close: 0 }, |count, b| match b {
            b'{' => BraceCount {
                open: count.open + 1,
                ..count
            },
            b'}' => BraceCount {
                close: count.close + 1,
                ..count
            },
            _ => count,
        })
    }

    pub fn is_balanced(self) -> bool {
        self.open == self.close
    }
}

/// Diagnostics for `text`: empty when braces balance, otherwise one error
/// covering the whole document, up to [`document_end`].
pub fn brace_diagnostics(text: &str) -> Vec<Diagnostic> {
    let count = BraceCount::of(text);
    if count.is_balanced() {
        return Vec::new();
    }

    let end = document_end(text);
    vec![Diagnostic {
        range: Range::new(Position::new(0, 0), Position::new(end.line, end.column)),
        severity: Some(DiagnosticSeverity::ERROR),
        source: Some(SOURCE.to_string()),
        message: format!(
            "Unmatched braces: {} opening, {} closing",
            count.open, count.close
        ),
        ..Default::default()
    }]
}

/// Position just past the last character. Line breaks are `\n`, `\r\n` and
/// a bare `\r`, as the protocol defines them.
pub fn document_end(text: &str) -> LineColumn {
    if !text.contains('\r') {
        return LineColumn::end_of(text);
    }

    let mut end = LineColumn::ORIGIN;
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\r' | '\n' => {
                if ch == '\r' {
                    chars.next_if_eq(&'\n');
                }
                end = LineColumn::new(end.line + 1, 0);
            }
            _ => end.column = end.column.saturating_add(char_width(ch)),
        }
    }
    end
}
