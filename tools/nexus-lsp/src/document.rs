//! Open-document text, kept current under incremental sync.

use nexus_lexer_core::char_width;
use tower_lsp::lsp_types::{Position, TextDocumentContentChangeEvent};

/// Text and version of one open document.
#[derive(Clone, Debug)]
pub struct Document {
    text: String,
    version: i32,
}

impl Document {
    pub fn new(text: String, version: i32) -> Self {
        Document { text, version }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    /// Apply a batch of changes in order and record the new version.
    pub fn apply_changes(&mut self, changes: Vec<TextDocumentContentChangeEvent>, version: i32) {
        for change in changes {
            self.apply_change(change);
        }
        self.version = version;
    }

    /// Apply one change. A change without a range replaces the whole text.
    pub fn apply_change(&mut self, change: TextDocumentContentChangeEvent) {
        match change.range {
            Some(range) => {
                let start = offset_at(&self.text, range.start);
                let end = offset_at(&self.text, range.end).max(start);
                self.text.replace_range(start..end, &change.text);
            }
            None => self.text = change.text,
        }
    }
}

/// Byte offset of an LSP position (UTF-16 columns).
///
/// A column past the end of its line clamps to the line end, and a line
/// past the end of the text clamps to the text end. A column that falls
/// inside a surrogate pair snaps to the start of that character.
pub fn offset_at(text: &str, position: Position) -> usize {
    let mut line = 0;
    let mut column = 0;

    for (offset, ch) in text.char_indices() {
        if line == position.line {
            if ch == '\n' || column >= position.character {
                return offset;
            }
            column += char_width(ch);
            if column > position.character {
                return offset;
            }
        } else if ch == '\n' {
            line += 1;
        }
    }

    text.len()
}
