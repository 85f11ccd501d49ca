//! Scanner and semantic-token encoder for the Nexus language.
//!
//! This crate has no server dependencies. It turns source text into
//! classified token spans and encodes them in the relative-position format
//! used by the semantic-tokens request of the language server protocol.
//!
//! # Pipeline
//!
//! ```text
//! &str ──Scanner──▶ RawToken* ──DeltaEncoder──▶ EncodedToken* ──flatten──▶ [u32]
//!         │   │
//!         │   └── Classifier (Vocabulary)
//!         └────── LineColumn::advance
//! ```
//!
//! Every call rebuilds the pipeline over the full text; nothing is cached
//! between calls.
//!
//! ```
//! use nexus_lexer_core::{encode_document, flatten, Vocabulary};
//!
//! let data = flatten(&encode_document("x = 1", &Vocabulary::default()));
//! assert_eq!(data, [0, 0, 1, 3, 0, 0, 2, 1, 7, 0, 0, 2, 1, 4, 0]);
//! ```

mod classify;
mod encode;
mod kind;
mod position;
mod scanner;
mod vocabulary;

pub use classify::{Classifier, LexemeCategory};
pub use encode::{encode, flatten, DeltaEncoder, EncodedToken, WORDS_PER_TOKEN};
pub use kind::TokenKind;
pub use position::{char_width, utf16_len, LineColumn};
pub use scanner::{
    scan, RawToken, Scanner, BLOCK_COMMENT_CLOSE, BLOCK_COMMENT_OPEN, LINE_COMMENT,
};
pub use vocabulary::{
    CharSet, Vocabulary, WordSet, DEFAULT_BUILTIN_FUNCTIONS, DEFAULT_KEYWORDS,
    DEFAULT_OPERATORS, DEFAULT_PUNCTUATION, DEFAULT_TYPES,
};

/// Scan `text` and encode the result in one pass.
pub fn encode_document(text: &str, vocab: &Vocabulary) -> Vec<EncodedToken> {
    let mut encoder = DeltaEncoder::new();
    Scanner::new(text, vocab)
        .map(|token| encoder.encode(&token))
        .collect()
}
