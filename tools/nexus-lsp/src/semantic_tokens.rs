//! `textDocument/semanticTokens/full` support.

use nexus_lexer_core::{encode_document, EncodedToken, TokenKind, Vocabulary};
use tower_lsp::lsp_types::{
    SemanticToken, SemanticTokenType, SemanticTokens, SemanticTokensLegend,
};

/// Legend declared at initialization. Token types are listed in
/// [`TokenKind`] order, so a kind's wire code indexes this list.
pub fn legend() -> SemanticTokensLegend {
    SemanticTokensLegend {
        token_types: TokenKind::ALL
            .iter()
            .map(|kind| SemanticTokenType::new(kind.legend_name()))
            .collect(),
        token_modifiers: Vec::new(),
    }
}

/// Tokens for a document snapshot. A missing document yields no tokens.
pub fn semantic_tokens(text: Option<&str>, vocab: &Vocabulary) -> SemanticTokens {
    let data = text
        .map(|text| {
            encode_document(text, vocab)
                .into_iter()
                .map(to_lsp)
                .collect()
        })
        .unwrap_or_default();

    SemanticTokens {
        result_id: None,
        data,
    }
}

fn to_lsp(token: EncodedToken) -> SemanticToken {
    SemanticToken {
        delta_line: token.delta_line,
        delta_start: token.delta_column,
        length: token.length,
        token_type: token.kind.code(),
        token_modifiers_bitset: token.modifiers,
    }
}
