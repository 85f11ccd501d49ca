//! Completion items and resolve-time details.
//!
//! The list is static: every vocabulary word plus a few snippet templates.
//! Each item carries its identifying string in `data`, which the resolve
//! step uses to attach a description.

use nexus_lexer_core::Vocabulary;
use serde_json::Value;
use tower_lsp::lsp_types::{CompletionItem, CompletionItemKind, Documentation, InsertTextFormat};

/// Characters that trigger completion.
pub const TRIGGER_CHARACTERS: [&str; 4] = [".", ":", ">", "<"];

/// A snippet completion: label, insert text, identifying data.
struct Snippet {
    label: &'static str,
    body: &'static str,
    data: &'static str,
}

static SNIPPETS: [Snippet; 4] = [
    Snippet {
        label: "Options<T>",
        body: "Options<${1:T}>",
        data: "options_template",
    },
    Snippet {
        label: "class",
        body: "class ${1:ClassName}\n{\n\t${2}\n}",
        data: "class_snippet",
    },
    Snippet {
        label: "sum",
        body: "sum ${1:TypeName}\n{\n\t${2:Variant}\n}",
        data: "sum_snippet",
    },
    Snippet {
        label: "match",
        body: "match (${1:value})\n{\n\t${2:Pattern} => ${3:expression}\n}",
        data: "match_snippet",
    },
];

/// All completion items, in vocabulary order followed by snippets.
pub fn completion_items(vocab: &Vocabulary) -> Vec<CompletionItem> {
    let words = vocab
        .keywords()
        .iter()
        .map(|w| word_item(w, CompletionItemKind::KEYWORD))
        .chain(
            vocab
                .types()
                .iter()
                .map(|w| word_item(w, CompletionItemKind::TYPE_PARAMETER)),
        )
        .chain(
            vocab
                .builtin_functions()
                .iter()
                .map(|w| word_item(w, CompletionItemKind::FUNCTION)),
        );

    let snippets = SNIPPETS.iter().map(|s| CompletionItem {
        label: s.label.to_string(),
        kind: Some(CompletionItemKind::SNIPPET),
        insert_text: Some(s.body.to_string()),
        insert_text_format: Some(InsertTextFormat::SNIPPET),
        data: Some(Value::String(s.data.to_string())),
        ..Default::default()
    });

    words.chain(snippets).collect()
}

fn word_item(word: &str, kind: CompletionItemKind) -> CompletionItem {
    CompletionItem {
        label: word.to_string(),
        kind: Some(kind),
        data: Some(Value::String(word.to_string())),
        ..Default::default()
    }
}

/// Fill in `detail` and `documentation` from the set the item's data
/// belongs to. Items whose data is in no set come back unchanged.
pub fn resolve(mut item: CompletionItem, vocab: &Vocabulary) -> CompletionItem {
    let Some(Value::String(data)) = &item.data else {
        return item;
    };

    let described = if vocab.keywords().contains(data) {
        Some(("Nexus keyword", format!("Keyword: {data}")))
    } else if vocab.types().contains(data) {
        Some(("Nexus type", format!("Built-in type: {data}")))
    } else if vocab.builtin_functions().contains(data) {
        Some(("Built-in function", format!("Function: {data}")))
    } else {
        None
    };

    if let Some((detail, documentation)) = described {
        item.detail = Some(detail.to_string());
        item.documentation = Some(Documentation::String(documentation));
    }
    item
}
