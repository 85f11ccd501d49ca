// Nexus LSP server implementation

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use nexus_lexer_core::Vocabulary;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

use crate::completion::{self, TRIGGER_CHARACTERS};
use crate::diagnostics::brace_diagnostics;
use crate::document::Document;
use crate::semantic_tokens;

/// Client capabilities the server adapts to, recorded at `initialize`.
#[derive(Debug, Default)]
struct ClientSupport {
    configuration: AtomicBool,
    workspace_folders: AtomicBool,
}

/// Nexus Language Server
pub struct NexusLanguageServer {
    client: Client,
    vocabulary: Arc<Vocabulary>,
    documents: DashMap<Url, Document>,
    support: ClientSupport,
}

impl NexusLanguageServer {
    pub fn new(client: Client, vocabulary: Arc<Vocabulary>) -> Self {
        NexusLanguageServer {
            client,
            vocabulary,
            documents: DashMap::new(),
            support: ClientSupport::default(),
        }
    }

    /// Copy of the current text, so no map guard outlives the lookup.
    fn snapshot(&self, uri: &Url) -> Option<String> {
        self.documents.get(uri).map(|doc| doc.text().to_string())
    }

    /// Validate a document and publish the result.
    async fn validate(&self, uri: Url, text: &str, version: i32) {
        let diagnostics = brace_diagnostics(text);
        tracing::debug!(%uri, version, count = diagnostics.len(), "publishing diagnostics");
        self.client
            .publish_diagnostics(uri, diagnostics, Some(version))
            .await;
    }

    fn capabilities(&self) -> ServerCapabilities {
        let workspace = self
            .support
            .workspace_folders
            .load(Ordering::Relaxed)
            .then(|| WorkspaceServerCapabilities {
                workspace_folders: Some(WorkspaceFoldersServerCapabilities {
                    supported: Some(true),
                    change_notifications: None,
                }),
                file_operations: None,
            });

        ServerCapabilities {
            text_document_sync: Some(TextDocumentSyncCapability::Kind(
                TextDocumentSyncKind::INCREMENTAL,
            )),
            completion_provider: Some(CompletionOptions {
                resolve_provider: Some(true),
                trigger_characters: Some(
                    TRIGGER_CHARACTERS.iter().map(ToString::to_string).collect(),
                ),
                ..Default::default()
            }),
            semantic_tokens_provider: Some(
                SemanticTokensServerCapabilities::SemanticTokensOptions(SemanticTokensOptions {
                    legend: semantic_tokens::legend(),
                    full: Some(SemanticTokensFullOptions::Bool(true)),
                    range: None,
                    ..Default::default()
                }),
            ),
            workspace,
            ..Default::default()
        }
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for NexusLanguageServer {
    #[tracing::instrument(level = "debug", skip_all)]
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        let workspace = params.capabilities.workspace.as_ref();
        let configuration = workspace.and_then(|w| w.configuration).unwrap_or(false);
        let folders = workspace.and_then(|w| w.workspace_folders).unwrap_or(false);
        self.support
            .configuration
            .store(configuration, Ordering::Relaxed);
        self.support
            .workspace_folders
            .store(folders, Ordering::Relaxed);
        tracing::debug!(configuration, folders, "client capabilities");

        Ok(InitializeResult {
            capabilities: self.capabilities(),
            server_info: Some(ServerInfo {
                name: "nexus-lsp".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        if self.support.configuration.load(Ordering::Relaxed) {
            let registration = Registration {
                id: "nexus-lsp/didChangeConfiguration".to_string(),
                method: "workspace/didChangeConfiguration".to_string(),
                register_options: None,
            };
            if let Err(err) = self.client.register_capability(vec![registration]).await {
                tracing::warn!(%err, "failed to register for configuration changes");
            }
        }

        self.client
            .log_message(MessageType::INFO, "Nexus LSP Server started")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_change_workspace_folders(&self, params: DidChangeWorkspaceFoldersParams) {
        tracing::debug!(
            added = params.event.added.len(),
            removed = params.event.removed.len(),
            "workspace folders changed"
        );
        self.client
            .log_message(MessageType::LOG, "Workspace folder change event received.")
            .await;
    }

    async fn did_change_configuration(&self, _: DidChangeConfigurationParams) {
        // The vocabulary is fixed for the life of the process.
        tracing::debug!("configuration change ignored");
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let doc = params.text_document;
        tracing::debug!(uri = %doc.uri, version = doc.version, "did_open");

        // Stored before publishing so a change arriving meanwhile finds it.
        self.documents
            .insert(doc.uri.clone(), Document::new(doc.text.clone(), doc.version));
        self.validate(doc.uri, &doc.text, doc.version).await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;

        let text = match self.documents.get_mut(&uri) {
            Some(mut doc) => {
                doc.apply_changes(params.content_changes, version);
                doc.text().to_string()
            }
            None => {
                tracing::warn!(%uri, "change for a document that is not open");
                return;
            }
        };

        self.validate(uri, &text, version).await;
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        tracing::debug!(uri = %params.text_document.uri, "did_close");
        self.documents.remove(&params.text_document.uri);
    }

    async fn completion(&self, _: CompletionParams) -> Result<Option<CompletionResponse>> {
        Ok(Some(CompletionResponse::Array(
            completion::completion_items(&self.vocabulary),
        )))
    }

    async fn completion_resolve(&self, item: CompletionItem) -> Result<CompletionItem> {
        Ok(completion::resolve(item, &self.vocabulary))
    }

    #[tracing::instrument(level = "debug", skip_all, fields(uri = %params.text_document.uri))]
    async fn semantic_tokens_full(
        &self,
        params: SemanticTokensParams,
    ) -> Result<Option<SemanticTokensResult>> {
        let text = self.snapshot(&params.text_document.uri);
        let tokens = semantic_tokens::semantic_tokens(text.as_deref(), &self.vocabulary);
        tracing::trace!(count = tokens.data.len(), "semantic tokens");
        Ok(Some(SemanticTokensResult::Tokens(tokens)))
    }
}
