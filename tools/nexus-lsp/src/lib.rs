//! Nexus Language Server Protocol implementation.
//!
//! Provides IDE features:
//! - Semantic highlighting (full-document semantic tokens)
//! - Code completion with resolve-time details
//! - Brace-balance diagnostics
//!
//! Scanning and token encoding live in `nexus_lexer_core`; this crate wires
//! them to the protocol.

pub mod completion;
pub mod config;
pub mod diagnostics;
pub mod document;
pub mod logging;
pub mod semantic_tokens;
pub mod server;

pub use server::NexusLanguageServer;
