// Nexus Language Server Protocol implementation
//
// Speaks JSON-RPC over stdin/stdout.
//
// Usage: nexus-lsp [--vocabulary <path>]

use std::sync::Arc;

use nexus_lsp::config::{Command, VOCABULARY_ENV};
use nexus_lsp::logging::init_tracing;
use nexus_lsp::NexusLanguageServer;
use tower_lsp::{LspService, Server};

#[tokio::main]
async fn main() {
    init_tracing();

    let args = std::env::args().skip(1);
    let settings = match Command::parse(args, std::env::var_os(VOCABULARY_ENV)) {
        Ok(Command::Serve(settings)) => settings,
        Ok(Command::Version) => {
            println!("nexus-lsp {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        Ok(Command::Help) => {
            print_usage();
            return;
        }
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
    };

    let vocabulary = match settings.load_vocabulary() {
        Ok(vocabulary) => Arc::new(vocabulary),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };
    tracing::info!(
        keywords = vocabulary.keywords().len(),
        types = vocabulary.types().len(),
        builtins = vocabulary.builtin_functions().len(),
        "vocabulary loaded"
    );

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) =
        LspService::new(move |client| NexusLanguageServer::new(client, Arc::clone(&vocabulary)));
    Server::new(stdin, stdout, socket).serve(service).await;
}

fn print_usage() {
    eprintln!("Usage: nexus-lsp [--vocabulary <path>]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --vocabulary <path>  JSON file overriding keyword/type/builtin/symbol sets");
    eprintln!("                       (default: ${VOCABULARY_ENV}, then built-in sets)");
    eprintln!("  --stdio              Accepted for editor compatibility; stdio is the only transport");
    eprintln!("  -V, --version        Print version");
    eprintln!("  -h, --help           Print this help");
    eprintln!();
    eprintln!("Logging: set RUST_LOG (e.g. RUST_LOG=nexus_lsp=debug); logs go to stderr.");
}
