//! CLI entry point for fsuipc-cmd.

mod cli;

use clap::Parser;
use fsuipc_cmd::client::NativeClient;
use fsuipc_cmd::error::StartupError;
use fsuipc_cmd::library;
use fsuipc_cmd::render::{RenderSink, Renderer};
use fsuipc_cmd::repl::Session;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    init_diagnostics();

    let renderer = Renderer::new(!args.no_color);

    let path = match resolve_library_path(args.library) {
        Ok(path) => path,
        Err(e) => {
            renderer.error(&e.to_string());
            std::process::exit(1);
        }
    };

    let client = match NativeClient::load(&path) {
        Ok(client) => client,
        Err(e) => {
            renderer.error(&e.to_string());
            std::process::exit(1);
        }
    };

    let mut session = Session::new(client, renderer);
    if let Err(e) = session.run().await {
        eprintln!("error: failed to read input: {e}");
        std::process::exit(1);
    }
}

/// Route diagnostics to stderr so they never interleave with command output.
fn init_diagnostics() {
    let filter = EnvFilter::try_from_env("FSUIPC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_library_path(explicit: Option<PathBuf>) -> Result<PathBuf, StartupError> {
    match explicit {
        Some(path) if path.is_file() => Ok(path),
        Some(path) => Err(StartupError::LibraryNotFound {
            searched: vec![path],
        }),
        None => library::locate(),
    }
}
