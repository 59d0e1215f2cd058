//! CLI argument parsing via clap.

use clap::Parser;
use std::path::PathBuf;

/// Interactive command-line client for the FSUIPC flight-simulator interface.
#[derive(Debug, Parser)]
#[command(name = "fsuipc-cmd", version = fsuipc_cmd::build_info::cli_version_text())]
pub struct Args {
    /// Explicit path to the native library (skips the default search).
    #[arg(long = "library", value_name = "PATH")]
    pub library: Option<PathBuf>,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}
