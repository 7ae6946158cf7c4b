//! dockwatch - remote docker container monitor over SSH
//!
//! Provides commands for fetching and watching the container stats
//! table, stopping/starting/restarting containers, and tailing a
//! container's logs.

mod cli;
mod commands;
mod error;
mod format;
mod util;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let quiet = cli.quiet;
    let result = commands::dispatch(cli);

    if let Err(e) = result {
        if !quiet {
            eprintln!("Error: {e}");
        }
        std::process::exit(e.exit_code());
    }
}

/// Installs the tracing subscriber on stderr, respecting `RUST_LOG`
fn init_tracing(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
