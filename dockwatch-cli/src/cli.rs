//! CLI argument parsing types using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// dockwatch command-line interface
#[derive(Parser)]
#[command(name = "dockwatch")]
#[command(version, about = "Remote docker container monitor over SSH")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the host configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Remote host (overrides the config file)
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// SSH port (overrides the config file)
    #[arg(long, global = true)]
    pub port: Option<u16>,

    /// SSH username (overrides the config file)
    #[arg(long, global = true)]
    pub user: Option<String>,

    /// Path to an SSH identity file (overrides the config file)
    #[arg(long, global = true)]
    pub identity: Option<String>,

    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Fetch one stats snapshot and print the table
    Stats {
        /// Sort keys, highest priority first (e.g. "cpu:desc,name:asc")
        #[arg(short, long)]
        sort: Option<String>,
    },

    /// Refresh the stats table periodically until interrupted
    Watch {
        /// Seconds between refreshes (clamped to 1-60)
        #[arg(short, long, default_value_t = dockwatch_core::DEFAULT_REFRESH_INTERVAL_SECS)]
        interval: u64,

        /// Sort keys, highest priority first (e.g. "cpu:desc,name:asc")
        #[arg(short, long)]
        sort: Option<String>,
    },

    /// Stop a container
    Stop {
        /// Container id or name
        container: String,
    },

    /// Start a container
    Start {
        /// Container id or name
        container: String,
    },

    /// Restart a container
    Restart {
        /// Container id or name
        container: String,
    },

    /// Tail a container's log output (Ctrl-C to stop)
    Logs {
        /// Container id or name
        container: String,
    },
}
