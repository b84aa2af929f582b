//! CLI definition for the `parley` binary.

use clap::Parser;
use std::path::PathBuf;

/// Relay chat messages to a locally hosted language model.
#[derive(Parser)]
#[command(name = "parley", version, about, long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Suppress all output except errors.
    #[arg(long)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
