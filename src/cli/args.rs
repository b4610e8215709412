//! CLI argument structures

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Build cookie boxes and walk through checkout from the terminal
#[derive(Parser)]
#[command(name = "cookiebox")]
#[command(about = "cookiebox - Cookie box storefront driven from the command line", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show cookies, box sizes and reviews
    Catalog,

    /// Replay a YAML script of storefront actions
    Run {
        /// Script file to replay
        script: PathBuf,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate configuration and catalog
    #[command(name = "check-config")]
    CheckConfig,
}
