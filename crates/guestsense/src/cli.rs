use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "guestsense")]
#[command(version)]
#[command(about = "Guest feedback synthesis service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API
    Serve {
        /// Interface to bind (overrides GUESTSENSE_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides GUESTSENSE_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Synthesize a feedback file once and print the result as JSON
    Synthesize {
        /// JSON array or JSONL file of feedback records
        #[arg(short, long)]
        file: PathBuf,

        /// Model identifier (overrides GUESTSENSE_MODEL)
        #[arg(long)]
        model: Option<String>,
    },

    /// Print version information
    Version,
}
