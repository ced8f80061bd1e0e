//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tally - Categorize bank statements and summarize spending
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Bank statement categorizer and expense summary API", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "5001")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// CSV statement served by /api/get_sample_data
        #[arg(long, env = "TALLY_SAMPLE_DATA", default_value = tally_server::DEFAULT_SAMPLE_DATA)]
        sample_data: PathBuf,

        /// Allowed CORS origins, comma-separated (any origin when unset)
        #[arg(long, env = "TALLY_ALLOWED_ORIGINS", default_value = "")]
        allowed_origins: String,
    },

    /// Print the category assigned to a transaction description
    Categorize {
        /// Transaction description, e.g. "UPI-SWIGGY ORDER"
        description: String,
    },

    /// Categorize a statement and list its transactions
    Transactions {
        /// CSV statement to read
        #[arg(short, long)]
        file: PathBuf,

        /// Only show transactions no rule matched ("Other")
        #[arg(long)]
        other: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Categorize a statement and print spending per category
    Summary {
        /// CSV statement to read
        #[arg(short, long)]
        file: PathBuf,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the built-in categories in matching priority order
    Categories,
}
